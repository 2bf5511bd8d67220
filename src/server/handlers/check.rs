//! Bias lookup handler.

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request, State},
    http::header,
    Form, Json,
};

use super::super::{ApiError, AppState};
use crate::models::BiasRecord;

/// Name of the form field holding the query.
const QUERY_FIELD: &str = "bias_type";

/// Form body for `/check`.
///
/// Accepts both `application/x-www-form-urlencoded` and
/// `multipart/form-data`. When the field is repeated the first value wins.
#[derive(Debug)]
pub struct CheckForm {
    pub bias_type: Option<String>,
}

#[async_trait]
impl<S> FromRequest<S> for CheckForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        let bias_type = if is_multipart {
            let mut multipart = Multipart::from_request(req, state).await?;
            first_multipart_value(&mut multipart).await?
        } else {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state).await?;
            pairs
                .into_iter()
                .find(|(name, _)| name == QUERY_FIELD)
                .map(|(_, value)| value)
        };

        Ok(Self { bias_type })
    }
}

async fn first_multipart_value(multipart: &mut Multipart) -> Result<Option<String>, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(QUERY_FIELD) {
            return Ok(Some(field.text().await?));
        }
    }
    Ok(None)
}

/// Search the reference table for bias types containing the submitted text.
pub async fn check_bias(
    State(state): State<AppState>,
    form: CheckForm,
) -> Result<Json<Vec<BiasRecord>>, ApiError> {
    let query = form.bias_type.ok_or(ApiError::MissingField(QUERY_FIELD))?;

    let results = state.lookup.search(&query);
    tracing::debug!(
        "Lookup '{}' matched {} records",
        query,
        results.iter().filter(|r| !r.is_not_found()).count()
    );

    Ok(Json(results))
}
