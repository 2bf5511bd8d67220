//! Web server for the bias lookup page.
//!
//! Serves the search page at `/` and answers form posts at `/check`
//! with the matching reference records as JSON.

mod error;
mod handlers;
mod routes;

pub use error::ApiError;
pub use routes::create_router;

use std::sync::Arc;

use anyhow::Context;

use crate::config::Settings;
use crate::repository::ReferenceStore;
use crate::services::LookupService;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub lookup: LookupService,
    /// Search page, read once at startup.
    pub index_page: Arc<str>,
}

impl AppState {
    /// Build state from parts already in memory.
    pub fn new(lookup: LookupService, index_page: impl Into<Arc<str>>) -> Self {
        Self {
            lookup,
            index_page: index_page.into(),
        }
    }

    /// Load the reference table and page named by `settings`.
    ///
    /// Fails if either file is missing or the table is malformed.
    pub fn load(settings: &Settings) -> anyhow::Result<Self> {
        let dataset_path = settings.dataset_path();
        let store = ReferenceStore::load(&dataset_path)?;
        tracing::info!(
            "Loaded {} bias records from {}",
            store.len(),
            dataset_path.display()
        );

        let page_path = settings.index_page_path();
        let index_page = std::fs::read_to_string(&page_path)
            .with_context(|| format!("Failed to read page '{}'", page_path.display()))?;

        Ok(Self::new(LookupService::new(store), index_page))
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::load(settings)?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", host, port))?;
    tracing::info!("Starting server at http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
