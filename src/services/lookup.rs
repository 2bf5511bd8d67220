//! Bias lookup: substring search over the reference table.

use std::sync::Arc;

use crate::models::BiasRecord;
use crate::repository::ReferenceStore;

/// Read-only search over a shared [`ReferenceStore`].
///
/// Cloning is cheap; every clone points at the same table.
#[derive(Debug, Clone)]
pub struct LookupService {
    store: Arc<ReferenceStore>,
}

impl LookupService {
    pub fn new(store: ReferenceStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// The table this service searches.
    pub fn store(&self) -> &ReferenceStore {
        &self.store
    }

    /// Find every record whose bias type contains `query`, ignoring case.
    ///
    /// Matches keep table order. The empty query matches everything. When
    /// nothing matches, the result is the single "not found" placeholder,
    /// so the returned list is never empty.
    pub fn search(&self, query: &str) -> Vec<BiasRecord> {
        let matches: Vec<BiasRecord> = self.store.matching(query).cloned().collect();

        if matches.is_empty() {
            vec![BiasRecord::not_found()]
        } else {
            matches
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> LookupService {
        let store = ReferenceStore::from_records(vec![
            BiasRecord::new("Gender Bias", "d1", "m1"),
            BiasRecord::new("Class Imbalance", "d2", "m2"),
            BiasRecord::new("Racial Bias", "d3", "m3"),
            BiasRecord::new("Data Representation Bias", "d4", "m4"),
        ])
        .unwrap();
        LookupService::new(store)
    }

    fn labels(records: &[BiasRecord]) -> Vec<&str> {
        records.iter().map(|r| r.bias_type.as_str()).collect()
    }

    #[test]
    fn test_single_match() {
        let results = service().search("gender");
        assert_eq!(labels(&results), vec!["Gender Bias"]);
        assert_eq!(results[0].detection_method, "d1");
    }

    #[test]
    fn test_uppercase_query_matches_in_table_order() {
        let results = service().search("BIAS");
        assert_eq!(
            labels(&results),
            vec!["Gender Bias", "Racial Bias", "Data Representation Bias"]
        );
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let svc = service();
        assert_eq!(svc.search(""), svc.store().records().to_vec());
    }

    #[test]
    fn test_no_match_returns_placeholder() {
        let results = service().search("zzz");
        assert_eq!(results, vec![BiasRecord::not_found()]);
    }

    #[test]
    fn test_multi_word_query_is_literal_substring() {
        let svc = service();
        assert_eq!(labels(&svc.search("representation bias")), vec!["Data Representation Bias"]);
        assert!(svc.search("gender racial")[0].is_not_found());
    }

    #[test]
    fn test_query_is_not_trimmed() {
        // Leading space only matches labels with an inner word boundary.
        let results = service().search(" bias");
        assert_eq!(
            labels(&results),
            vec!["Gender Bias", "Racial Bias", "Data Representation Bias"]
        );
        assert!(service().search(" gender")[0].is_not_found());
    }

    #[test]
    fn test_search_is_idempotent() {
        let svc = service();
        assert_eq!(svc.search("al"), svc.search("al"));
        assert_eq!(svc.search("AL"), svc.search("al"));
    }

    #[test]
    fn test_membership_matches_predicate() {
        let svc = service();
        for query in ["", "a", "BI", "ias", "class", "x", "Data R"] {
            let results = svc.search(query);
            let folded = query.to_lowercase();
            let expected: Vec<_> = svc
                .store()
                .records()
                .iter()
                .filter(|r| r.bias_type.to_lowercase().contains(&folded))
                .cloned()
                .collect();
            if expected.is_empty() {
                assert_eq!(results, vec![BiasRecord::not_found()], "query {query:?}");
            } else {
                assert_eq!(results, expected, "query {query:?}");
            }
        }
    }

    #[test]
    fn test_clones_share_the_table() {
        let svc = service();
        let other = svc.clone();
        assert!(std::ptr::eq(svc.store(), other.store()));
    }
}
