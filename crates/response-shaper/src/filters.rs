//! Available-filters discovery.
//!
//! Filter descriptions are large and change rarely, so each filter domain
//! (e.g. `serp`, `dataforseo_labs`) is fetched once and served from a
//! [`TtlCache`] until it expires.

use field_projection::get_dotted;
use serde_json::Value;
use tracing::info;

use crate::cache::{Clock, SystemClock, TtlCache, DEFAULT_TTL};

/// Fetches the available-filters document for a filter domain.
pub trait FilterSource {
    type Error;

    fn fetch(&self, domain: &str) -> Result<Value, Self::Error>;
}

impl<S: FilterSource + ?Sized> FilterSource for &S {
    type Error = S::Error;

    fn fetch(&self, domain: &str) -> Result<Value, Self::Error> {
        (**self).fetch(domain)
    }
}

pub struct AvailableFilters<S, C = SystemClock> {
    source: S,
    cache: TtlCache<Value, C>,
}

impl<S: FilterSource> AvailableFilters<S> {
    pub fn new(source: S) -> Self {
        Self::with_cache(source, TtlCache::new(DEFAULT_TTL))
    }
}

impl<S: FilterSource, C: Clock> AvailableFilters<S, C> {
    pub fn with_cache(source: S, cache: TtlCache<Value, C>) -> Self {
        Self { source, cache }
    }

    /// The full filters document for `domain`.
    pub fn document(&self, domain: &str) -> Result<Value, S::Error> {
        self.cache.get_or_try_insert_with(domain, || {
            info!(domain, "fetching available filters");
            self.source.fetch(domain)
        })
    }

    /// The sub-document at `path` (dot-separated) inside `domain`'s filters,
    /// e.g. `lookup("dataforseo_labs", "ranked_keywords.google")`.
    pub fn lookup(&self, domain: &str, path: &str) -> Result<Option<Value>, S::Error> {
        let doc = self.document(domain)?;
        Ok(get_dotted(&doc, path).cloned())
    }

    /// Drop the cached document for `domain` so the next call refetches it.
    pub fn invalidate(&self, domain: &str) -> bool {
        self.cache.invalidate(domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::tests::ManualClock;
    use serde_json::json;
    use std::cell::RefCell;
    use std::time::Duration;

    #[derive(Default)]
    struct FakeSource {
        calls: RefCell<Vec<String>>,
    }

    impl FilterSource for FakeSource {
        type Error = String;

        fn fetch(&self, domain: &str) -> Result<Value, String> {
            self.calls.borrow_mut().push(domain.to_string());
            match domain {
                "dataforseo_labs" => Ok(json!({
                    "ranked_keywords": {
                        "google": {"keyword_data.keyword_info.search_volume": "num"}
                    }
                })),
                "serp" => Ok(json!({"google": {"organic": {"rank_group": "num"}}})),
                other => Err(format!("unknown filter domain {other}")),
            }
        }
    }

    #[test]
    fn test_lookup_caches_per_domain() {
        let source = FakeSource::default();
        let filters = AvailableFilters::new(&source);

        assert_eq!(
            filters.lookup("dataforseo_labs", "ranked_keywords.google").unwrap(),
            Some(json!({"keyword_data.keyword_info.search_volume": "num"}))
        );
        assert_eq!(
            filters.lookup("dataforseo_labs", "ranked_keywords.bing").unwrap(),
            None
        );
        assert_eq!(
            filters.lookup("serp", "google.organic").unwrap(),
            Some(json!({"rank_group": "num"}))
        );
        assert_eq!(*source.calls.borrow(), vec!["dataforseo_labs", "serp"]);
    }

    #[test]
    fn test_refetch_after_expiry_and_invalidate() {
        let source = FakeSource::default();
        let clock = ManualClock::new();
        let filters =
            AvailableFilters::with_cache(&source, TtlCache::with_clock(DEFAULT_TTL, clock.clone()));

        filters.document("serp").unwrap();
        clock.advance(DEFAULT_TTL - Duration::from_secs(1));
        filters.document("serp").unwrap();
        assert_eq!(source.calls.borrow().len(), 1);

        clock.advance(Duration::from_secs(1));
        filters.document("serp").unwrap();
        assert_eq!(source.calls.borrow().len(), 2);

        assert!(filters.invalidate("serp"));
        filters.document("serp").unwrap();
        assert_eq!(source.calls.borrow().len(), 3);
    }

    #[test]
    fn test_fetch_error_propagates() {
        let source = FakeSource::default();
        let filters = AvailableFilters::new(&source);
        assert_eq!(
            filters.document("backlinks").unwrap_err(),
            "unknown filter domain backlinks"
        );
        assert!(filters.document("backlinks").is_err());
        assert_eq!(source.calls.borrow().len(), 2);
    }
}
