use crate::models::Property;
use crate::providers::PropertyProvider;
use crate::search::filter::filter_properties;
use crate::search::pagination::{paginate, Page};
use crate::search::sort::sort_properties;
use crate::search::summary::ResultSummary;
use crate::search::types::{SearchFilters, SearchRequest, SortKey};
use anyhow::{Context, Result};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info};

pub const DEFAULT_PAGE_SIZE: usize = 12;
pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_millis(300);

/// Results of the most recent search that was allowed to land
#[derive(Debug, Clone)]
struct CommittedSearch {
    request_id: u64,
    filters: SearchFilters,
    sort: SortKey,
    results: Vec<Property>,
    summary: ResultSummary,
}

/// What the search page renders
#[derive(Debug, Clone, Serialize)]
pub struct SearchPage {
    pub request_id: u64,
    pub sort: SortKey,
    pub summary: ResultSummary,
    pub page: Page<Property>,
}

/// Runs searches against a provider on behalf of the search page.
///
/// Every call to [`search`](Self::search) takes a fresh sequence number.
/// Only the newest call may commit its results, so a slow stale search
/// can never overwrite a fresher one.
pub struct SearchController {
    provider: Arc<dyn PropertyProvider>,
    page_size: usize,
    delay: Duration,
    sequence: AtomicU64,
    committed: RwLock<Option<CommittedSearch>>,
}

impl SearchController {
    pub fn new(provider: Arc<dyn PropertyProvider>) -> Self {
        Self::with_settings(provider, DEFAULT_PAGE_SIZE, DEFAULT_SEARCH_DELAY)
    }

    pub fn with_settings(
        provider: Arc<dyn PropertyProvider>,
        page_size: usize,
        delay: Duration,
    ) -> Self {
        Self {
            provider,
            page_size: page_size.max(1),
            delay,
            sequence: AtomicU64::new(0),
            committed: RwLock::new(None),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Sequence number of the most recently issued search
    pub fn latest_request(&self) -> u64 {
        self.sequence.load(Ordering::SeqCst)
    }

    fn is_current(&self, request_id: u64) -> bool {
        self.latest_request() == request_id
    }

    /// Debounce, fetch, filter, sort and commit.
    ///
    /// Returns page 1 of the new results, or `None` when a newer search was
    /// issued before this one finished.
    pub async fn search(&self, filters: SearchFilters, sort: SortKey) -> Result<Option<SearchPage>> {
        self.execute(filters, sort, 1).await
    }

    /// Run a search parsed from a URL and return the page it asked for.
    /// A page past the end falls back to page 1.
    pub async fn run(&self, request: SearchRequest) -> Result<Option<SearchPage>> {
        self.execute(request.filters, request.sort, request.page).await
    }

    async fn execute(
        &self,
        filters: SearchFilters,
        sort: SortKey,
        wanted_page: usize,
    ) -> Result<Option<SearchPage>> {
        let request_id = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("Search #{} queued ({})", request_id, sort.as_str());

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if !self.is_current(request_id) {
            debug!("Search #{} superseded before fetch", request_id);
            return Ok(None);
        }

        let listings = self
            .provider
            .list()
            .await
            .with_context(|| format!("Failed to load listings from {}", self.provider.source_name()))?;

        let active: Vec<Property> = listings.into_iter().filter(|p| p.is_active).collect();
        let filtered = filter_properties(&active, &filters);
        let results = sort_properties(filtered, sort, &filters);
        let summary = ResultSummary::from_properties(&results);

        let mut committed = self.committed.write().await;
        if !self.is_current(request_id) {
            debug!("Search #{} superseded before commit", request_id);
            return Ok(None);
        }

        info!(
            "Search #{} matched {} of {} active listings",
            request_id,
            results.len(),
            active.len()
        );

        let mut page = paginate(&results, wanted_page, self.page_size);
        if page.items.is_empty() && wanted_page != 1 {
            page = paginate(&results, 1, self.page_size);
        }
        *committed = Some(CommittedSearch {
            request_id,
            filters,
            sort,
            results,
            summary: summary.clone(),
        });

        Ok(Some(SearchPage {
            request_id,
            sort,
            summary,
            page,
        }))
    }

    /// Page through the committed results without searching again
    pub async fn page(&self, page: usize) -> Option<SearchPage> {
        let committed = self.committed.read().await;
        let search = committed.as_ref()?;
        Some(SearchPage {
            request_id: search.request_id,
            sort: search.sort,
            summary: search.summary.clone(),
            page: paginate(&search.results, page, self.page_size),
        })
    }

    /// Filters behind the committed results
    pub async fn current_filters(&self) -> Option<SearchFilters> {
        let committed = self.committed.read().await;
        committed.as_ref().map(|search| search.filters.clone())
    }

    pub async fn results(&self) -> Vec<Property> {
        let committed = self.committed.read().await;
        committed
            .as_ref()
            .map(|search| search.results.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PropertyType;
    use crate::providers::PropertyRepository;
    use async_trait::async_trait;
    use std::collections::BTreeSet;
    use std::sync::atomic::{AtomicBool, AtomicUsize};
    use tokio::sync::Notify;

    fn controller(page_size: usize, delay: Duration) -> SearchController {
        SearchController::with_settings(Arc::new(PropertyRepository::sample()), page_size, delay)
    }

    /// Serves the sample listings until switched offline
    struct FlakyProvider {
        inner: PropertyRepository,
        offline: AtomicBool,
    }

    #[async_trait]
    impl PropertyProvider for FlakyProvider {
        async fn list(&self) -> Result<Vec<Property>> {
            if self.offline.load(Ordering::SeqCst) {
                anyhow::bail!("listings API unreachable");
            }
            self.inner.list().await
        }

        fn source_name(&self) -> &'static str {
            "flaky"
        }
    }

    /// Holds the first `list()` call until `release` is notified
    struct GatedProvider {
        inner: PropertyRepository,
        calls: AtomicUsize,
        release: Notify,
    }

    #[async_trait]
    impl PropertyProvider for GatedProvider {
        async fn list(&self) -> Result<Vec<Property>> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                self.release.notified().await;
            }
            self.inner.list().await
        }

        fn source_name(&self) -> &'static str {
            "gated"
        }
    }

    #[tokio::test]
    async fn search_hides_inactive_listings() {
        let controller = controller(50, Duration::ZERO);
        let page = controller
            .search(SearchFilters::default(), SortKey::PriceDesc)
            .await
            .unwrap()
            .expect("committed");

        assert_eq!(page.summary.total, 7);
        assert!(page.page.items.iter().all(|p| p.id != "prop-008"));
        assert_eq!(page.page.items[0].id, "prop-007");
    }

    #[tokio::test]
    async fn search_resets_to_first_page() {
        let controller = controller(3, Duration::ZERO);
        let page = controller
            .search(SearchFilters::default(), SortKey::PriceAsc)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(page.page.page, 1);
        assert_eq!(page.page.total_pages, 3);

        let third = controller.page(3).await.unwrap();
        assert_eq!(third.page.items.len(), 1);
        assert_eq!(third.request_id, page.request_id);
    }

    #[tokio::test]
    async fn newer_search_supersedes_older_one() {
        let controller = controller(12, Duration::from_millis(20));
        let houses = SearchFilters {
            property_types: BTreeSet::from([PropertyType::House]),
            ..Default::default()
        };
        let rentals = SearchFilters {
            location: Some("Cape Town".to_string()),
            ..Default::default()
        };

        let (stale, fresh) = tokio::join!(
            controller.search(houses, SortKey::DateDesc),
            controller.search(rentals.clone(), SortKey::DateDesc),
        );

        assert!(stale.unwrap().is_none());
        let fresh = fresh.unwrap().expect("latest search commits");
        assert_eq!(fresh.request_id, 2);
        assert_eq!(controller.current_filters().await, Some(rentals));
        let ids: Vec<String> = controller.results().await.into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["prop-002"]);
    }

    #[tokio::test]
    async fn run_honours_requested_page() {
        let controller = controller(2, Duration::ZERO);
        let request = SearchRequest::from_query_pairs([("sort", "price-asc"), ("page", "2")]);
        let page = controller.run(request).await.unwrap().unwrap();
        assert_eq!(page.page.page, 2);
        let ids: Vec<&str> = page.page.items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["prop-005", "prop-004"]);

        let request = SearchRequest::from_query_pairs([("page", "99")]);
        let page = controller.run(request).await.unwrap().unwrap();
        assert_eq!(page.page.page, 1);
    }

    #[tokio::test]
    async fn provider_failure_keeps_previous_results() {
        let provider = Arc::new(FlakyProvider {
            inner: PropertyRepository::sample(),
            offline: AtomicBool::new(false),
        });
        let controller = SearchController::with_settings(provider.clone(), 12, Duration::ZERO);
        controller
            .search(SearchFilters::default(), SortKey::DateDesc)
            .await
            .unwrap();

        provider.offline.store(true, Ordering::SeqCst);
        let err = controller
            .search(SearchFilters::default(), SortKey::PriceAsc)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("flaky"));

        let page = controller.page(1).await.expect("previous results");
        assert_eq!(page.sort, SortKey::DateDesc);
        assert_eq!(page.summary.total, 7);
    }

    #[tokio::test]
    async fn slow_stale_response_does_not_overwrite_newer_results() {
        let provider = Arc::new(GatedProvider {
            inner: PropertyRepository::sample(),
            calls: AtomicUsize::new(0),
            release: Notify::new(),
        });
        let controller = SearchController::with_settings(provider.clone(), 12, Duration::ZERO);
        let houses = SearchFilters {
            property_types: BTreeSet::from([PropertyType::House]),
            ..Default::default()
        };
        let rentals = SearchFilters {
            location: Some("Cape Town".to_string()),
            ..Default::default()
        };

        let stale = controller.search(houses, SortKey::DateDesc);
        let fresh = async {
            let page = controller.search(rentals.clone(), SortKey::DateDesc).await;
            provider.release.notify_one();
            page
        };
        let (stale, fresh) = tokio::join!(stale, fresh);

        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
        assert!(stale.unwrap().is_none());
        assert_eq!(fresh.unwrap().expect("newest search commits").request_id, 2);
        assert_eq!(controller.current_filters().await, Some(rentals));
        let ids: Vec<String> = controller.results().await.into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["prop-002"]);
    }

    #[tokio::test]
    async fn run_pages_its_own_results() {
        let controller = controller(2, Duration::ZERO);
        let request = SearchRequest::from_query_pairs([("sort", "price-desc"), ("page", "3")]);
        let page = controller.run(request).await.unwrap().unwrap();

        assert_eq!(page.request_id, controller.latest_request());
        assert_eq!(page.page.page, 3);
        let ids: Vec<&str> = page.page.items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["prop-005", "prop-006"]);
    }
}
