pub mod controller;
pub mod filter;
pub mod pagination;
pub mod sort;
pub mod summary;
pub mod types;

pub use controller::{SearchController, SearchPage};
pub use filter::filter_properties;
pub use pagination::{paginate, Page};
pub use sort::sort_properties;
pub use summary::ResultSummary;
pub use types::{SearchFilters, SearchRequest, SortKey};
