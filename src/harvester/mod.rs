pub mod fetcher;
pub mod search;
pub mod types;

pub use fetcher::{HttpFetcher, PageFetcher};
pub use search::{DuckDuckGoSearch, SearchProvider};
pub use types::FetchedPage;
