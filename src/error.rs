use thiserror::Error;

/// Blocking errors surfaced to the user before any network call is made.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),
}

/// Non-fatal failures during harvesting. A per-URL failure skips that URL;
/// a search-engine failure aborts the remaining queries of the lookup while
/// partial results are kept. Neither ever reaches the caller as an `Err`.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request failed: {url} - {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error: {url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Search failed: {query} - {message}")]
    Search { query: String, message: String },
}
