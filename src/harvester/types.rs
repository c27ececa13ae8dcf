/// One successfully retrieved search result. The raw HTML is kept so link
/// mining can run against markup while text mining runs against visible text.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub url: String,
    pub html: String,
}
