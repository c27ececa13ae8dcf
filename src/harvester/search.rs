use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use std::collections::HashSet;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::error::FetchError;

const SEARCH_ENDPOINT: &str = "https://html.duckduckgo.com/html/";

#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Result URLs for one query, at most `max_results`. An `Err` here means
    /// the search engine itself refused us (quota, network); the caller is
    /// expected to abort the remaining queries of the lookup.
    async fn search(&self, query: &str, max_results: usize)
        -> Result<Vec<String>, FetchError>;
}

/// Queries the DuckDuckGo HTML endpoint, which serves plain markup without
/// requiring an API key.
pub struct DuckDuckGoSearch {
    client: Client,
    delay_ms: u64,
}

impl DuckDuckGoSearch {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(&config.fetch.user_agent)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            delay_ms: config.search.query_delay_ms,
        })
    }

    fn search_error(query: &str, message: String) -> FetchError {
        FetchError::Search {
            query: query.to_string(),
            message,
        }
    }

    fn parse_results(html: &str, max_results: usize) -> Vec<String> {
        let document = Html::parse_document(html);
        let selector = Selector::parse("a.result__a, a.result__url").unwrap();

        let mut seen = HashSet::new();
        let mut urls = Vec::new();
        for element in document.select(&selector) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };
            let Some(resolved) = Self::resolve_result_href(href) else {
                continue;
            };
            if seen.insert(resolved.clone()) {
                urls.push(resolved);
            }
            if urls.len() >= max_results {
                break;
            }
        }
        urls
    }

    /// Result anchors either link straight to the target or go through the
    /// `duckduckgo.com/l/?uddg=<encoded>` redirect; unwrap the latter.
    fn resolve_result_href(href: &str) -> Option<String> {
        let absolute = if href.starts_with("//") {
            format!("https:{}", href)
        } else {
            href.to_string()
        };
        let parsed = Url::parse(&absolute).ok()?;
        let host = parsed.host_str()?;

        if host.ends_with("duckduckgo.com") {
            if parsed.path().starts_with("/l/") {
                return parsed
                    .query_pairs()
                    .find(|(key, _)| key == "uddg")
                    .map(|(_, target)| target.into_owned());
            }
            return None;
        }

        if parsed.scheme() == "http" || parsed.scheme() == "https" {
            Some(parsed.to_string())
        } else {
            None
        }
    }
}

#[async_trait]
impl SearchProvider for DuckDuckGoSearch {
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<String>, FetchError> {
        // Polite pause before each search request, with jitter.
        let jitter = fastrand::u64(0..=self.delay_ms / 4);
        tokio::time::sleep(Duration::from_millis(self.delay_ms + jitter)).await;

        debug!("Searching: {}", query);
        let response = self
            .client
            .get(SEARCH_ENDPOINT)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| Self::search_error(query, e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::search_error(
                query,
                format!("HTTP {}", response.status()),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Self::search_error(query, e.to_string()))?;

        let urls = Self::parse_results(&body, max_results);
        debug!("Query yielded {} result URLs", urls.len());
        Ok(urls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwraps_redirect_hrefs() {
        let href = "//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com%2Fcontact&rut=abc";
        assert_eq!(
            DuckDuckGoSearch::resolve_result_href(href),
            Some("https://example.com/contact".to_string())
        );
    }

    #[test]
    fn passes_direct_hrefs_through() {
        assert_eq!(
            DuckDuckGoSearch::resolve_result_href("https://example.com/about"),
            Some("https://example.com/about".to_string())
        );
    }

    #[test]
    fn drops_non_http_and_internal_hrefs() {
        assert_eq!(DuckDuckGoSearch::resolve_result_href("javascript:void(0)"), None);
        assert_eq!(
            DuckDuckGoSearch::resolve_result_href("https://duckduckgo.com/settings"),
            None
        );
    }

    #[test]
    fn parses_result_page_and_respects_limit() {
        let html = r#"
            <div class="result">
              <a class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fone.example%2F">One</a>
              <a class="result__a" href="https://two.example/page">Two</a>
              <a class="result__a" href="https://two.example/page">Two again</a>
              <a class="result__a" href="https://three.example/">Three</a>
            </div>"#;
        let urls = DuckDuckGoSearch::parse_results(html, 2);
        assert_eq!(
            urls,
            vec![
                "https://one.example/".to_string(),
                "https://two.example/page".to_string(),
            ]
        );
    }
}
