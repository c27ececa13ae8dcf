use phonenumber::country;
use tracing::{info, warn};

use crate::dorks::build_queries;
use crate::error::LookupError;
use crate::extractor::{extract_emails, extract_phones, extract_social_links, visible_text};
use crate::harvester::{PageFetcher, SearchProvider};
use crate::models::{LookupMode, LookupReport, LookupRequest};
use crate::validator::{validate_email, validate_phone};

/// Incremental progress, emitted as each query starts and each URL finishes.
/// `UrlProcessed` only carries values not already seen earlier in the lookup.
#[derive(Debug, Clone)]
pub enum LookupEvent {
    QueryStarted {
        index: usize,
        total: usize,
        query: String,
    },
    SearchAborted {
        query: String,
        warning: String,
    },
    UrlFailed {
        url: String,
        warning: String,
    },
    UrlProcessed {
        url: String,
        phones: Vec<String>,
        emails: Vec<String>,
        social: Vec<String>,
    },
}

pub type ProgressFn = dyn Fn(LookupEvent) + Send + Sync;

/// Validator -> Query Builder -> Harvester -> Extractor, strictly sequential.
/// Holds no state across lookups; every `run` starts from fresh sets.
pub struct LookupPipeline {
    searcher: Box<dyn SearchProvider>,
    fetcher: Box<dyn PageFetcher>,
    region: Option<country::Id>,
}

impl LookupPipeline {
    pub fn new(
        searcher: Box<dyn SearchProvider>,
        fetcher: Box<dyn PageFetcher>,
        region: Option<country::Id>,
    ) -> Self {
        Self {
            searcher,
            fetcher,
            region,
        }
    }

    /// Returns `Err` only for invalid input, before any network call. Every
    /// harvesting failure is downgraded to a warning on the report: a failed
    /// page fetch skips that URL, a failed search call ends the query loop
    /// with whatever was gathered so far.
    pub async fn run(
        &self,
        request: &LookupRequest,
        progress: Option<&ProgressFn>,
    ) -> Result<LookupReport, LookupError> {
        let value = request.value.trim();
        match request.mode {
            LookupMode::EmailToPhone => {
                if !validate_email(value) {
                    return Err(LookupError::InvalidEmail(value.to_string()));
                }
            }
            LookupMode::PhoneToEmail => {
                if !validate_phone(value, self.region) {
                    return Err(LookupError::InvalidPhone(value.to_string()));
                }
            }
        }

        let queries = build_queries(request.mode, value);
        let mut report = LookupReport::new(queries.len());

        info!(
            "Starting {} lookup for {:?} ({} queries, {} results each)",
            request.mode.target_label(),
            value,
            queries.len(),
            request.results_per_query
        );

        'queries: for (index, query) in queries.iter().enumerate() {
            emit(
                progress,
                LookupEvent::QueryStarted {
                    index: index + 1,
                    total: queries.len(),
                    query: query.clone(),
                },
            );

            let urls = match self.searcher.search(query, request.results_per_query).await {
                Ok(urls) => urls,
                Err(e) => {
                    // Search quota or outage: keep partial results, stop here.
                    let warning = format!("Search aborted after {} queries: {}", index, e);
                    warn!("{}", warning);
                    report.warnings.push(warning.clone());
                    emit(
                        progress,
                        LookupEvent::SearchAborted {
                            query: query.clone(),
                            warning,
                        },
                    );
                    break 'queries;
                }
            };
            report.queries_completed += 1;

            for url in urls {
                let page = match self.fetcher.fetch(&url).await {
                    Ok(page) => page,
                    Err(e) => {
                        let warning = e.to_string();
                        warn!("Skipping {}: {}", url, warning);
                        report.urls_failed += 1;
                        report.warnings.push(warning.clone());
                        emit(progress, LookupEvent::UrlFailed { url, warning });
                        continue;
                    }
                };
                report.urls_fetched += 1;

                let text = visible_text(&page.html);

                let new_phones: Vec<String> = extract_phones(&text, self.region)
                    .into_iter()
                    .filter(|phone| report.phones.insert(phone.clone()))
                    .collect();
                let new_emails: Vec<String> = extract_emails(&text)
                    .into_iter()
                    .filter(|email| report.emails.insert(email.clone()))
                    .collect();

                let mut new_social = Vec::new();
                for (platform, links) in extract_social_links(&page.html) {
                    let known = report.social.entry(platform).or_default();
                    for link in links {
                        if known.insert(link.clone()) {
                            new_social.push(format!("{}: {}", platform, link));
                        }
                    }
                }

                emit(
                    progress,
                    LookupEvent::UrlProcessed {
                        url: page.url,
                        phones: new_phones,
                        emails: new_emails,
                        social: new_social,
                    },
                );
            }
        }

        report.completed_at = chrono::Utc::now().to_rfc3339();
        info!(
            "Lookup finished: {} contacts across {} fetched URLs ({} failed)",
            report.total_contacts(),
            report.urls_fetched,
            report.urls_failed
        );
        Ok(report)
    }
}

fn emit(progress: Option<&ProgressFn>, event: LookupEvent) {
    if let Some(callback) = progress {
        callback(event);
    }
}
