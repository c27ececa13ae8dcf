use phonenumber::country;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub search: SearchConfig,
    pub fetch: FetchConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    pub results_per_query: usize,
    pub min_results_per_query: usize,
    pub max_results_per_query: usize,
    pub query_delay_ms: u64,

    /// ISO 3166 region assumed when a phone number carries no country code.
    /// `None` means unspecified: only fully-qualified (+CC) numbers parse.
    pub default_region: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FetchConfig {
    pub timeout_seconds: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Config {
    /// Unrecognized region codes behave like no region at all.
    pub fn phone_region(&self) -> Option<country::Id> {
        let code = self.search.default_region.as_deref()?;
        code.parse::<country::Id>().ok()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search: SearchConfig {
                results_per_query: 3,
                min_results_per_query: 2,
                max_results_per_query: 10,
                query_delay_ms: 2000,
                default_region: Some("US".to_string()),
            },
            fetch: FetchConfig {
                timeout_seconds: 8,
                user_agent: "Mozilla/5.0 (compatible; ContactFinder/1.0)".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

pub async fn load_config(
    path: &str,
) -> std::result::Result<Config, Box<dyn std::error::Error + Send + Sync>> {
    let content = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_region_is_us() {
        let config = Config::default();
        assert_eq!(config.phone_region(), Some(country::US));
        assert_eq!(config.fetch.timeout_seconds, 8);
    }

    #[test]
    fn unknown_region_behaves_like_none() {
        let mut config = Config::default();
        config.search.default_region = Some("XX".to_string());
        assert_eq!(config.phone_region(), None);

        config.search.default_region = None;
        assert_eq!(config.phone_region(), None);
    }

    #[test]
    fn parses_yaml() {
        let yaml = r#"
search:
  results_per_query: 5
  min_results_per_query: 2
  max_results_per_query: 10
  query_delay_ms: 1500
  default_region: null
fetch:
  timeout_seconds: 8
  user_agent: "test-agent"
logging:
  level: "debug"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.search.results_per_query, 5);
        assert_eq!(config.search.default_region, None);
        assert_eq!(config.phone_region(), None);
        assert_eq!(config.logging.level, "debug");
    }
}
