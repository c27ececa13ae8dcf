use crate::config::Config;
use crate::harvester::{DuckDuckGoSearch, HttpFetcher};
use crate::models::{CliApp, LookupMode, Result};
use crate::pipeline::LookupPipeline;

#[derive(Debug, Clone)]
pub enum MenuAction {
    EmailToPhone,
    PhoneToEmail,
    Exit,
}

impl MenuAction {
    pub fn lookup_mode(&self) -> Option<LookupMode> {
        match self {
            MenuAction::EmailToPhone => Some(LookupMode::EmailToPhone),
            MenuAction::PhoneToEmail => Some(LookupMode::PhoneToEmail),
            MenuAction::Exit => None,
        }
    }
}

impl std::fmt::Display for MenuAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuAction::EmailToPhone => {
                write!(f, "📧 Email → Phone: find phone numbers for an email")
            }
            MenuAction::PhoneToEmail => {
                write!(f, "📱 Phone → Email: find email addresses for a phone")
            }
            MenuAction::Exit => write!(f, "🚪 Exit"),
        }
    }
}

impl CliApp {
    pub fn new(config: Config) -> Result<Self> {
        let searcher = DuckDuckGoSearch::new(&config)?;
        let fetcher = HttpFetcher::new(&config)?;
        let pipeline = LookupPipeline::new(
            Box::new(searcher),
            Box::new(fetcher),
            config.phone_region(),
        );

        Ok(Self { config, pipeline })
    }
}
