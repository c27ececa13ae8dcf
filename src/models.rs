use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::{config::Config, extractor::Platform, pipeline::LookupPipeline};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Direction of a lookup: which kind of value the user supplies and which
/// kind the harvest is primarily after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LookupMode {
    EmailToPhone,
    PhoneToEmail,
}

impl LookupMode {
    pub fn input_label(&self) -> &'static str {
        match self {
            LookupMode::EmailToPhone => "email address",
            LookupMode::PhoneToEmail => "phone number",
        }
    }

    pub fn target_label(&self) -> &'static str {
        match self {
            LookupMode::EmailToPhone => "phone numbers",
            LookupMode::PhoneToEmail => "email addresses",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LookupRequest {
    pub mode: LookupMode,
    pub value: String,
    pub results_per_query: usize,
}

/// Everything discovered during one user-initiated lookup. Discarded when the
/// lookup ends; nothing is persisted.
#[derive(Debug, Clone, Serialize)]
pub struct LookupReport {
    pub phones: BTreeSet<String>,
    pub emails: BTreeSet<String>,
    pub social: BTreeMap<Platform, BTreeSet<String>>,
    pub queries_planned: usize,
    pub queries_completed: usize,
    pub urls_fetched: usize,
    pub urls_failed: usize,
    pub warnings: Vec<String>,
    pub completed_at: String,
}

impl LookupReport {
    pub fn new(queries_planned: usize) -> Self {
        Self {
            phones: BTreeSet::new(),
            emails: BTreeSet::new(),
            social: BTreeMap::new(),
            queries_planned,
            queries_completed: 0,
            urls_fetched: 0,
            urls_failed: 0,
            warnings: Vec::new(),
            completed_at: String::new(),
        }
    }

    pub fn total_contacts(&self) -> usize {
        self.phones.len()
            + self.emails.len()
            + self.social.values().map(|links| links.len()).sum::<usize>()
    }
}

pub struct CliApp {
    pub config: Config,
    pub pipeline: LookupPipeline,
}
