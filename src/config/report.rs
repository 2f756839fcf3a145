//! Printable snapshot of resolved settings.

use serde::Serialize;

use super::{Settings, Source};
use crate::Result;

/// Placeholder printed instead of a secret value.
pub const REDACTED: &str = "********";

/// One setting as it appears in a report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub name: &'static str,
    pub env_key: String,
    pub value: String,
    pub source: Source,
}

/// Resolved settings plus derived values, ready for output.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub settings: Vec<ReportEntry>,
    pub base_url: String,
    pub https: bool,
    pub public: bool,
    pub using_tus: bool,
}

impl Report {
    /// Snapshot `settings`. Non-empty secrets are masked unless `reveal_secrets`.
    #[must_use]
    pub fn new(settings: &Settings, reveal_secrets: bool) -> Self {
        let entries = settings
            .iter()
            .map(|s| {
                let value = if s.is_secret() && !reveal_secrets && !s.value().is_empty() {
                    REDACTED.to_string()
                } else {
                    s.value().to_string()
                };
                ReportEntry {
                    name: s.name(),
                    env_key: s.env_key().to_string(),
                    value,
                    source: s.source(),
                }
            })
            .collect();

        Self {
            settings: entries,
            base_url: settings.base_url(),
            https: settings.is_https(),
            public: settings.is_public(),
            using_tus: settings.is_using_tus(),
        }
    }

    /// `KEY=value` lines followed by commented derived values.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for entry in &self.settings {
            out.push_str(&format!("{}={}\n", entry.env_key, entry.value));
        }
        out.push_str(&format!("# base_url={}\n", self.base_url));
        out.push_str(&format!("# https={}\n", self.https));
        out.push_str(&format!("# public={}\n", self.public));
        out.push_str(&format!("# using_tus={}\n", self.using_tus));
        out
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
