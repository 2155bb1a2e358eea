//! Configuration loading and management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Business rules whose exact policy the gym decides.
///
/// Defaults are the conservative reading of the admin screens: dates are not
/// cross-checked, and a payment amount must be strictly positive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessRules {
    /// Reject a member whose end date is before the start date
    pub enforce_date_order: bool,

    /// Accept a payment amount of exactly zero
    pub allow_zero_amount: bool,
}

/// Rows per page for each list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSizes {
    pub members: usize,
    pub payments: usize,
    pub plans: usize,
}

impl Default for PageSizes {
    fn default() -> Self {
        Self {
            members: 20,
            payments: 20,
            plans: 20,
        }
    }
}

impl PageSizes {
    /// Page size for a plural resource name, 20 for anything unknown
    pub fn for_resource(&self, resource: &str) -> usize {
        match resource {
            "members" => self.members,
            "payments" => self.payments,
            "plans" => self.plans,
            _ => 20,
        }
    }
}

/// Complete client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend API root, e.g. `http://127.0.0.1:8000/api`
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Where the bearer token is persisted; in memory only when absent
    pub token_path: Option<PathBuf>,

    pub page_sizes: PageSizes,

    /// Look-ahead for renewal reminders, 1 to 30 days
    pub renewal_window_days: u32,

    pub rules: BusinessRules,

    /// Default `tracing` filter when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000/api".to_string(),
            timeout_secs: 30,
            token_path: None,
            page_sizes: PageSizes::default(),
            renewal_window_days: 7,
            rules: BusinessRules::default(),
            log_filter: "gymdesk=info".to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path))?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.check()?;
        Ok(config)
    }

    /// Apply `GYMDESK_*` environment overrides
    pub fn with_env_overrides(self) -> Result<Self> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup (environment, CLI flags, tests)
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("GYMDESK_BASE_URL") {
            self.base_url = url;
        }
        if let Some(path) = lookup("GYMDESK_TOKEN_PATH") {
            self.token_path = Some(PathBuf::from(path));
        }
        if let Some(secs) = lookup("GYMDESK_TIMEOUT_SECS") {
            self.timeout_secs = secs
                .parse()
                .with_context(|| format!("GYMDESK_TIMEOUT_SECS is not a number: {}", secs))?;
        }
        self.check()?;
        Ok(self)
    }

    fn check(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            anyhow::bail!("base_url must not be empty");
        }
        if !(1..=30).contains(&self.renewal_window_days) {
            anyhow::bail!(
                "renewal_window_days must be between 1 and 30 (got {})",
                self.renewal_window_days
            );
        }
        Ok(())
    }

    /// Base URL without a trailing slash
    pub fn api_root(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
