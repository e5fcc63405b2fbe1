//! Invocation settings
//!
//! Settings are read from the environment once, when a repository handle is
//! created, and then passed around as part of the `Repository` context.
//!
//! | Variable           | Effect                                                  |
//! |--------------------|---------------------------------------------------------|
//! | `SNAP_COMMIT_DATE` | Fixed timestamp for new commits                         |
//! | `SNAP_EXCLUDE`     | Comma-separated extra names excluded from tree walks    |
//! | `NO_PAGER`         | Never page long output                                  |

use anyhow::Context;
use derive_new::new;

/// Name of the control directory inside the working tree
pub const CONTROL_DIR: &str = ".snap";

/// Branch created by `init`
pub const DEFAULT_BRANCH: &str = "master";

#[derive(Debug, Clone, Default, new)]
pub struct Config {
    /// Timestamp to stamp on new commits instead of the current time
    pub commit_date: Option<chrono::DateTime<chrono::FixedOffset>>,
    /// Extra path component names excluded from working tree walks
    pub excluded_names: Vec<String>,
    /// Whether long output may be sent to a pager
    pub use_pager: bool,
}

impl Config {
    pub fn load_from_env() -> anyhow::Result<Self> {
        let commit_date = match std::env::var("SNAP_COMMIT_DATE") {
            Ok(date_str) => Some(
                Self::parse_date(&date_str)
                    .with_context(|| format!("invalid SNAP_COMMIT_DATE: {}", date_str))?,
            ),
            Err(_) => None,
        };

        let excluded_names = std::env::var("SNAP_EXCLUDE")
            .map(|names| {
                names
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        let use_pager = std::env::var_os("NO_PAGER").is_none();

        Ok(Config::new(commit_date, excluded_names, use_pager))
    }

    /// Timestamp for a commit being created right now
    pub fn commit_timestamp(&self) -> chrono::DateTime<chrono::FixedOffset> {
        self.commit_date
            .unwrap_or_else(|| chrono::Local::now().fixed_offset())
    }

    fn parse_date(date_str: &str) -> anyhow::Result<chrono::DateTime<chrono::FixedOffset>> {
        chrono::DateTime::parse_from_rfc3339(date_str)
            .or_else(|_| chrono::DateTime::parse_from_rfc2822(date_str))
            .or_else(|_| chrono::DateTime::parse_from_str(date_str, "%Y-%m-%d %H:%M:%S %z"))
            .context("expected RFC 3339, RFC 2822 or '%Y-%m-%d %H:%M:%S %z'")
    }
}
