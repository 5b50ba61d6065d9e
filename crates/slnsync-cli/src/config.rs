use std::path::PathBuf;

use anyhow::Context;

/// Environment variable naming the solution provider program.
pub const PROVIDER_ENV: &str = "SLNSYNC_PROVIDER";

/// Provider program used when [`PROVIDER_ENV`] is unset.
pub const DEFAULT_PROVIDER: &str = "slnsync-provider";

/// Runtime configuration for a sync run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyncConfig {
    /// Directory used when no directory argument is given, and the base for
    /// relative arguments. Captured once at startup.
    pub working_dir: PathBuf,
    /// Program that loads and saves solution files.
    pub provider_program: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            working_dir: PathBuf::from("."),
            provider_program: DEFAULT_PROVIDER.to_string(),
        }
    }
}

impl SyncConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        let working_dir =
            std::env::current_dir().context("failed to read the current working directory")?;
        Ok(Self::from_lookup(working_dir, |key| std::env::var(key).ok()))
    }

    /// Build the configuration from a working directory and a variable lookup.
    pub fn from_lookup(working_dir: PathBuf, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let provider_program = lookup(PROVIDER_ENV)
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_PROVIDER.to_string());
        Self {
            working_dir,
            provider_program,
        }
    }
}
