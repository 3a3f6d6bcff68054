//! Configuration for the Rollbar integration.
//!
//! Only two settings exist, both required and used only to build deep
//! links. Loading uses `figment` to merge a TOML file with prefixed
//! environment variables (e.g. `ROLLBAR_ACCOUNT=acme`).

use anyhow::{bail, Context, Result};
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Account and project identifiers of the Rollbar project this
/// integration links back to.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct RollbarConfig {
    /// The Rollbar account slug.
    pub account: String,
    /// The project slug within the account.
    pub project: String,
}

impl RollbarConfig {
    /// Loads configuration from the given TOML file, with `ROLLBAR_`
    /// environment variables taking precedence.
    pub fn load(config_path: &str) -> Result<Self> {
        let config: RollbarConfig = Figment::new()
            .merge(Toml::file(config_path))
            .merge(Env::prefixed("ROLLBAR_"))
            .extract()
            .with_context(|| format!("failed to load configuration from {}", config_path))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects empty identifiers; both are URL path segments.
    pub fn validate(&self) -> Result<()> {
        if self.account.is_empty() {
            bail!("`account` must not be empty");
        }
        if self.project.is_empty() {
            bail!("`project` must not be empty");
        }
        Ok(())
    }
}
