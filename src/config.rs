use std::env;

use anyhow::{Context, Result};

use crate::compare::Feature;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Feature used when --feature is omitted (GRAPHITE_FEATURE, default
    /// composite)
    pub default_feature: Feature,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn load() -> Result<Self> {
        let default_feature = match env::var("GRAPHITE_FEATURE") {
            Ok(name) => name
                .parse()
                .context("invalid GRAPHITE_FEATURE in environment")?,
            Err(_) => Feature::Composite,
        };

        Ok(Self { default_feature })
    }
}
