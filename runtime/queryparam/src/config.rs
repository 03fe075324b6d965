//! Load the configuration of an [`Unmarshaller`](crate::Unmarshaller).
//!
//! [`UnmarshalConfig`] is the key type in this module.
use std::path::Path;

use anyhow::Context;
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};

/// The prefix of the environment variables read by [`UnmarshalConfig::load`].
pub const ENV_PREFIX: &str = "QUERYPARAM_";

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
#[non_exhaustive]
/// Configuration for an [`Unmarshaller`](crate::Unmarshaller).
///
/// # Example
///
/// ```yaml
/// # All fields are optional.
/// delimiter: ";"
/// ```
pub struct UnmarshalConfig {
    /// The delimiter used to split a query value into a collection of strings.
    ///
    /// Defaults to [`DEFAULT_DELIMITER`](crate::DEFAULT_DELIMITER).
    pub delimiter: String,
}

impl Default for UnmarshalConfig {
    fn default() -> Self {
        Self {
            delimiter: crate::DEFAULT_DELIMITER.to_owned(),
        }
    }
}

impl UnmarshalConfig {
    /// Load the configuration, layering (from lowest to highest priority):
    ///
    /// - the defaults;
    /// - the YAML file at `path`, if one was provided;
    /// - environment variables prefixed with [`ENV_PREFIX`], e.g. `QUERYPARAM_DELIMITER`.
    ///
    /// Setting `QUERYPARAM_DELIMITER` to an empty string is accepted:
    /// unmarshalling into a collection will then fail, not loading.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::new();
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .context("Failed to load the `queryparam` configuration")
    }
}
