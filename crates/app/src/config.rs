//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `onair.toml` in the working directory, or at the path named by
//! `ONAIR_CONFIG`. Every field has a sensible default so the file is
//! optional. Environment variables take precedence over file values.
//!
//! ```toml
//! [restart]
//! enabled = true
//! use_default_exclusions = true
//!
//! [restart.exclusions]
//! mount = ["is_public"]
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use onair_domain::entity::{EntityType, ParseEntityTypeError};
use onair_domain::error::OnAirError;
use onair_domain::exclusion::FieldExclusions;

use crate::flush_hooks::FlushHooks;
use crate::services::restart_trigger::RestartTrigger;

/// Config file looked up when `ONAIR_CONFIG` is not set.
pub const DEFAULT_CONFIG_PATH: &str = "onair.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OnAirConfig {
    /// Station restart trigger settings.
    pub restart: RestartConfig,
}

/// Station restart trigger configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RestartConfig {
    /// Register the restart trigger at all.
    pub enabled: bool,
    /// Start from the built-in exclusions (listener statistics, playback state).
    pub use_default_exclusions: bool,
    /// Extra excluded fields, keyed by entity type name.
    pub exclusions: BTreeMap<String, Vec<String>>,
}

impl Default for RestartConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            use_default_exclusions: true,
            exclusions: BTreeMap::new(),
        }
    }
}

impl OnAirConfig {
    /// Load configuration from `ONAIR_CONFIG` or `onair.toml` (if present),
    /// then apply environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed or unreadable.
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            std::env::var("ONAIR_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut config = Self::from_file(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse the file at `path`, falling back to defaults when it is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but is malformed or unreadable.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(
                    path = %path.as_ref().display(),
                    "config file not found, using defaults"
                );
                Ok(Self::default())
            }
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("ONAIR_RESTART_ENABLED") {
            match val.parse() {
                Ok(enabled) => self.restart.enabled = enabled,
                Err(_) => tracing::warn!(value = %val, "ignoring invalid ONAIR_RESTART_ENABLED"),
            }
        }
    }

    /// Build the field exclusion mapping described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownEntityType`] for an unknown type name and
    /// [`ConfigError::Exclusion`] for a field the type does not declare.
    pub fn field_exclusions(&self) -> Result<FieldExclusions, ConfigError> {
        let mut builder = FieldExclusions::builder();
        if self.restart.use_default_exclusions {
            builder = builder.with_defaults();
        }
        for (type_name, fields) in &self.restart.exclusions {
            let entity_type: EntityType = type_name.parse()?;
            for field in fields {
                builder = builder.exclude(entity_type.clone(), field.clone());
            }
        }
        Ok(builder.build()?)
    }

    /// Build the flush listener registry, with the restart trigger registered
    /// unless disabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured exclusions are invalid.
    pub fn build_hooks(&self) -> Result<FlushHooks, ConfigError> {
        let mut hooks = FlushHooks::new();
        if self.restart.enabled {
            let exclusions = Arc::new(self.field_exclusions()?);
            hooks.register(RestartTrigger::new(exclusions));
        } else {
            tracing::info!("station restart trigger disabled by configuration");
        }
        Ok(hooks)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// An exclusion names an entity type without field metadata.
    #[error("invalid exclusion entity type")]
    UnknownEntityType(#[from] ParseEntityTypeError),
    /// An exclusion names a field its entity type does not declare.
    #[error("invalid field exclusion")]
    Exclusion(#[from] OnAirError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = OnAirConfig::default();
        assert!(config.restart.enabled);
        assert!(config.restart.use_default_exclusions);
        assert!(config.restart.exclusions.is_empty());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: OnAirConfig = toml::from_str("").unwrap();
        assert!(config.restart.enabled);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [restart]
            enabled = false
            use_default_exclusions = false

            [restart.exclusions]
            mount = ['is_public', 'relay_url']
            station = ['has_started']
        ";
        let config: OnAirConfig = toml::from_str(toml).unwrap();
        assert!(!config.restart.enabled);
        assert!(!config.restart.use_default_exclusions);
        assert_eq!(
            config.restart.exclusions["mount"],
            ["is_public", "relay_url"]
        );
        assert_eq!(config.restart.exclusions["station"], ["has_started"]);
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [restart.exclusions]
            remote = ['source_port']
        ";
        let config: OnAirConfig = toml::from_str(toml).unwrap();
        assert!(config.restart.enabled);
        assert!(config.restart.use_default_exclusions);
        assert_eq!(config.restart.exclusions.len(), 1);
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = OnAirConfig::from_file("nonexistent.toml").unwrap();
        assert!(config.restart.enabled);
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<OnAirConfig, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_merge_configured_exclusions_with_defaults() {
        let config: OnAirConfig = toml::from_str(
            "
            [restart.exclusions]
            mount = ['is_public']
            ",
        )
        .unwrap();
        let exclusions = config.field_exclusions().unwrap();
        let excluded = |field: &str| exclusions.is_excluded(&EntityType::Mount, field).unwrap();
        assert!(excluded("is_public"));
        assert!(excluded("listeners_total"));
    }

    #[test]
    fn should_skip_defaults_when_disabled() {
        let config: OnAirConfig = toml::from_str(
            "
            [restart]
            use_default_exclusions = false
            ",
        )
        .unwrap();
        assert!(config.field_exclusions().unwrap().is_empty());
    }

    #[test]
    fn should_reject_unknown_entity_type() {
        let config: OnAirConfig = toml::from_str(
            "
            [restart.exclusions]
            podcast = ['title']
            ",
        )
        .unwrap();
        let result = config.field_exclusions();
        assert!(matches!(result, Err(ConfigError::UnknownEntityType(_))));
    }

    #[test]
    fn should_reject_undeclared_field() {
        let config: OnAirConfig = toml::from_str(
            "
            [restart.exclusions]
            playlist = ['not_a_field']
            ",
        )
        .unwrap();
        let result = config.field_exclusions();
        assert!(matches!(
            result,
            Err(ConfigError::Exclusion(OnAirError::UnknownFieldExclusion { .. }))
        ));
    }

    #[test]
    fn should_register_restart_trigger_when_enabled() {
        let hooks = OnAirConfig::default().build_hooks().unwrap();
        assert_eq!(
            hooks.listener_names().collect::<Vec<_>>(),
            [RestartTrigger::NAME]
        );
    }

    #[test]
    fn should_register_nothing_when_disabled() {
        let mut config = OnAirConfig::default();
        config.restart.enabled = false;
        assert!(config.build_hooks().unwrap().is_empty());
    }
}
