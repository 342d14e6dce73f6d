//! Station — the aggregate root whose broadcast process may need a restart.
//!
//! A station owns its mounts, remotes and playlists. When one of those
//! changes in a way the running broadcast process depends on, the station is
//! flagged with [`needs_restart`](Station::needs_restart) and an external
//! supervisor restarts it later.

use serde::{Deserialize, Serialize};

use crate::entity::{EntityType, TrackedFields};
use crate::error::{OnAirError, ValidationError};
use crate::id::StationId;

/// How the station's automated playback controller picks what to play next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutoDjMode {
    /// The broadcast backend schedules playlists on its own.
    #[default]
    Automatic,
    /// Playlists are fed to the backend manually, so their configuration is
    /// baked into the running process.
    Manual,
}

impl std::fmt::Display for AutoDjMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Automatic => f.write_str("automatic"),
            Self::Manual => f.write_str("manual"),
        }
    }
}

/// A radio station and its restart bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub short_name: String,
    pub is_enabled: bool,
    pub auto_dj: AutoDjMode,
    pub needs_restart: bool,
    pub has_started: bool,
}

impl Station {
    /// Create a builder for constructing a [`Station`].
    #[must_use]
    pub fn builder() -> StationBuilder {
        StationBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`OnAirError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), OnAirError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }

    /// Whether playlists are fed to the backend manually.
    #[must_use]
    pub fn uses_manual_autodj(&self) -> bool {
        self.auto_dj == AutoDjMode::Manual
    }

    /// Flag the station for a restart.
    ///
    /// Returns `true` if the flag was previously clear.
    pub fn mark_needs_restart(&mut self) -> bool {
        !std::mem::replace(&mut self.needs_restart, true)
    }

    /// Clear the restart flag once the supervisor has restarted the station.
    pub fn clear_needs_restart(&mut self) {
        self.needs_restart = false;
    }
}

impl TrackedFields for Station {
    const ENTITY_TYPE: EntityType = EntityType::Station;
    const FIELDS: &'static [&'static str] = &[
        "name",
        "short_name",
        "is_enabled",
        "auto_dj",
        "needs_restart",
        "has_started",
    ];
}

/// Step-by-step builder for [`Station`].
#[derive(Debug, Default)]
pub struct StationBuilder {
    id: Option<StationId>,
    name: Option<String>,
    short_name: Option<String>,
    is_enabled: Option<bool>,
    auto_dj: AutoDjMode,
    needs_restart: bool,
    has_started: bool,
}

impl StationBuilder {
    #[must_use]
    pub fn id(mut self, id: StationId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// URL-safe short name. Derived from `name` when not set.
    #[must_use]
    pub fn short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = Some(short_name.into());
        self
    }

    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.is_enabled = Some(enabled);
        self
    }

    #[must_use]
    pub fn auto_dj(mut self, mode: AutoDjMode) -> Self {
        self.auto_dj = mode;
        self
    }

    #[must_use]
    pub fn needs_restart(mut self, needs_restart: bool) -> Self {
        self.needs_restart = needs_restart;
        self
    }

    #[must_use]
    pub fn has_started(mut self, has_started: bool) -> Self {
        self.has_started = has_started;
        self
    }

    /// Consume the builder, validate, and return a [`Station`].
    ///
    /// # Errors
    ///
    /// Returns [`OnAirError::Validation`] if the id is missing or `name` is
    /// missing or empty.
    pub fn build(self) -> Result<Station, OnAirError> {
        let id = self.id.ok_or(ValidationError::MissingId)?;
        let name = self.name.unwrap_or_default();
        let short_name = self
            .short_name
            .unwrap_or_else(|| name.to_lowercase().replace(char::is_whitespace, "_"));
        let station = Station {
            id,
            name,
            short_name,
            is_enabled: self.is_enabled.unwrap_or(true),
            auto_dj: self.auto_dj,
            needs_restart: self.needs_restart,
            has_started: self.has_started,
        };
        station.validate()?;
        Ok(station)
    }
}
