//! Playlist — a scheduled source of tracks for the station's `AutoDJ`.

use serde::{Deserialize, Serialize};

use crate::entity::{EntityType, TrackedFields};
use crate::error::{OnAirError, ValidationError};
use crate::id::{PlaylistId, StationId};

/// A station playlist.
///
/// Playlist settings only reach the broadcast process when the owning station
/// runs its `AutoDJ` in [`Manual`](crate::station::AutoDjMode::Manual) mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: PlaylistId,
    pub station_id: StationId,
    pub name: String,
    pub is_enabled: bool,
    pub weight: u8,
    pub include_in_requests: bool,
    /// Unix timestamp of the last play, `0` if never played.
    pub played_at: u64,
    /// Pending media ids for shuffled playback.
    pub queue: Vec<u64>,
    pub queue_reset_at: u64,
}

impl Playlist {
    /// Create a builder for constructing a [`Playlist`].
    #[must_use]
    pub fn builder() -> PlaylistBuilder {
        PlaylistBuilder::default()
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
}

impl TrackedFields for Playlist {
    const ENTITY_TYPE: EntityType = EntityType::Playlist;
    const FIELDS: &'static [&'static str] = &[
        "name",
        "is_enabled",
        "weight",
        "include_in_requests",
        "played_at",
        "queue",
        "queue_reset_at",
    ];
}

/// Step-by-step builder for [`Playlist`].
#[derive(Debug, Default)]
pub struct PlaylistBuilder {
    id: Option<PlaylistId>,
    station_id: Option<StationId>,
    name: Option<String>,
    is_enabled: Option<bool>,
    weight: Option<u8>,
    include_in_requests: bool,
}

impl PlaylistBuilder {
    #[must_use]
    pub fn id(mut self, id: PlaylistId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn station_id(mut self, station_id: StationId) -> Self {
        self.station_id = Some(station_id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.is_enabled = Some(enabled);
        self
    }

    #[must_use]
    pub fn weight(mut self, weight: u8) -> Self {
        self.weight = Some(weight);
        self
    }

    #[must_use]
    pub fn include_in_requests(mut self, include: bool) -> Self {
        self.include_in_requests = include;
        self
    }

    /// Consume the builder, validate, and return a [`Playlist`].
    ///
    /// # Errors
    ///
    /// Returns [`OnAirError::Validation`] if the id or owning station is
    /// missing, or if `name` is missing or empty.
    pub fn build(self) -> Result<Playlist, OnAirError> {
        let playlist = Playlist {
            id: self.id.ok_or(ValidationError::MissingId)?,
            station_id: self.station_id.ok_or(ValidationError::MissingStation)?,
            name: self.name.unwrap_or_default(),
            is_enabled: self.is_enabled.unwrap_or(true),
            weight: self.weight.unwrap_or(3),
            include_in_requests: self.include_in_requests,
            played_at: 0,
            queue: Vec::new(),
            queue_reset_at: 0,
        };
        playlist.validate()?;
        Ok(playlist)
    }
}
