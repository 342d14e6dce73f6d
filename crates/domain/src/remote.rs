//! Remote — an external relay the station broadcasts to or pulls from.

use serde::{Deserialize, Serialize};

use crate::entity::{EntityType, TrackedFields};
use crate::error::{OnAirError, ValidationError};
use crate::id::{RemoteId, StationId};

/// A remote relay attached to a station.
///
/// Remotes registered automatically by a relay server are not `editable`;
/// they are managed by that server and never feed into the station's own
/// broadcast configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remote {
    pub id: RemoteId,
    pub station_id: StationId,
    pub display_name: String,
    pub url: String,
    pub mount: Option<String>,
    pub editable: bool,
    pub enable_autodj: bool,
    pub autodj_bitrate: Option<u32>,
    pub source_port: Option<u16>,
    pub is_public: bool,
    pub listeners_unique: u32,
    pub listeners_total: u32,
}

impl Remote {
    /// Create a builder for constructing a [`Remote`].
    #[must_use]
    pub fn builder() -> RemoteBuilder {
        RemoteBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`OnAirError::Validation`] when `display_name` is empty.
    pub fn validate(&self) -> Result<(), OnAirError> {
        if self.display_name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }
}

impl TrackedFields for Remote {
    const ENTITY_TYPE: EntityType = EntityType::Remote;
    const FIELDS: &'static [&'static str] = &[
        "display_name",
        "url",
        "mount",
        "editable",
        "enable_autodj",
        "autodj_bitrate",
        "source_port",
        "is_public",
        "listeners_unique",
        "listeners_total",
    ];
}

/// Step-by-step builder for [`Remote`].
#[derive(Debug, Default)]
pub struct RemoteBuilder {
    id: Option<RemoteId>,
    station_id: Option<StationId>,
    display_name: Option<String>,
    url: Option<String>,
    mount: Option<String>,
    editable: Option<bool>,
    enable_autodj: bool,
    autodj_bitrate: Option<u32>,
    source_port: Option<u16>,
    is_public: bool,
}

impl RemoteBuilder {
    #[must_use]
    pub fn id(mut self, id: RemoteId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn station_id(mut self, station_id: StationId) -> Self {
        self.station_id = Some(station_id);
        self
    }

    #[must_use]
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn mount(mut self, mount: impl Into<String>) -> Self {
        self.mount = Some(mount.into());
        self
    }

    #[must_use]
    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = Some(editable);
        self
    }

    #[must_use]
    pub fn enable_autodj(mut self, enable_autodj: bool) -> Self {
        self.enable_autodj = enable_autodj;
        self
    }

    #[must_use]
    pub fn autodj_bitrate(mut self, bitrate: u32) -> Self {
        self.autodj_bitrate = Some(bitrate);
        self
    }

    #[must_use]
    pub fn source_port(mut self, port: u16) -> Self {
        self.source_port = Some(port);
        self
    }

    #[must_use]
    pub fn is_public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    /// Consume the builder, validate, and return a [`Remote`].
    ///
    /// Remotes are editable unless stated otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`OnAirError::Validation`] if the id or owning station is
    /// missing, or if `display_name` is missing or empty.
    pub fn build(self) -> Result<Remote, OnAirError> {
        let remote = Remote {
            id: self.id.ok_or(ValidationError::MissingId)?,
            station_id: self.station_id.ok_or(ValidationError::MissingStation)?,
            display_name: self.display_name.unwrap_or_default(),
            url: self.url.unwrap_or_default(),
            mount: self.mount,
            editable: self.editable.unwrap_or(true),
            enable_autodj: self.enable_autodj,
            autodj_bitrate: self.autodj_bitrate,
            source_port: self.source_port,
            is_public: self.is_public,
            listeners_unique: 0,
            listeners_total: 0,
        };
        remote.validate()?;
        Ok(remote)
    }
}
