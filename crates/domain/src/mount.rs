//! Mount — a listener-facing stream endpoint served by the station's frontend.

use serde::{Deserialize, Serialize};

use crate::entity::{EntityType, TrackedFields};
use crate::error::{OnAirError, ValidationError};
use crate::id::{MountId, StationId};

/// A mount point on the station's streaming frontend.
///
/// Every mount is part of the frontend's generated configuration, so any
/// change to one requires the station to restart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mount {
    pub id: MountId,
    pub station_id: StationId,
    /// Mount path, e.g. `/radio.mp3`.
    pub name: String,
    pub is_default: bool,
    pub is_public: bool,
    pub fallback_mount: Option<String>,
    pub relay_url: Option<String>,
    pub enable_autodj: bool,
    pub autodj_bitrate: Option<u32>,
    /// Listener statistics, refreshed by the frontend poller.
    pub listeners_unique: u32,
    pub listeners_total: u32,
}

impl Mount {
    /// Create a builder for constructing a [`Mount`].
    #[must_use]
    pub fn builder() -> MountBuilder {
        MountBuilder::default()
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

impl TrackedFields for Mount {
    const ENTITY_TYPE: EntityType = EntityType::Mount;
    const FIELDS: &'static [&'static str] = &[
        "name",
        "is_default",
        "is_public",
        "fallback_mount",
        "relay_url",
        "enable_autodj",
        "autodj_bitrate",
        "listeners_unique",
        "listeners_total",
    ];
}

/// Step-by-step builder for [`Mount`].
#[derive(Debug, Default)]
pub struct MountBuilder {
    id: Option<MountId>,
    station_id: Option<StationId>,
    name: Option<String>,
    is_default: bool,
    is_public: Option<bool>,
    fallback_mount: Option<String>,
    relay_url: Option<String>,
    enable_autodj: Option<bool>,
    autodj_bitrate: Option<u32>,
}

impl MountBuilder {
    #[must_use]
    pub fn id(mut self, id: MountId) -> Self {
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
    pub fn is_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }

    #[must_use]
    pub fn is_public(mut self, is_public: bool) -> Self {
        self.is_public = Some(is_public);
        self
    }

    #[must_use]
    pub fn fallback_mount(mut self, fallback_mount: impl Into<String>) -> Self {
        self.fallback_mount = Some(fallback_mount.into());
        self
    }

    #[must_use]
    pub fn relay_url(mut self, relay_url: impl Into<String>) -> Self {
        self.relay_url = Some(relay_url.into());
        self
    }

    #[must_use]
    pub fn enable_autodj(mut self, enable_autodj: bool) -> Self {
        self.enable_autodj = Some(enable_autodj);
        self
    }

    #[must_use]
    pub fn autodj_bitrate(mut self, bitrate: u32) -> Self {
        self.autodj_bitrate = Some(bitrate);
        self
    }

    /// Consume the builder, validate, and return a [`Mount`].
    ///
    /// # Errors
    ///
    /// Returns [`OnAirError::Validation`] if the id or owning station is
    /// missing, or if `name` is missing or empty.
    pub fn build(self) -> Result<Mount, OnAirError> {
        let mount = Mount {
            id: self.id.ok_or(ValidationError::MissingId)?,
            station_id: self.station_id.ok_or(ValidationError::MissingStation)?,
            name: self.name.unwrap_or_default(),
            is_default: self.is_default,
            is_public: self.is_public.unwrap_or(true),
            fallback_mount: self.fallback_mount,
            relay_url: self.relay_url,
            enable_autodj: self.enable_autodj.unwrap_or(true),
            autodj_bitrate: self.autodj_bitrate,
            listeners_unique: 0,
            listeners_total: 0,
        };
        mount.validate()?;
        Ok(mount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_valid_mount_when_required_fields_provided() {
        let mount = Mount::builder()
            .id(MountId::new(10))
            .station_id(StationId::new(7))
            .name("/radio.mp3")
            .autodj_bitrate(128)
            .build()
            .unwrap();
        assert_eq!(mount.station_id, StationId::new(7));
        assert!(mount.is_public);
        assert!(mount.enable_autodj);
        assert_eq!(mount.autodj_bitrate, Some(128));
        assert_eq!(mount.listeners_total, 0);
    }

    #[test]
    fn should_return_validation_error_when_station_is_missing() {
        let result = Mount::builder()
            .id(MountId::new(10))
            .name("/radio.mp3")
            .build();
        assert!(matches!(
            result,
            Err(OnAirError::Validation(ValidationError::MissingStation))
        ));
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        let result = Mount::builder()
            .id(MountId::new(10))
            .station_id(StationId::new(7))
            .build();
        assert!(matches!(
            result,
            Err(OnAirError::Validation(ValidationError::EmptyName))
        ));
    }
}
