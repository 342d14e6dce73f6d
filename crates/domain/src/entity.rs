//! Tracked entities — the closed set of persisted types the restart trigger
//! knows about.
//!
//! Each concrete type declares its persisted field names through
//! [`TrackedFields`]. Field exclusions and change sets refer to fields by
//! these names, so an unknown name is detectable without runtime reflection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::id::StationId;
use crate::mount::Mount;
use crate::playlist::Playlist;
use crate::remote::Remote;
use crate::station::Station;

/// Static field metadata for a persisted entity type.
pub trait TrackedFields {
    /// The entity type these fields belong to.
    const ENTITY_TYPE: EntityType;

    /// Names of every persisted field, as they appear in change sets.
    const FIELDS: &'static [&'static str];
}

/// Concrete type of a [`TrackedEntity`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Station,
    Mount,
    Remote,
    Playlist,
    /// Any other persisted type; carries the persistence layer's type name.
    Other(String),
}

impl EntityType {
    /// Declared field names, or `None` for types without field metadata.
    #[must_use]
    pub fn fields(&self) -> Option<&'static [&'static str]> {
        match self {
            Self::Station => Some(Station::FIELDS),
            Self::Mount => Some(Mount::FIELDS),
            Self::Remote => Some(Remote::FIELDS),
            Self::Playlist => Some(Playlist::FIELDS),
            Self::Other(_) => None,
        }
    }

    /// Whether `field` is declared on this type.
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.fields().is_some_and(|fields| fields.contains(&field))
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Station => f.write_str("station"),
            Self::Mount => f.write_str("mount"),
            Self::Remote => f.write_str("remote"),
            Self::Playlist => f.write_str("playlist"),
            Self::Other(name) => f.write_str(name),
        }
    }
}

/// Returned when a type name does not match any type with field metadata.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown entity type `{0}`")]
pub struct ParseEntityTypeError(pub String);

impl FromStr for EntityType {
    type Err = ParseEntityTypeError;

    /// Parse one of the known type names. [`EntityType::Other`] is never
    /// produced: it has no field metadata to resolve against.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "station" => Ok(Self::Station),
            "mount" => Ok(Self::Mount),
            "remote" => Ok(Self::Remote),
            "playlist" => Ok(Self::Playlist),
            other => Err(ParseEntityTypeError(other.to_string())),
        }
    }
}

/// An entity scheduled for insertion, update or deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TrackedEntity {
    Station(Station),
    Mount(Mount),
    Remote(Remote),
    Playlist(Playlist),
    Other { entity_type: String },
}

impl TrackedEntity {
    /// Concrete type of this entity.
    #[must_use]
    pub fn entity_type(&self) -> EntityType {
        match self {
            Self::Station(_) => EntityType::Station,
            Self::Mount(_) => EntityType::Mount,
            Self::Remote(_) => EntityType::Remote,
            Self::Playlist(_) => EntityType::Playlist,
            Self::Other { entity_type } => EntityType::Other(entity_type.clone()),
        }
    }

    /// The station this entity belongs to, if it is station-owned.
    ///
    /// A [`Station`] is not owned by anything and returns `None`.
    #[must_use]
    pub fn owning_station(&self) -> Option<StationId> {
        match self {
            Self::Mount(mount) => Some(mount.station_id),
            Self::Remote(remote) => Some(remote.station_id),
            Self::Playlist(playlist) => Some(playlist.station_id),
            Self::Station(_) | Self::Other { .. } => None,
        }
    }

    /// Borrow the station if this entity is one.
    #[must_use]
    pub fn as_station(&self) -> Option<&Station> {
        match self {
            Self::Station(station) => Some(station),
            _ => None,
        }
    }
}

impl From<Station> for TrackedEntity {
    fn from(station: Station) -> Self {
        Self::Station(station)
    }
}

impl From<Mount> for TrackedEntity {
    fn from(mount: Mount) -> Self {
        Self::Mount(mount)
    }
}

impl From<Remote> for TrackedEntity {
    fn from(remote: Remote) -> Self {
        Self::Remote(remote)
    }
}

impl From<Playlist> for TrackedEntity {
    fn from(playlist: Playlist) -> Self {
        Self::Playlist(playlist)
    }
}
