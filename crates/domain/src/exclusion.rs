//! Field exclusions — fields whose changes never warrant a station restart.
//!
//! Exclusions are a static mapping from entity type to field names, built
//! once at startup and shared read-only. Every field name is resolved against
//! the type's declared fields, both when the mapping is built and when a
//! change set is filtered.

use std::collections::{BTreeSet, HashMap};

use crate::change_set::ChangeSet;
use crate::entity::{EntityType, TrackedFields};
use crate::error::OnAirError;
use crate::mount::Mount;
use crate::playlist::Playlist;
use crate::remote::Remote;

/// Listener statistics are written by the frontend poller on every cycle.
const LISTENER_STATS: [&str; 2] = ["listeners_unique", "listeners_total"];

/// Playback bookkeeping written by the `AutoDJ` while it plays.
const PLAYBACK_STATE: [&str; 3] = ["played_at", "queue", "queue_reset_at"];

/// Per-type set of fields excluded from triggering a restart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldExclusions {
    excluded: HashMap<EntityType, BTreeSet<String>>,
}

impl FieldExclusions {
    /// An empty mapping: every changed field counts.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// The built-in exclusions for runtime bookkeeping fields.
    #[must_use]
    pub fn defaults() -> Self {
        FieldExclusionsBuilder::default().with_defaults().into_unchecked()
    }

    /// Create a builder for constructing a [`FieldExclusions`].
    #[must_use]
    pub fn builder() -> FieldExclusionsBuilder {
        FieldExclusionsBuilder::default()
    }

    /// Whether changes to `field` on `entity_type` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`OnAirError::UnknownFieldExclusion`] when `field` is not
    /// declared on `entity_type`.
    pub fn is_excluded(&self, entity_type: &EntityType, field: &str) -> Result<bool, OnAirError> {
        if !entity_type.has_field(field) {
            return Err(OnAirError::UnknownFieldExclusion {
                entity_type: entity_type.clone(),
                field: field.to_string(),
            });
        }
        Ok(self
            .excluded
            .get(entity_type)
            .is_some_and(|fields| fields.contains(field)))
    }

    /// Return the part of `changes` that is not excluded for `entity_type`.
    ///
    /// # Errors
    ///
    /// Returns [`OnAirError::UnknownFieldExclusion`] on the first changed
    /// field that is not declared on `entity_type`.
    pub fn retain_relevant(
        &self,
        entity_type: &EntityType,
        changes: &ChangeSet,
    ) -> Result<ChangeSet, OnAirError> {
        let mut remaining = ChangeSet::new();
        for (field, change) in changes {
            if !self.is_excluded(entity_type, field)? {
                remaining.insert(field.clone(), change.clone());
            }
        }
        Ok(remaining)
    }

    /// Excluded fields of `entity_type`, in lexical order.
    pub fn fields_for(&self, entity_type: &EntityType) -> impl Iterator<Item = &str> {
        self.excluded
            .get(entity_type)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.excluded.values().all(BTreeSet::is_empty)
    }
}

/// Step-by-step builder for [`FieldExclusions`].
#[derive(Debug, Default)]
pub struct FieldExclusionsBuilder {
    excluded: HashMap<EntityType, BTreeSet<String>>,
}

impl FieldExclusionsBuilder {
    /// Exclude `field` on `entity_type`.
    #[must_use]
    pub fn exclude(mut self, entity_type: EntityType, field: impl Into<String>) -> Self {
        self.excluded
            .entry(entity_type)
            .or_default()
            .insert(field.into());
        self
    }

    /// Exclude `field` on the entity type `T`.
    #[must_use]
    pub fn exclude_field<T: TrackedFields>(self, field: impl Into<String>) -> Self {
        self.exclude(T::ENTITY_TYPE, field)
    }

    /// Add the built-in exclusions.
    #[must_use]
    pub fn with_defaults(self) -> Self {
        let builder = LISTENER_STATS.into_iter().fold(self, |builder, field| {
            builder
                .exclude_field::<Mount>(field)
                .exclude_field::<Remote>(field)
        });
        PLAYBACK_STATE.into_iter().fold(builder, |builder, field| {
            builder.exclude_field::<Playlist>(field)
        })
    }

    /// Consume the builder, resolve every field, and return the mapping.
    ///
    /// # Errors
    ///
    /// Returns [`OnAirError::UnknownFieldExclusion`] when an excluded field
    /// is not declared on its entity type.
    pub fn build(self) -> Result<FieldExclusions, OnAirError> {
        for (entity_type, fields) in &self.excluded {
            if let Some(field) = fields.iter().find(|f| !entity_type.has_field(f)) {
                return Err(OnAirError::UnknownFieldExclusion {
                    entity_type: entity_type.clone(),
                    field: field.clone(),
                });
            }
        }
        Ok(self.into_unchecked())
    }

    fn into_unchecked(self) -> FieldExclusions {
        FieldExclusions {
            excluded: self.excluded,
        }
    }
}
