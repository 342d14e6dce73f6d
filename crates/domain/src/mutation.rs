//! Mutation batches — the insert/update/delete work pending in one commit.

use serde::{Deserialize, Serialize};

use crate::change_set::ChangeSet;
use crate::entity::TrackedEntity;
use crate::station::Station;

/// Kind of pending mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationKind {
    Insert,
    Update,
    Delete,
}

impl MutationKind {
    /// All kinds, in the order a batch is walked.
    pub const ALL: [Self; 3] = [Self::Insert, Self::Update, Self::Delete];
}

impl std::fmt::Display for MutationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Insert => f.write_str("insert"),
            Self::Update => f.write_str("update"),
            Self::Delete => f.write_str("delete"),
        }
    }
}

/// An updated entity together with the fields that changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingUpdate {
    pub entity: TrackedEntity,
    pub changes: ChangeSet,
}

/// One entry of a [`MutationBatch`], borrowed.
#[derive(Debug, Clone, Copy)]
pub struct Mutation<'a> {
    pub kind: MutationKind,
    pub entity: &'a TrackedEntity,
    /// Present for [`MutationKind::Update`] only.
    pub changes: Option<&'a ChangeSet>,
}

/// Entities scheduled for insertion, update and deletion in one commit.
///
/// Each sequence keeps the order in which the persistence layer scheduled
/// its entities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MutationBatch {
    pub inserted: Vec<TrackedEntity>,
    pub updated: Vec<PendingUpdate>,
    pub deleted: Vec<TrackedEntity>,
}

impl MutationBatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn insert(mut self, entity: impl Into<TrackedEntity>) -> Self {
        self.inserted.push(entity.into());
        self
    }

    #[must_use]
    pub fn update(mut self, entity: impl Into<TrackedEntity>, changes: ChangeSet) -> Self {
        self.updated.push(PendingUpdate {
            entity: entity.into(),
            changes,
        });
        self
    }

    #[must_use]
    pub fn delete(mut self, entity: impl Into<TrackedEntity>) -> Self {
        self.deleted.push(entity.into());
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inserted.is_empty() && self.updated.is_empty() && self.deleted.is_empty()
    }

    /// Total number of pending mutations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inserted.len() + self.updated.len() + self.deleted.len()
    }

    /// Walk every mutation: insertions, then updates, then deletions.
    pub fn iter(&self) -> impl Iterator<Item = Mutation<'_>> {
        let inserted = self.inserted.iter().map(|entity| Mutation {
            kind: MutationKind::Insert,
            entity,
            changes: None,
        });
        let updated = self.updated.iter().map(|update| Mutation {
            kind: MutationKind::Update,
            entity: &update.entity,
            changes: Some(&update.changes),
        });
        let deleted = self.deleted.iter().map(|entity| Mutation {
            kind: MutationKind::Delete,
            entity,
            changes: None,
        });
        inserted.chain(updated).chain(deleted)
    }

    /// Station states as of this commit: inserted or updated stations.
    pub fn pending_stations(&self) -> impl Iterator<Item = &Station> {
        self.inserted
            .iter()
            .chain(self.updated.iter().map(|update| &update.entity))
            .filter_map(TrackedEntity::as_station)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::{MountId, StationId};
    use crate::mount::Mount;
    use crate::station::AutoDjMode;

    fn mount(id: u64) -> Mount {
        Mount::builder()
            .id(MountId::new(id))
            .station_id(StationId::new(1))
            .name(format!("/stream{id}.mp3"))
            .build()
            .unwrap()
    }

    #[test]
    fn should_be_empty_by_default() {
        let batch = MutationBatch::new();
        assert!(batch.is_empty());
        assert_eq!(batch.iter().count(), 0);
    }

    #[test]
    fn should_walk_inserts_then_updates_then_deletes() {
        let batch = MutationBatch::new()
            .delete(mount(3))
            .update(mount(2), ChangeSet::new().with("is_public", true, false))
            .insert(mount(1));

        let kinds: Vec<MutationKind> = batch.iter().map(|m| m.kind).collect();
        assert_eq!(kinds, MutationKind::ALL);
        assert_eq!(batch.len(), 3);

        let update = batch.iter().nth(1).unwrap();
        assert!(update.changes.unwrap().contains("is_public"));
        assert!(batch.iter().next().unwrap().changes.is_none());
    }

    #[test]
    fn should_expose_inserted_and_updated_stations_only() {
        let station = |id: u64| {
            crate::station::Station::builder()
                .id(StationId::new(id))
                .name(format!("Station {id}"))
                .auto_dj(AutoDjMode::Manual)
                .build()
                .unwrap()
        };
        let batch = MutationBatch::new()
            .insert(station(1))
            .update(station(2), ChangeSet::new().with("name", "Two", "2"))
            .delete(station(3))
            .insert(mount(4));

        let ids: Vec<StationId> = batch.pending_stations().map(|s| s.id).collect();
        assert_eq!(ids, [StationId::new(1), StationId::new(2)]);
    }

    #[test]
    fn should_deserialize_partial_batch() {
        let batch: MutationBatch = serde_json::from_value(serde_json::json!({
            "deleted": [{"type": "other", "entity_type": "song_history"}]
        }))
        .unwrap();
        assert!(batch.inserted.is_empty());
        assert_eq!(batch.deleted.len(), 1);
    }
}
