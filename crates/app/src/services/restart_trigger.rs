//! Restart trigger — flags stations whose broadcast configuration changed.
//!
//! Runs during the flush of a commit. It walks the pending mutations, keeps
//! the ones that affect a station's running broadcast process, and sets
//! `needs_restart` on each affected station within the same commit. An
//! external supervisor restarts flagged stations and clears the flag.
//!
//! An entity is relevant when it is:
//! - a [`Mount`](onair_domain::mount::Mount),
//! - an editable [`Remote`](onair_domain::remote::Remote),
//! - a [`Playlist`](onair_domain::playlist::Playlist) whose station uses
//!   manual `AutoDJ`.
//!
//! Inserted and deleted relevant entities always count. Updated ones count
//! only if a changed field survives the [`FieldExclusions`].

use std::collections::BTreeSet;
use std::sync::Arc;

use onair_domain::entity::TrackedEntity;
use onair_domain::error::OnAirError;
use onair_domain::exclusion::FieldExclusions;
use onair_domain::id::StationId;
use onair_domain::mutation::MutationBatch;

use crate::ports::{FlushListener, LifecycleEvent, StationLookup, UnitOfWork};
use crate::station_view::MergedStations;

/// Flush listener that marks stations as needing a restart.
#[derive(Debug, Clone)]
pub struct RestartTrigger {
    exclusions: Arc<FieldExclusions>,
}

impl RestartTrigger {
    /// Listener name reported to the flush registry.
    pub const NAME: &'static str = "station_requires_restart";

    /// Create a trigger sharing the process-wide exclusion mapping.
    #[must_use]
    pub fn new(exclusions: Arc<FieldExclusions>) -> Self {
        Self { exclusions }
    }

    /// Compute the stations affected by `batch`, without touching them.
    ///
    /// `stations` resolves owning stations for playlist checks; stations
    /// inserted or updated in `batch` take precedence over it.
    ///
    /// # Errors
    ///
    /// Returns [`OnAirError::UnknownFieldExclusion`] when an updated relevant
    /// entity reports a changed field its type does not declare.
    pub fn compute<L: StationLookup + ?Sized>(
        &self,
        batch: &MutationBatch,
        stations: &L,
    ) -> Result<BTreeSet<StationId>, OnAirError> {
        let view = MergedStations::new(batch, stations);
        let mut affected = BTreeSet::new();

        for mutation in batch.iter() {
            let Some(station_id) = relevant_station(mutation.entity, &view) else {
                continue;
            };

            // updates only: inserts and deletes ignore exclusions
            if let Some(changes) = mutation.changes {
                let entity_type = mutation.entity.entity_type();
                let remaining = self.exclusions.retain_relevant(&entity_type, changes)?;
                if remaining.is_empty() {
                    tracing::debug!(
                        %entity_type,
                        %station_id,
                        "skipping update touching only excluded fields"
                    );
                    continue;
                }
            }

            affected.insert(station_id);
        }

        Ok(affected)
    }

    /// Flag every station affected by the pending batch of `uow` and have
    /// the flag written in the same commit.
    ///
    /// Returns the ids of the stations flagged. Nothing is touched when no
    /// station is affected.
    ///
    /// # Errors
    ///
    /// Returns [`OnAirError::UnknownFieldExclusion`] from [`compute`](Self::compute)
    /// (in which case no station is modified), or the persistence error of a
    /// failed change-set recomputation.
    #[tracing::instrument(skip_all, fields(pending = uow.batch().len()))]
    pub fn apply(&self, uow: &mut dyn UnitOfWork) -> Result<BTreeSet<StationId>, OnAirError> {
        let affected = self.compute(uow.batch(), &*uow)?;
        let mut flagged = BTreeSet::new();

        for station_id in affected {
            let Some(station) = uow.station_mut(station_id) else {
                tracing::warn!(
                    %station_id,
                    "affected station is not managed by the unit of work"
                );
                continue;
            };
            station.mark_needs_restart();
            uow.recompute_station_change_set(station_id)?;

            tracing::info!(%station_id, "station flagged for restart");
            flagged.insert(station_id);
        }

        Ok(flagged)
    }
}

impl FlushListener for RestartTrigger {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn subscribed_events(&self) -> &'static [LifecycleEvent] {
        &[LifecycleEvent::OnFlush]
    }

    fn handle(&self, _event: LifecycleEvent, uow: &mut dyn UnitOfWork) -> Result<(), OnAirError> {
        self.apply(uow).map(|_| ())
    }
}

/// The owning station of `entity` if a change to it affects the broadcast.
fn relevant_station(entity: &TrackedEntity, stations: &impl StationLookup) -> Option<StationId> {
    let station_id = entity.owning_station()?;
    let relevant = match entity {
        TrackedEntity::Mount(_) => true,
        TrackedEntity::Remote(remote) => remote.editable,
        TrackedEntity::Playlist(playlist) => match stations.station(station_id) {
            Some(station) => station.uses_manual_autodj(),
            None => {
                tracing::warn!(
                    %station_id,
                    playlist_id = %playlist.id,
                    "owning station of playlist not found"
                );
                false
            }
        },
        TrackedEntity::Station(_) | TrackedEntity::Other { .. } => false,
    };
    relevant.then_some(station_id)
}
