//! Station view as of the pending commit.
//!
//! Relevance checks read station settings (e.g. the `AutoDJ` mode). Stations
//! inserted or updated in the same batch must be seen in their new state
//! regardless of where they sit in the batch, so the view overlays those
//! pending stations on top of the persistence layer's lookup.

use std::collections::HashMap;

use onair_domain::id::StationId;
use onair_domain::mutation::MutationBatch;
use onair_domain::station::Station;

use crate::ports::StationLookup;

/// Pending stations of a batch layered over a base lookup.
pub struct MergedStations<'a, L: ?Sized> {
    pending: HashMap<StationId, &'a Station>,
    base: &'a L,
}

impl<'a, L: StationLookup + ?Sized> MergedStations<'a, L> {
    /// Build the view. When a station appears several times in the batch,
    /// the last occurrence wins.
    pub fn new(batch: &'a MutationBatch, base: &'a L) -> Self {
        let pending = batch
            .pending_stations()
            .map(|station| (station.id, station))
            .collect();
        Self { pending, base }
    }
}

impl<L: StationLookup + ?Sized> StationLookup for MergedStations<'_, L> {
    fn station(&self, id: StationId) -> Option<&Station> {
        self.pending
            .get(&id)
            .copied()
            .or_else(|| self.base.station(id))
    }
}
