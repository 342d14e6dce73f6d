//! Station lookup port — read access to stations by id.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use onair_domain::id::StationId;
use onair_domain::station::Station;

/// Resolves a station by id, as currently held in memory.
pub trait StationLookup {
    /// Get a station by its identifier.
    fn station(&self, id: StationId) -> Option<&Station>;
}

impl<S: BuildHasher> StationLookup for HashMap<StationId, Station, S> {
    fn station(&self, id: StationId) -> Option<&Station> {
        self.get(&id)
    }
}

impl StationLookup for BTreeMap<StationId, Station> {
    fn station(&self, id: StationId) -> Option<&Station> {
        self.get(&id)
    }
}

impl<T: StationLookup + ?Sized> StationLookup for &T {
    fn station(&self, id: StationId) -> Option<&Station> {
        (**self).station(id)
    }
}
