//! Unit-of-work port — the persistence layer's in-flight commit.

use onair_domain::error::OnAirError;
use onair_domain::id::StationId;
use onair_domain::mutation::MutationBatch;
use onair_domain::station::Station;

use super::StationLookup;

/// The commit being prepared by the persistence layer.
///
/// Implementations hand out the pending [`MutationBatch`] and the stations
/// they manage. Station lookups reflect in-memory state, including
/// modifications not yet written.
pub trait UnitOfWork: StationLookup {
    /// Mutations scheduled for this commit.
    fn batch(&self) -> &MutationBatch;

    /// Mutable access to a managed station.
    fn station_mut(&mut self, id: StationId) -> Option<&mut Station>;

    /// Recompute the change set of a station modified during the flush, so
    /// the modification is written as part of this commit.
    ///
    /// # Errors
    ///
    /// Returns [`OnAirError::Persistence`] when the persistence layer cannot
    /// include the station in the commit.
    fn recompute_station_change_set(&mut self, id: StationId) -> Result<(), OnAirError>;
}
