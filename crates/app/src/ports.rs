//! Port definitions — traits the persistence layer implements.
//!
//! Ports are the boundaries between the application core and the persistence
//! framework. They are defined here (in `app`) so that both the use-case
//! layer and the persistence integration can depend on them without creating
//! circular dependencies.

pub mod flush_listener;
pub mod station_lookup;
pub mod unit_of_work;

pub use flush_listener::{FlushListener, LifecycleEvent};
pub use station_lookup::StationLookup;
pub use unit_of_work::UnitOfWork;
