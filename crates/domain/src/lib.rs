//! # onair-domain
//!
//! Pure domain model for the onair station restart trigger.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define the **Station** aggregate and the restart flag it carries
//! - Define the station-owned broadcast entities (**Mount**, **Remote**, **Playlist**)
//!   and the closed [`TrackedEntity`](entity::TrackedEntity) sum type over them
//! - Define **change sets** and **mutation batches** (pending insert/update/delete work)
//! - Define **field exclusions** (fields whose changes never warrant a restart)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app` or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod change_set;
pub mod entity;
pub mod exclusion;
pub mod mount;
pub mod mutation;
pub mod playlist;
pub mod remote;
pub mod station;
