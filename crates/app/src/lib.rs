//! # onair-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** the persistence layer implements:
//!   - `StationLookup` — read access to managed stations
//!   - `UnitOfWork` — the in-flight commit: pending mutations, station writes,
//!     change-set recomputation
//!   - `FlushListener` — hooks invoked during the flush lifecycle
//! - Provide the **restart trigger** (`RestartTrigger`) that flags stations
//!   whose broadcast configuration changed
//! - Provide the in-process **listener registry** (`FlushHooks`)
//! - Load **configuration** (field exclusions, enable switch)
//!
//! ## Dependency rule
//! Depends on `onair-domain` only (plus config parsing and tracing).
//! Never imports a persistence implementation. The persistence layer depends
//! on *this* crate, not the reverse.

pub mod config;
pub mod flush_hooks;
pub mod ports;
pub mod services;
pub mod station_view;
