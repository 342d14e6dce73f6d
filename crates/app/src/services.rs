//! Application services — use-case implementations.
//!
//! Services receive port trait implementations per call or at construction,
//! keeping this layer decoupled from the concrete persistence framework.

pub mod restart_trigger;
