//! Task delivery for leadrelay.
//!
//! This module owns the best-effort half of the pipeline: creating a task
//! in the external tracker from a stored lead. Task creation is a
//! two-phase protocol (a retried minimal create, then best-effort
//! custom-field enrichment) so the failure surface of optional metadata
//! never takes down the core creation. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Retry schedule and sleep/jitter ports in [`retry`]
//! - Field-definition cache in [`cache`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The delivery client in [`services`]

pub mod adapters;
pub mod cache;
pub mod domain;
pub mod ports;
pub mod retry;
pub mod services;

#[cfg(test)]
mod tests;
