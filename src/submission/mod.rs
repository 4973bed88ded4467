//! Lead submission intake for leadrelay.
//!
//! This module owns the durable half of the pipeline: validating untrusted
//! form input, persisting every lead as a [`domain::SubmissionRecord`]
//! before any delivery attempt is made, and recording the final delivery
//! outcome on the stored record. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Validation rules in [`validation`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
