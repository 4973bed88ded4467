//! Leadrelay: lead-capture submission pipeline.
//!
//! This crate receives contact-form submissions over HTTP, persists every
//! lead to a durable fallback store, and forwards it to an external
//! task-tracking system with retries, custom-field mapping, and
//! partial-failure handling. The consistency contract is that a lead is
//! never lost, even when the downstream tracker is unreachable.
//!
//! # Architecture
//!
//! Leadrelay follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (stores, APIs, etc.)
//!
//! # Modules
//!
//! - [`submission`]: Lead validation, durable record lifecycle, and intake
//!   orchestration
//! - [`delivery`]: Retrying task-delivery client for the external tracker
//! - [`health`]: Cached connectivity probes for tracker and store
//! - [`config`]: One-shot environment configuration loading
//! - [`http`]: Axum request surface

pub mod config;
pub mod delivery;
pub mod health;
pub mod http;
pub mod submission;
