//! Adapter implementations for the submission module.

pub mod memory;
