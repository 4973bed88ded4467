//! Adapter implementations for the delivery module.

pub mod clickup;
