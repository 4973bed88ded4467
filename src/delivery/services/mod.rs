//! Delivery orchestration services.

mod client;

pub use client::{DeliveryClient, LiveDeliveryClient};
