//! Port contracts for the delivery module.

mod api;
mod deliver;

pub use api::TrackerApi;
pub use deliver::TaskDelivery;
