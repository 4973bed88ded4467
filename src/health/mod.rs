//! Connectivity probes for the tracker and the submission store.
//!
//! Read-only monitoring that shares the delivery error vocabulary. Probe
//! results are cached briefly so dashboards cannot hammer the external
//! API. No retries, no state machine.

mod probe;

pub use probe::{HealthProbe, HealthReport, ProbeSnapshot};

#[cfg(test)]
mod tests;
