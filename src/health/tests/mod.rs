//! Unit tests for the health module.

mod probe_tests;
