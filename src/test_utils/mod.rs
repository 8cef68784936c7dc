//! Test utilities, available with the `test-utils` feature.

pub mod mocks;

pub use mocks::{MockTransportV3, MockTransportV4};
