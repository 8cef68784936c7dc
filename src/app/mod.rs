//! Application layer: shared classification, version-specific
//! marshalling, and the two gateway implementations.

pub mod classify;
pub(crate) mod marshal;
pub mod v3;
pub mod v4;

pub use v3::AgoraGatewayV3;
pub use v4::AgoraGatewayV4;
