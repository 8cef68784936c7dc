//! Client-side transaction gateway for the Agora ledger service.
//!
//! The gateway submits signed transactions, fetches history, resolves
//! account and service configuration, and reduces every wire-level
//! outcome — across the two concurrently-supported protocol generations
//! — into a small, closed set of domain results callers can branch on
//! without knowing which protocol version or transport failure was
//! behind it.
//!
//! The two generations are bridged by [`app::AgoraGatewayV3`] and
//! [`app::AgoraGatewayV4`], version-tagged implementations of the shared
//! [`domain::TransactionGateway`] surface. Concrete transports implement
//! [`domain::AgoraTransportV3`] / [`domain::AgoraTransportV4`] and stay
//! entirely outside this crate's concern.

pub mod app;
pub mod domain;
pub mod wire;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use app::{AgoraGatewayV3, AgoraGatewayV4};
pub use domain::{
    AgoraTransportV3, AgoraTransportV4, GatewayError, KinAccountId, KinTransaction,
    NetworkEnvironment, Quark, TransactionGateway,
};
pub use wire::TransportError;
