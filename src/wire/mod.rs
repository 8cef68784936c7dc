//! Versioned wire message model for the Agora service.
//!
//! Two protocol generations are supported concurrently: V3 (stellar) and
//! V4 (solana). Messages are plain structs populated by a transport
//! implementation; every discriminant enum carries an `Unrecognized`
//! member so that future protocol additions classify safely instead of
//! failing to parse.

pub mod error;
pub mod shared;
pub mod v3;
pub mod v4;
pub mod xdr;

pub use error::TransportError;
pub use xdr::{ResultCodeDecoder, TransactionResultCode, XdrResultCodeDecoder};
