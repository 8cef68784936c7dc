//! Gateway error definitions.

use thiserror::Error;

use super::invoice::InvoiceError;
use crate::wire::TransportError;

/// Error attached to a gateway response.
///
/// Protocol-level business failures are expressed through the response
/// result, not through this type; an error here carries the supporting
/// detail for a failure result (the transport error that was classified,
/// or the projected invoice rejections).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// The transport failed before a wire response was produced.
    #[error("Transport failure: {0}")]
    Transport(#[from] TransportError),

    /// The service rejected one or more invoices at submission.
    #[error("{} invoice(s) rejected by the service", .0.len())]
    InvoiceErrors(Vec<InvoiceError>),

    /// The request could not be marshalled for the target protocol
    /// version.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}
