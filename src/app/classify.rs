//! Shared outcome classification.
//!
//! Both protocol generations funnel their normalized payloads through
//! these functions so that equivalent underlying conditions always
//! produce the same domain result, whichever wire schema reported them.
//! Everything here is a pure function over its inputs.

use tracing::debug;

use crate::domain::outcome::{FailureKind, ReadResult, SubmitTransactionResult};
use crate::wire::{ResultCodeDecoder, TransactionResultCode, TransportError};

/// Classify a transport-level failure.
///
/// Retryability is checked before forced-upgrade; if an error ever
/// satisfied both predicates, retry semantics win. Everything else is
/// `Undefined`.
pub fn transport_failure(error: &TransportError) -> FailureKind {
    if error.can_retry() {
        FailureKind::Transient
    } else if error.is_forced_upgrade() {
        FailureKind::UpgradeRequired
    } else {
        FailureKind::Undefined
    }
}

/// Classify a read operation's wire state.
///
/// Every non-success wire state collapses to `NotFound`, including
/// states that might represent a protocol-level hiccup. Callers depend
/// on this collapse; do not add finer read-failure categories.
pub fn read_result(success: bool) -> ReadResult {
    if success {
        ReadResult::Ok
    } else {
        ReadResult::NotFound
    }
}

/// Classify a failed submission from its embedded result blob.
///
/// A decodable code maps 1:1 onto its domain result; an absent,
/// undecodable, or unrecognized code defaults to `TransientFailure` so
/// the failure stays visible and retryable rather than being promoted
/// to a fatal state.
pub fn submit_failure(
    result_blob: Option<&[u8]>,
    decoder: &dyn ResultCodeDecoder,
) -> SubmitTransactionResult {
    let code = result_blob.and_then(|blob| decoder.decode(blob));
    if code.is_none() {
        debug!("Submission failed without a decodable result code");
    }
    match code {
        Some(TransactionResultCode::InsufficientBalance) => {
            SubmitTransactionResult::InsufficientBalance
        }
        Some(TransactionResultCode::InsufficientFee) => SubmitTransactionResult::InsufficientFee,
        Some(TransactionResultCode::NoAccount) => SubmitTransactionResult::NoAccount,
        Some(TransactionResultCode::BadSeq) => SubmitTransactionResult::BadSequenceNumber,
        Some(TransactionResultCode::Other) | None => SubmitTransactionResult::TransientFailure,
    }
}
