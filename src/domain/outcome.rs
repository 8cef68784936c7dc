//! Closed result enumerations returned by gateway operations.
//!
//! Each operation declares its own subset; callers branch on these
//! values instead of catching errors. The three transport-failure
//! members (`TransientFailure`, `UpgradeRequired`, `UndefinedError`)
//! appear in every subset and convert from [`FailureKind`].

use serde::{Deserialize, Serialize};

/// Classification of a transport-level failure, shared by every
/// operation's failure boundary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Safe to retry the call as-is.
    Transient,
    /// The service refused the client version.
    UpgradeRequired,
    /// Unrecognized failure; not known to be retryable.
    Undefined,
}

/// Result of a read operation (get-transaction, get-history,
/// get-account).
///
/// Every non-success wire state collapses to `NotFound`; read operations
/// deliberately have no finer-grained protocol failure categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReadResult {
    Ok,
    NotFound,
    TransientFailure,
    UpgradeRequired,
    UndefinedError,
}

impl ReadResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::NotFound => "not_found",
            Self::TransientFailure => "transient_failure",
            Self::UpgradeRequired => "upgrade_required",
            Self::UndefinedError => "undefined_error",
        }
    }
}

impl From<FailureKind> for ReadResult {
    fn from(kind: FailureKind) -> Self {
        match kind {
            FailureKind::Transient => Self::TransientFailure,
            FailureKind::UpgradeRequired => Self::UpgradeRequired,
            FailureKind::Undefined => Self::UndefinedError,
        }
    }
}

impl std::fmt::Display for ReadResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of a service operation with no protocol-level failure states
/// of its own (service-config, recent-blockhash, rent exemption, minimum
/// version, minimum fee, whitelisting, token-account resolution).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ServiceResult {
    Ok,
    TransientFailure,
    UpgradeRequired,
    UndefinedError,
}

impl ServiceResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::TransientFailure => "transient_failure",
            Self::UpgradeRequired => "upgrade_required",
            Self::UndefinedError => "undefined_error",
        }
    }
}

impl From<FailureKind> for ServiceResult {
    fn from(kind: FailureKind) -> Self {
        match kind {
            FailureKind::Transient => Self::TransientFailure,
            FailureKind::UpgradeRequired => Self::UpgradeRequired,
            FailureKind::Undefined => Self::UndefinedError,
        }
    }
}

impl std::fmt::Display for ServiceResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of an account creation request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CreateAccountResult {
    Ok,
    /// The account already exists; callers treat this as terminal.
    Exists,
    TransientFailure,
    UpgradeRequired,
    UndefinedError,
}

impl CreateAccountResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Exists => "exists",
            Self::TransientFailure => "transient_failure",
            Self::UpgradeRequired => "upgrade_required",
            Self::UndefinedError => "undefined_error",
        }
    }
}

impl From<FailureKind> for CreateAccountResult {
    fn from(kind: FailureKind) -> Self {
        match kind {
            FailureKind::Transient => Self::TransientFailure,
            FailureKind::UpgradeRequired => Self::UpgradeRequired,
            FailureKind::Undefined => Self::UndefinedError,
        }
    }
}

impl std::fmt::Display for CreateAccountResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of a transaction submission.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SubmitTransactionResult {
    Ok,
    InsufficientBalance,
    InsufficientFee,
    NoAccount,
    BadSequenceNumber,
    /// One or more invoices were rejected; details on the response error.
    InvoiceError,
    /// The configured webhook vetoed the transaction.
    WebhookRejected,
    TransientFailure,
    UpgradeRequired,
    UndefinedError,
}

impl SubmitTransactionResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::InsufficientBalance => "insufficient_balance",
            Self::InsufficientFee => "insufficient_fee",
            Self::NoAccount => "no_account",
            Self::BadSequenceNumber => "bad_sequence_number",
            Self::InvoiceError => "invoice_error",
            Self::WebhookRejected => "webhook_rejected",
            Self::TransientFailure => "transient_failure",
            Self::UpgradeRequired => "upgrade_required",
            Self::UndefinedError => "undefined_error",
        }
    }
}

impl From<FailureKind> for SubmitTransactionResult {
    fn from(kind: FailureKind) -> Self {
        match kind {
            FailureKind::Transient => Self::TransientFailure,
            FailureKind::UpgradeRequired => Self::UpgradeRequired,
            FailureKind::Undefined => Self::UndefinedError,
        }
    }
}

impl std::fmt::Display for SubmitTransactionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
