//! V4 (solana-generation) wire messages.
//!
//! Accounts are addressed by a 32-byte public key, history cursors are
//! opaque bytes handed back base64-encoded, requests carry a commitment
//! level, and submission failures nest the result blob one level deeper
//! inside a transaction-error object.

use super::shared::{InvoiceErrorMessage, InvoiceListMessage};

/// Ledger confirmation depth for V4 requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commitment {
    Recent,
    Single,
    Root,
    Max,
}

/// History ordering; distinct from the V3 enum but semantically identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetAccountInfoRequest {
    pub account_id: Vec<u8>,
    pub commitment: Commitment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountInfoResult {
    Ok,
    NotFound,
    Unrecognized(i32),
}

impl AccountInfoResult {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Ok,
            1 => Self::NotFound,
            other => Self::Unrecognized(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountInfoMessage {
    pub account_id: Vec<u8>,
    /// Balance in quarks.
    pub balance: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetAccountInfoResponse {
    pub result: AccountInfoResult,
    pub account_info: Option<AccountInfoMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAccountRequest {
    /// Signed creation transaction, serialized.
    pub transaction: Vec<u8>,
    pub commitment: Commitment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateAccountResult {
    Ok,
    Exists,
    Unrecognized(i32),
}

impl CreateAccountResult {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Ok,
            1 => Self::Exists,
            other => Self::Unrecognized(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAccountResponse {
    pub result: CreateAccountResult,
    pub account_info: Option<AccountInfoMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveTokenAccountsRequest {
    pub account_id: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveTokenAccountsResponse {
    /// Token account public keys owned by the requested account.
    pub token_accounts: Vec<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetTransactionRequest {
    pub transaction_id: Vec<u8>,
    pub commitment: Commitment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionState {
    Unknown,
    Success,
    Failed,
    Pending,
    Unrecognized(i32),
}

impl TransactionState {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Unknown,
            1 => Self::Success,
            2 => Self::Failed,
            3 => Self::Pending,
            other => Self::Unrecognized(other),
        }
    }
}

/// Structured execution error attached to a failed transaction.
///
/// The embedded result blob lives here rather than on the response
/// envelope as it did in V3.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionErrorMessage {
    pub result_xdr: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItem {
    pub transaction_id: Vec<u8>,
    /// Serialized solana transaction.
    pub transaction: Vec<u8>,
    pub transaction_error: Option<TransactionErrorMessage>,
    /// Paging position of this item; opaque bytes.
    pub cursor: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetTransactionResponse {
    pub state: TransactionState,
    pub item: Option<HistoryItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetHistoryRequest {
    pub account_id: Vec<u8>,
    pub cursor: Option<Vec<u8>>,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryResult {
    Ok,
    NotFound,
    Unrecognized(i32),
}

impl HistoryResult {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Ok,
            1 => Self::NotFound,
            other => Self::Unrecognized(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetHistoryResponse {
    pub result: HistoryResult,
    pub items: Vec<HistoryItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTransactionRequest {
    /// Serialized solana transaction.
    pub transaction: Vec<u8>,
    pub invoice_list: Option<InvoiceListMessage>,
    pub commitment: Commitment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitResult {
    Ok,
    AlreadySubmitted,
    Failed,
    Rejected,
    InvoiceError,
    Unrecognized(i32),
}

impl SubmitResult {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Ok,
            1 => Self::AlreadySubmitted,
            2 => Self::Failed,
            3 => Self::Rejected,
            4 => Self::InvoiceError,
            other => Self::Unrecognized(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTransactionResponse {
    pub result: SubmitResult,
    /// Signature assigned by the service for `Ok` and `AlreadySubmitted`.
    pub signature: Option<Vec<u8>>,
    pub transaction_error: Option<TransactionErrorMessage>,
    pub invoice_errors: Vec<InvoiceErrorMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetServiceConfigResponse {
    /// Absent when the service is not subsidizing transactions.
    pub subsidizer_account: Option<Vec<u8>>,
    pub token_program: Vec<u8>,
    pub token: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetRecentBlockhashResponse {
    pub blockhash: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetMinimumBalanceForRentExemptionRequest {
    /// Account data size in bytes.
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetMinimumBalanceForRentExemptionResponse {
    pub lamports: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetMinimumKinVersionResponse {
    pub version: u32,
}
