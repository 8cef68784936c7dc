//! V3 (stellar-generation) wire messages.
//!
//! Accounts are addressed by their ledger-native address string, history
//! cursors are raw bytes, and submission failures carry the result blob
//! directly on the response.

use super::shared::{InvoiceErrorMessage, InvoiceListMessage};

/// History ordering on the stellar-style enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetAccountInfoRequest {
    pub account_id: String,
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
    pub account_id: String,
    pub sequence_number: i64,
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
    pub account_id: String,
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
pub struct GetTransactionRequest {
    pub transaction_hash: Vec<u8>,
}

/// State of a single fetched transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionState {
    Unknown,
    Success,
    Unrecognized(i32),
}

impl TransactionState {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Unknown,
            1 => Self::Success,
            other => Self::Unrecognized(other),
        }
    }
}

/// One historical transaction as stored by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItem {
    pub hash: Vec<u8>,
    pub envelope_xdr: Vec<u8>,
    pub result_xdr: Vec<u8>,
    /// Paging position of this item; raw bytes of the cursor string.
    pub cursor: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetTransactionResponse {
    pub state: TransactionState,
    pub item: Option<HistoryItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetHistoryRequest {
    pub account_id: String,
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
    pub envelope_xdr: Vec<u8>,
    pub invoice_list: Option<InvoiceListMessage>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitResult {
    Ok,
    Failed,
    Rejected,
    InvoiceError,
    Unrecognized(i32),
}

impl SubmitResult {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Ok,
            1 => Self::Failed,
            2 => Self::Rejected,
            3 => Self::InvoiceError,
            other => Self::Unrecognized(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTransactionResponse {
    pub result: SubmitResult,
    pub hash: Option<Vec<u8>>,
    /// Result blob for the `Failed` case; empty otherwise.
    pub result_xdr: Vec<u8>,
    pub invoice_errors: Vec<InvoiceErrorMessage>,
}
