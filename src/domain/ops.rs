//! Request and response types for the public operation surface.
//!
//! Requests are version-agnostic; the gateway builds the wire request
//! for its protocol generation. Every response pairs a closed result
//! enum with an optional error and an optional payload, and each call
//! resolves to exactly one response.

use serde::{Deserialize, Serialize};
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use validator::Validate;

use super::error::GatewayError;
use super::invoice::InvoiceList;
use super::outcome::{
    CreateAccountResult, ReadResult, ServiceResult, SubmitTransactionResult,
};
use super::types::{
    AccountInfo, KinAccountId, KinTransaction, Quark, ServiceConfig, TransactionHash,
    TransactionOrder,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GetAccountRequest {
    pub account: KinAccountId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetAccountResponse {
    pub result: ReadResult,
    pub error: Option<GatewayError>,
    pub account_info: Option<AccountInfo>,
}

/// Account creation request.
///
/// V3 creates the account named by `account`; V4 instead submits the
/// signed `creation_transaction` and ignores the address. Callers
/// targeting V4 must supply the transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateAccountRequest {
    pub account: KinAccountId,
    pub creation_transaction: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateAccountResponse {
    pub result: CreateAccountResult,
    pub error: Option<GatewayError>,
    pub account_info: Option<AccountInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GetTransactionRequest {
    pub transaction_hash: TransactionHash,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetTransactionResponse {
    pub result: ReadResult,
    pub error: Option<GatewayError>,
    /// Absent both on failure and when the service reported success
    /// without a payload; `result` distinguishes the two.
    pub transaction: Option<KinTransaction>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GetTransactionHistoryRequest {
    pub account: KinAccountId,
    /// Paging token from a previous response; version-specific encoding
    /// is the gateway's concern.
    pub cursor: Option<String>,
    pub order: TransactionOrder,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetTransactionHistoryResponse {
    pub result: ReadResult,
    pub error: Option<GatewayError>,
    /// `Some` (possibly empty) on success, `None` otherwise.
    pub transactions: Option<Vec<KinTransaction>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct SubmitTransactionRequest {
    /// Signed transaction in its version-native encoding: a stellar
    /// envelope for V3, a serialized solana transaction for V4.
    #[validate(length(min = 1, message = "Transaction payload is required"))]
    pub transaction: Vec<u8>,
    pub invoice_list: Option<InvoiceList>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitTransactionResponse {
    pub result: SubmitTransactionResult,
    pub error: Option<GatewayError>,
    pub transaction: Option<KinTransaction>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetMinFeeResponse {
    pub result: ServiceResult,
    pub error: Option<GatewayError>,
    pub fee: Option<Quark>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WhitelistTransactionRequest {
    pub transaction_envelope: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhitelistTransactionResponse {
    pub result: ServiceResult,
    pub error: Option<GatewayError>,
    pub whitelisted_transaction_envelope: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetServiceConfigResponse {
    pub result: ServiceResult,
    pub error: Option<GatewayError>,
    pub config: Option<ServiceConfig>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetRecentBlockhashResponse {
    pub result: ServiceResult,
    pub error: Option<GatewayError>,
    pub blockhash: Option<Hash>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GetMinBalanceForRentExemptionRequest {
    /// Account data size in bytes.
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetMinBalanceForRentExemptionResponse {
    pub result: ServiceResult,
    pub error: Option<GatewayError>,
    pub lamports: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetMinimumVersionResponse {
    pub result: ServiceResult,
    pub error: Option<GatewayError>,
    pub version: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolveTokenAccountsRequest {
    pub account: KinAccountId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolveTokenAccountsResponse {
    pub result: ServiceResult,
    pub error: Option<GatewayError>,
    pub token_accounts: Option<Vec<Pubkey>>,
}
