//! Domain traits defining contracts for external systems and the public
//! operation surface.

use async_trait::async_trait;

use super::ops::{
    CreateAccountRequest, CreateAccountResponse, GetAccountRequest, GetAccountResponse,
    GetMinFeeResponse, GetTransactionHistoryRequest, GetTransactionHistoryResponse,
    GetTransactionRequest, GetTransactionResponse, SubmitTransactionRequest,
    SubmitTransactionResponse, WhitelistTransactionRequest, WhitelistTransactionResponse,
};
use crate::wire::{TransportError, v3, v4};

/// V3 (stellar-generation) transport boundary.
///
/// One method per wire operation; each returns either the wire response
/// or a [`TransportError`]. Retry and backoff live behind this trait,
/// never in the gateway.
#[async_trait]
pub trait AgoraTransportV3: Send + Sync {
    async fn get_account_info(
        &self,
        request: v3::GetAccountInfoRequest,
    ) -> Result<v3::GetAccountInfoResponse, TransportError>;

    async fn create_account(
        &self,
        request: v3::CreateAccountRequest,
    ) -> Result<v3::CreateAccountResponse, TransportError>;

    async fn get_transaction(
        &self,
        request: v3::GetTransactionRequest,
    ) -> Result<v3::GetTransactionResponse, TransportError>;

    async fn get_history(
        &self,
        request: v3::GetHistoryRequest,
    ) -> Result<v3::GetHistoryResponse, TransportError>;

    async fn submit_transaction(
        &self,
        request: v3::SubmitTransactionRequest,
    ) -> Result<v3::SubmitTransactionResponse, TransportError>;
}

/// V4 (solana-generation) transport boundary.
#[async_trait]
pub trait AgoraTransportV4: Send + Sync {
    async fn get_account_info(
        &self,
        request: v4::GetAccountInfoRequest,
    ) -> Result<v4::GetAccountInfoResponse, TransportError>;

    async fn create_account(
        &self,
        request: v4::CreateAccountRequest,
    ) -> Result<v4::CreateAccountResponse, TransportError>;

    async fn resolve_token_accounts(
        &self,
        request: v4::ResolveTokenAccountsRequest,
    ) -> Result<v4::ResolveTokenAccountsResponse, TransportError>;

    async fn get_transaction(
        &self,
        request: v4::GetTransactionRequest,
    ) -> Result<v4::GetTransactionResponse, TransportError>;

    async fn get_history(
        &self,
        request: v4::GetHistoryRequest,
    ) -> Result<v4::GetHistoryResponse, TransportError>;

    async fn submit_transaction(
        &self,
        request: v4::SubmitTransactionRequest,
    ) -> Result<v4::SubmitTransactionResponse, TransportError>;

    async fn get_service_config(&self)
    -> Result<v4::GetServiceConfigResponse, TransportError>;

    async fn get_recent_blockhash(
        &self,
    ) -> Result<v4::GetRecentBlockhashResponse, TransportError>;

    async fn get_minimum_balance_for_rent_exemption(
        &self,
        request: v4::GetMinimumBalanceForRentExemptionRequest,
    ) -> Result<v4::GetMinimumBalanceForRentExemptionResponse, TransportError>;

    async fn get_minimum_kin_version(
        &self,
    ) -> Result<v4::GetMinimumKinVersionResponse, TransportError>;
}

/// Version-agnostic operation surface shared by both protocol
/// generations.
///
/// Implementations never return `Err`: every outcome, including
/// transport failure, is resolved into the response's result enum.
/// Gateways hold no per-call state and are safe to share across tasks.
#[async_trait]
pub trait TransactionGateway: Send + Sync {
    async fn get_account(&self, request: GetAccountRequest) -> GetAccountResponse;

    async fn create_account(&self, request: CreateAccountRequest) -> CreateAccountResponse;

    async fn get_transaction(&self, request: GetTransactionRequest) -> GetTransactionResponse;

    async fn get_transaction_history(
        &self,
        request: GetTransactionHistoryRequest,
    ) -> GetTransactionHistoryResponse;

    async fn submit_transaction(
        &self,
        request: SubmitTransactionRequest,
    ) -> SubmitTransactionResponse;

    async fn get_transaction_min_fee(&self) -> GetMinFeeResponse;

    /// Whether submissions through this gateway are whitelisted.
    fn is_whitelisting_available(&self) -> bool {
        true
    }

    /// Pass-through: whitelisting happens as a side effect of
    /// submission, so this always succeeds with the input unchanged.
    fn whitelist_transaction(
        &self,
        request: WhitelistTransactionRequest,
    ) -> WhitelistTransactionResponse;
}
