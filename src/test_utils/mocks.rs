//! Mock transport implementations for testing.
//!
//! Each mock either fails every call with a configured
//! [`TransportError`] or answers from its configured wire responses.
//! Unconfigured methods return neutral defaults (empty history, absent
//! accounts) so tests only set up what they exercise.

use async_trait::async_trait;

use crate::domain::traits::{AgoraTransportV3, AgoraTransportV4};
use crate::wire::{TransportError, v3, v4};

/// Mock V3 transport.
#[derive(Default)]
pub struct MockTransportV3 {
    pub fail_with: Option<TransportError>,
    pub account_response: Option<v3::GetAccountInfoResponse>,
    pub create_response: Option<v3::CreateAccountResponse>,
    pub transaction_response: Option<v3::GetTransactionResponse>,
    pub history_response: Option<v3::GetHistoryResponse>,
    pub submit_response: Option<v3::SubmitTransactionResponse>,
}

impl MockTransportV3 {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport where every call fails with the given error.
    #[must_use]
    pub fn failing(error: TransportError) -> Self {
        Self {
            fail_with: Some(error),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_account(mut self, response: v3::GetAccountInfoResponse) -> Self {
        self.account_response = Some(response);
        self
    }

    #[must_use]
    pub fn with_create(mut self, response: v3::CreateAccountResponse) -> Self {
        self.create_response = Some(response);
        self
    }

    #[must_use]
    pub fn with_transaction(mut self, response: v3::GetTransactionResponse) -> Self {
        self.transaction_response = Some(response);
        self
    }

    #[must_use]
    pub fn with_history(mut self, response: v3::GetHistoryResponse) -> Self {
        self.history_response = Some(response);
        self
    }

    #[must_use]
    pub fn with_submit(mut self, response: v3::SubmitTransactionResponse) -> Self {
        self.submit_response = Some(response);
        self
    }

    fn check_should_fail(&self) -> Result<(), TransportError> {
        match &self.fail_with {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AgoraTransportV3 for MockTransportV3 {
    async fn get_account_info(
        &self,
        _request: v3::GetAccountInfoRequest,
    ) -> Result<v3::GetAccountInfoResponse, TransportError> {
        self.check_should_fail()?;
        Ok(self
            .account_response
            .clone()
            .unwrap_or(v3::GetAccountInfoResponse {
                result: v3::AccountInfoResult::NotFound,
                account_info: None,
            }))
    }

    async fn create_account(
        &self,
        _request: v3::CreateAccountRequest,
    ) -> Result<v3::CreateAccountResponse, TransportError> {
        self.check_should_fail()?;
        Ok(self
            .create_response
            .clone()
            .unwrap_or(v3::CreateAccountResponse {
                result: v3::CreateAccountResult::Ok,
                account_info: None,
            }))
    }

    async fn get_transaction(
        &self,
        _request: v3::GetTransactionRequest,
    ) -> Result<v3::GetTransactionResponse, TransportError> {
        self.check_should_fail()?;
        Ok(self
            .transaction_response
            .clone()
            .unwrap_or(v3::GetTransactionResponse {
                state: v3::TransactionState::Unknown,
                item: None,
            }))
    }

    async fn get_history(
        &self,
        _request: v3::GetHistoryRequest,
    ) -> Result<v3::GetHistoryResponse, TransportError> {
        self.check_should_fail()?;
        Ok(self
            .history_response
            .clone()
            .unwrap_or(v3::GetHistoryResponse {
                result: v3::HistoryResult::Ok,
                items: vec![],
            }))
    }

    async fn submit_transaction(
        &self,
        _request: v3::SubmitTransactionRequest,
    ) -> Result<v3::SubmitTransactionResponse, TransportError> {
        self.check_should_fail()?;
        Ok(self
            .submit_response
            .clone()
            .unwrap_or(v3::SubmitTransactionResponse {
                result: v3::SubmitResult::Ok,
                hash: None,
                result_xdr: vec![],
                invoice_errors: vec![],
            }))
    }
}

/// Mock V4 transport.
#[derive(Default)]
pub struct MockTransportV4 {
    pub fail_with: Option<TransportError>,
    pub account_response: Option<v4::GetAccountInfoResponse>,
    pub create_response: Option<v4::CreateAccountResponse>,
    pub resolve_response: Option<v4::ResolveTokenAccountsResponse>,
    pub transaction_response: Option<v4::GetTransactionResponse>,
    pub history_response: Option<v4::GetHistoryResponse>,
    pub submit_response: Option<v4::SubmitTransactionResponse>,
    pub service_config_response: Option<v4::GetServiceConfigResponse>,
    pub blockhash_response: Option<v4::GetRecentBlockhashResponse>,
    pub rent_exemption_response: Option<v4::GetMinimumBalanceForRentExemptionResponse>,
    pub minimum_version_response: Option<v4::GetMinimumKinVersionResponse>,
}

impl MockTransportV4 {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport where every call fails with the given error.
    #[must_use]
    pub fn failing(error: TransportError) -> Self {
        Self {
            fail_with: Some(error),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_account(mut self, response: v4::GetAccountInfoResponse) -> Self {
        self.account_response = Some(response);
        self
    }

    #[must_use]
    pub fn with_create(mut self, response: v4::CreateAccountResponse) -> Self {
        self.create_response = Some(response);
        self
    }

    #[must_use]
    pub fn with_resolve(mut self, response: v4::ResolveTokenAccountsResponse) -> Self {
        self.resolve_response = Some(response);
        self
    }

    #[must_use]
    pub fn with_transaction(mut self, response: v4::GetTransactionResponse) -> Self {
        self.transaction_response = Some(response);
        self
    }

    #[must_use]
    pub fn with_history(mut self, response: v4::GetHistoryResponse) -> Self {
        self.history_response = Some(response);
        self
    }

    #[must_use]
    pub fn with_submit(mut self, response: v4::SubmitTransactionResponse) -> Self {
        self.submit_response = Some(response);
        self
    }

    #[must_use]
    pub fn with_service_config(mut self, response: v4::GetServiceConfigResponse) -> Self {
        self.service_config_response = Some(response);
        self
    }

    #[must_use]
    pub fn with_blockhash(mut self, response: v4::GetRecentBlockhashResponse) -> Self {
        self.blockhash_response = Some(response);
        self
    }

    #[must_use]
    pub fn with_rent_exemption(
        mut self,
        response: v4::GetMinimumBalanceForRentExemptionResponse,
    ) -> Self {
        self.rent_exemption_response = Some(response);
        self
    }

    #[must_use]
    pub fn with_minimum_version(mut self, response: v4::GetMinimumKinVersionResponse) -> Self {
        self.minimum_version_response = Some(response);
        self
    }

    fn check_should_fail(&self) -> Result<(), TransportError> {
        match &self.fail_with {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AgoraTransportV4 for MockTransportV4 {
    async fn get_account_info(
        &self,
        _request: v4::GetAccountInfoRequest,
    ) -> Result<v4::GetAccountInfoResponse, TransportError> {
        self.check_should_fail()?;
        Ok(self
            .account_response
            .clone()
            .unwrap_or(v4::GetAccountInfoResponse {
                result: v4::AccountInfoResult::NotFound,
                account_info: None,
            }))
    }

    async fn create_account(
        &self,
        _request: v4::CreateAccountRequest,
    ) -> Result<v4::CreateAccountResponse, TransportError> {
        self.check_should_fail()?;
        Ok(self
            .create_response
            .clone()
            .unwrap_or(v4::CreateAccountResponse {
                result: v4::CreateAccountResult::Ok,
                account_info: None,
            }))
    }

    async fn resolve_token_accounts(
        &self,
        _request: v4::ResolveTokenAccountsRequest,
    ) -> Result<v4::ResolveTokenAccountsResponse, TransportError> {
        self.check_should_fail()?;
        Ok(self
            .resolve_response
            .clone()
            .unwrap_or(v4::ResolveTokenAccountsResponse {
                token_accounts: vec![],
            }))
    }

    async fn get_transaction(
        &self,
        _request: v4::GetTransactionRequest,
    ) -> Result<v4::GetTransactionResponse, TransportError> {
        self.check_should_fail()?;
        Ok(self
            .transaction_response
            .clone()
            .unwrap_or(v4::GetTransactionResponse {
                state: v4::TransactionState::Unknown,
                item: None,
            }))
    }

    async fn get_history(
        &self,
        _request: v4::GetHistoryRequest,
    ) -> Result<v4::GetHistoryResponse, TransportError> {
        self.check_should_fail()?;
        Ok(self
            .history_response
            .clone()
            .unwrap_or(v4::GetHistoryResponse {
                result: v4::HistoryResult::Ok,
                items: vec![],
            }))
    }

    async fn submit_transaction(
        &self,
        _request: v4::SubmitTransactionRequest,
    ) -> Result<v4::SubmitTransactionResponse, TransportError> {
        self.check_should_fail()?;
        Ok(self
            .submit_response
            .clone()
            .unwrap_or(v4::SubmitTransactionResponse {
                result: v4::SubmitResult::Unrecognized(-1),
                signature: None,
                transaction_error: None,
                invoice_errors: vec![],
            }))
    }

    async fn get_service_config(
        &self,
    ) -> Result<v4::GetServiceConfigResponse, TransportError> {
        self.check_should_fail()?;
        Ok(self
            .service_config_response
            .clone()
            .unwrap_or(v4::GetServiceConfigResponse {
                subsidizer_account: None,
                token_program: vec![0u8; 32],
                token: vec![0u8; 32],
            }))
    }

    async fn get_recent_blockhash(
        &self,
    ) -> Result<v4::GetRecentBlockhashResponse, TransportError> {
        self.check_should_fail()?;
        Ok(self
            .blockhash_response
            .clone()
            .unwrap_or(v4::GetRecentBlockhashResponse {
                blockhash: vec![0u8; 32],
            }))
    }

    async fn get_minimum_balance_for_rent_exemption(
        &self,
        _request: v4::GetMinimumBalanceForRentExemptionRequest,
    ) -> Result<v4::GetMinimumBalanceForRentExemptionResponse, TransportError> {
        self.check_should_fail()?;
        Ok(self
            .rent_exemption_response
            .clone()
            .unwrap_or(v4::GetMinimumBalanceForRentExemptionResponse { lamports: 0 }))
    }

    async fn get_minimum_kin_version(
        &self,
    ) -> Result<v4::GetMinimumKinVersionResponse, TransportError> {
        self.check_should_fail()?;
        Ok(self
            .minimum_version_response
            .clone()
            .unwrap_or(v4::GetMinimumKinVersionResponse { version: 4 }))
    }
}
