//! V4 (solana-generation) gateway.
//!
//! Shares the version-agnostic surface with the V3 gateway and adds the
//! V4-only infrastructure operations as inherent methods.

use std::sync::Arc;

use async_trait::async_trait;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use tracing::{debug, instrument, warn};
use validator::Validate;

use super::{classify, marshal};
use crate::domain::error::GatewayError;
use crate::domain::ops::{
    CreateAccountRequest, CreateAccountResponse, GetAccountRequest, GetAccountResponse,
    GetMinBalanceForRentExemptionRequest, GetMinBalanceForRentExemptionResponse,
    GetMinFeeResponse, GetMinimumVersionResponse, GetRecentBlockhashResponse,
    GetServiceConfigResponse, GetTransactionHistoryRequest, GetTransactionHistoryResponse,
    GetTransactionRequest, GetTransactionResponse, ResolveTokenAccountsRequest,
    ResolveTokenAccountsResponse, SubmitTransactionRequest, SubmitTransactionResponse,
    WhitelistTransactionRequest, WhitelistTransactionResponse,
};
use crate::domain::outcome::{
    CreateAccountResult, ReadResult, ServiceResult, SubmitTransactionResult,
};
use crate::domain::project_invoice_errors;
use crate::domain::traits::{AgoraTransportV4, TransactionGateway};
use crate::domain::types::{KinTransaction, NetworkEnvironment, Quark, ServiceConfig};
use crate::wire::{ResultCodeDecoder, XdrResultCodeDecoder, v4};

/// Gateway speaking the V4 wire schema.
pub struct AgoraGatewayV4 {
    transport: Arc<dyn AgoraTransportV4>,
    decoder: Arc<dyn ResultCodeDecoder>,
    network: NetworkEnvironment,
}

impl AgoraGatewayV4 {
    #[must_use]
    pub fn new(transport: Arc<dyn AgoraTransportV4>, network: NetworkEnvironment) -> Self {
        Self::with_decoder(transport, Arc::new(XdrResultCodeDecoder), network)
    }

    #[must_use]
    pub fn with_decoder(
        transport: Arc<dyn AgoraTransportV4>,
        decoder: Arc<dyn ResultCodeDecoder>,
        network: NetworkEnvironment,
    ) -> Self {
        Self {
            transport,
            decoder,
            network,
        }
    }

    /// Fold a committed submission back into an acknowledged
    /// transaction.
    ///
    /// Ordered fallible chain: the service signature must parse, then
    /// the submitted transaction must accept the splice, then the
    /// envelope must rebuild. The first failing step routes the whole
    /// submission to `UndefinedError`.
    fn committed_transaction(
        &self,
        submitted: &[u8],
        signature: Option<&[u8]>,
    ) -> Option<KinTransaction> {
        let signature = Signature::try_from(signature?).ok()?;
        let envelope = marshal::splice_signature(submitted, signature)?;
        KinTransaction::acknowledged(envelope, Vec::new(), self.network)
    }

    pub async fn get_service_config(&self) -> GetServiceConfigResponse {
        match self.transport.get_service_config().await {
            Ok(response) => match Self::service_config_from_wire(&response) {
                Some(config) => GetServiceConfigResponse {
                    result: ServiceResult::Ok,
                    error: None,
                    config: Some(config),
                },
                None => {
                    debug!("get_service_config payload did not decode");
                    GetServiceConfigResponse {
                        result: ServiceResult::UndefinedError,
                        error: None,
                        config: None,
                    }
                }
            },
            Err(error) => GetServiceConfigResponse {
                result: classify::transport_failure(&error).into(),
                error: Some(error.into()),
                config: None,
            },
        }
    }

    pub async fn get_recent_blockhash(&self) -> GetRecentBlockhashResponse {
        match self.transport.get_recent_blockhash().await {
            Ok(response) => {
                let blockhash: Option<[u8; 32]> = response.blockhash.as_slice().try_into().ok();
                match blockhash {
                    Some(bytes) => GetRecentBlockhashResponse {
                        result: ServiceResult::Ok,
                        error: None,
                        blockhash: Some(Hash::new_from_array(bytes)),
                    },
                    None => GetRecentBlockhashResponse {
                        result: ServiceResult::UndefinedError,
                        error: None,
                        blockhash: None,
                    },
                }
            }
            Err(error) => GetRecentBlockhashResponse {
                result: classify::transport_failure(&error).into(),
                error: Some(error.into()),
                blockhash: None,
            },
        }
    }

    pub async fn get_minimum_balance_for_rent_exemption(
        &self,
        request: GetMinBalanceForRentExemptionRequest,
    ) -> GetMinBalanceForRentExemptionResponse {
        let wire = v4::GetMinimumBalanceForRentExemptionRequest { size: request.size };
        match self
            .transport
            .get_minimum_balance_for_rent_exemption(wire)
            .await
        {
            Ok(response) => GetMinBalanceForRentExemptionResponse {
                result: ServiceResult::Ok,
                error: None,
                lamports: Some(response.lamports),
            },
            Err(error) => GetMinBalanceForRentExemptionResponse {
                result: classify::transport_failure(&error).into(),
                error: Some(error.into()),
                lamports: None,
            },
        }
    }

    pub async fn get_minimum_kin_version(&self) -> GetMinimumVersionResponse {
        match self.transport.get_minimum_kin_version().await {
            Ok(response) => GetMinimumVersionResponse {
                result: ServiceResult::Ok,
                error: None,
                version: Some(response.version),
            },
            Err(error) => GetMinimumVersionResponse {
                result: classify::transport_failure(&error).into(),
                error: Some(error.into()),
                version: None,
            },
        }
    }

    pub async fn resolve_token_accounts(
        &self,
        request: ResolveTokenAccountsRequest,
    ) -> ResolveTokenAccountsResponse {
        match self
            .transport
            .resolve_token_accounts(marshal::v4_resolve_token_accounts(&request))
            .await
        {
            Ok(response) => {
                // Entries that are not valid public keys are skipped.
                let token_accounts = response
                    .token_accounts
                    .iter()
                    .filter_map(|bytes| Pubkey::try_from(bytes.as_slice()).ok())
                    .collect();
                ResolveTokenAccountsResponse {
                    result: ServiceResult::Ok,
                    error: None,
                    token_accounts: Some(token_accounts),
                }
            }
            Err(error) => ResolveTokenAccountsResponse {
                result: classify::transport_failure(&error).into(),
                error: Some(error.into()),
                token_accounts: None,
            },
        }
    }

    fn service_config_from_wire(response: &v4::GetServiceConfigResponse) -> Option<ServiceConfig> {
        let token_program = Pubkey::try_from(response.token_program.as_slice()).ok()?;
        let token = Pubkey::try_from(response.token.as_slice()).ok()?;
        let subsidizer_account = response
            .subsidizer_account
            .as_ref()
            .and_then(|bytes| Pubkey::try_from(bytes.as_slice()).ok());
        Some(ServiceConfig {
            subsidizer_account,
            token_program,
            token,
        })
    }
}

#[async_trait]
impl TransactionGateway for AgoraGatewayV4 {
    async fn get_account(&self, request: GetAccountRequest) -> GetAccountResponse {
        match self
            .transport
            .get_account_info(marshal::v4_get_account_info(&request))
            .await
        {
            Ok(response) => {
                let result = classify::read_result(response.result == v4::AccountInfoResult::Ok);
                let account_info = if result == ReadResult::Ok {
                    response.account_info.map(marshal::account_info_from_v4)
                } else {
                    None
                };
                GetAccountResponse {
                    result,
                    error: None,
                    account_info,
                }
            }
            Err(error) => {
                warn!(error = %error, "get_account transport failure");
                GetAccountResponse {
                    result: classify::transport_failure(&error).into(),
                    error: Some(error.into()),
                    account_info: None,
                }
            }
        }
    }

    async fn create_account(&self, request: CreateAccountRequest) -> CreateAccountResponse {
        let wire = match marshal::v4_create_account(&request) {
            Some(wire) => wire,
            None => {
                return CreateAccountResponse {
                    result: CreateAccountResult::UndefinedError,
                    error: Some(GatewayError::InvalidRequest(
                        "V4 account creation requires a signed creation transaction".to_string(),
                    )),
                    account_info: None,
                };
            }
        };

        match self.transport.create_account(wire).await {
            Ok(response) => match response.result {
                v4::CreateAccountResult::Ok => CreateAccountResponse {
                    result: CreateAccountResult::Ok,
                    error: None,
                    account_info: response.account_info.map(marshal::account_info_from_v4),
                },
                v4::CreateAccountResult::Exists => CreateAccountResponse {
                    result: CreateAccountResult::Exists,
                    error: None,
                    account_info: None,
                },
                v4::CreateAccountResult::Unrecognized(code) => {
                    debug!(code, "create_account returned an unrecognized result");
                    CreateAccountResponse {
                        result: CreateAccountResult::UndefinedError,
                        error: None,
                        account_info: None,
                    }
                }
            },
            Err(error) => CreateAccountResponse {
                result: classify::transport_failure(&error).into(),
                error: Some(error.into()),
                account_info: None,
            },
        }
    }

    async fn get_transaction(&self, request: GetTransactionRequest) -> GetTransactionResponse {
        match self
            .transport
            .get_transaction(marshal::v4_get_transaction(&request))
            .await
        {
            Ok(response) => {
                let result =
                    classify::read_result(response.state == v4::TransactionState::Success);
                let transaction = if result == ReadResult::Ok {
                    response
                        .item
                        .as_ref()
                        .and_then(|item| marshal::v4_history_item_to_transaction(item, self.network))
                } else {
                    None
                };
                GetTransactionResponse {
                    result,
                    error: None,
                    transaction,
                }
            }
            Err(error) => GetTransactionResponse {
                result: classify::transport_failure(&error).into(),
                error: Some(error.into()),
                transaction: None,
            },
        }
    }

    async fn get_transaction_history(
        &self,
        request: GetTransactionHistoryRequest,
    ) -> GetTransactionHistoryResponse {
        match self
            .transport
            .get_history(marshal::v4_get_history(&request))
            .await
        {
            Ok(response) => {
                if response.result == v4::HistoryResult::Ok {
                    let transactions = response
                        .items
                        .iter()
                        .filter_map(|item| {
                            marshal::v4_history_item_to_transaction(item, self.network)
                        })
                        .collect();
                    GetTransactionHistoryResponse {
                        result: ReadResult::Ok,
                        error: None,
                        transactions: Some(transactions),
                    }
                } else {
                    GetTransactionHistoryResponse {
                        result: ReadResult::NotFound,
                        error: None,
                        transactions: None,
                    }
                }
            }
            Err(error) => GetTransactionHistoryResponse {
                result: classify::transport_failure(&error).into(),
                error: Some(error.into()),
                transactions: None,
            },
        }
    }

    #[instrument(skip(self, request))]
    async fn submit_transaction(
        &self,
        request: SubmitTransactionRequest,
    ) -> SubmitTransactionResponse {
        if let Err(error) = request.validate() {
            warn!(error = %error, "submit_transaction request rejected");
            return SubmitTransactionResponse {
                result: SubmitTransactionResult::UndefinedError,
                error: Some(GatewayError::InvalidRequest(error.to_string())),
                transaction: None,
            };
        }

        match self
            .transport
            .submit_transaction(marshal::v4_submit_transaction(&request))
            .await
        {
            Ok(response) => match response.result {
                // A duplicate submission is a success if the original's
                // signature can be recovered; the caller gets the same
                // shape as a fresh acknowledgement.
                v4::SubmitResult::Ok | v4::SubmitResult::AlreadySubmitted => {
                    match self
                        .committed_transaction(&request.transaction, response.signature.as_deref())
                    {
                        Some(transaction) => SubmitTransactionResponse {
                            result: SubmitTransactionResult::Ok,
                            error: None,
                            transaction: Some(transaction),
                        },
                        None => SubmitTransactionResponse {
                            result: SubmitTransactionResult::UndefinedError,
                            error: None,
                            transaction: None,
                        },
                    }
                }
                v4::SubmitResult::Failed => {
                    let blob = response
                        .transaction_error
                        .as_ref()
                        .map(|error| error.result_xdr.as_slice())
                        .filter(|blob| !blob.is_empty());
                    SubmitTransactionResponse {
                        result: classify::submit_failure(blob, self.decoder.as_ref()),
                        error: None,
                        transaction: None,
                    }
                }
                v4::SubmitResult::InvoiceError => {
                    let errors = project_invoice_errors(&response.invoice_errors);
                    SubmitTransactionResponse {
                        result: SubmitTransactionResult::InvoiceError,
                        error: Some(GatewayError::InvoiceErrors(errors)),
                        transaction: None,
                    }
                }
                v4::SubmitResult::Rejected => SubmitTransactionResponse {
                    result: SubmitTransactionResult::WebhookRejected,
                    error: None,
                    transaction: None,
                },
                v4::SubmitResult::Unrecognized(code) => {
                    debug!(code, "submit_transaction returned an unrecognized result");
                    SubmitTransactionResponse {
                        result: SubmitTransactionResult::UndefinedError,
                        error: None,
                        transaction: None,
                    }
                }
            },
            Err(error) => {
                warn!(error = %error, "submit_transaction transport failure");
                SubmitTransactionResponse {
                    result: classify::transport_failure(&error).into(),
                    error: Some(error.into()),
                    transaction: None,
                }
            }
        }
    }

    async fn get_transaction_min_fee(&self) -> GetMinFeeResponse {
        // V4 submissions are subsidized; there is no minimum fee.
        GetMinFeeResponse {
            result: ServiceResult::Ok,
            error: None,
            fee: Some(Quark(0)),
        }
    }

    fn whitelist_transaction(
        &self,
        request: WhitelistTransactionRequest,
    ) -> WhitelistTransactionResponse {
        // Whitelisting happens inside submit_transaction on the service
        // side; this is a pass-through.
        WhitelistTransactionResponse {
            result: ServiceResult::Ok,
            error: None,
            whitelisted_transaction_envelope: request.transaction_envelope,
        }
    }
}
