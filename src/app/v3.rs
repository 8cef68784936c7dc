//! V3 (stellar-generation) gateway.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument, warn};
use validator::Validate;

use super::{classify, marshal};
use crate::domain::error::GatewayError;
use crate::domain::ops::{
    CreateAccountRequest, CreateAccountResponse, GetAccountRequest, GetAccountResponse,
    GetMinFeeResponse, GetTransactionHistoryRequest, GetTransactionHistoryResponse,
    GetTransactionRequest, GetTransactionResponse, SubmitTransactionRequest,
    SubmitTransactionResponse, WhitelistTransactionRequest, WhitelistTransactionResponse,
};
use crate::domain::outcome::{
    CreateAccountResult, ReadResult, ServiceResult, SubmitTransactionResult,
};
use crate::domain::project_invoice_errors;
use crate::domain::traits::{AgoraTransportV3, TransactionGateway};
use crate::domain::types::{KinTransaction, NetworkEnvironment, Quark};
use crate::wire::{ResultCodeDecoder, XdrResultCodeDecoder, v3};

/// Gateway speaking the V3 wire schema.
pub struct AgoraGatewayV3 {
    transport: Arc<dyn AgoraTransportV3>,
    decoder: Arc<dyn ResultCodeDecoder>,
    network: NetworkEnvironment,
}

impl AgoraGatewayV3 {
    #[must_use]
    pub fn new(transport: Arc<dyn AgoraTransportV3>, network: NetworkEnvironment) -> Self {
        Self::with_decoder(transport, Arc::new(XdrResultCodeDecoder), network)
    }

    #[must_use]
    pub fn with_decoder(
        transport: Arc<dyn AgoraTransportV3>,
        decoder: Arc<dyn ResultCodeDecoder>,
        network: NetworkEnvironment,
    ) -> Self {
        Self {
            transport,
            decoder,
            network,
        }
    }

    /// Reconstruct the acknowledged transaction from the submitted
    /// envelope and the response's result blob.
    fn acknowledged_transaction(
        &self,
        envelope: &[u8],
        result_xdr: &[u8],
    ) -> Option<KinTransaction> {
        KinTransaction::acknowledged(envelope.to_vec(), result_xdr.to_vec(), self.network)
    }
}

#[async_trait]
impl TransactionGateway for AgoraGatewayV3 {
    async fn get_account(&self, request: GetAccountRequest) -> GetAccountResponse {
        match self
            .transport
            .get_account_info(marshal::v3_get_account_info(&request))
            .await
        {
            Ok(response) => {
                let result = classify::read_result(response.result == v3::AccountInfoResult::Ok);
                let account_info = if result == ReadResult::Ok {
                    response.account_info.map(marshal::account_info_from_v3)
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
        match self
            .transport
            .create_account(marshal::v3_create_account(&request))
            .await
        {
            Ok(response) => match response.result {
                v3::CreateAccountResult::Ok => CreateAccountResponse {
                    result: CreateAccountResult::Ok,
                    error: None,
                    account_info: response.account_info.map(marshal::account_info_from_v3),
                },
                v3::CreateAccountResult::Exists => CreateAccountResponse {
                    result: CreateAccountResult::Exists,
                    error: None,
                    account_info: None,
                },
                v3::CreateAccountResult::Unrecognized(code) => {
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
            .get_transaction(marshal::v3_get_transaction(&request))
            .await
        {
            Ok(response) => {
                let result =
                    classify::read_result(response.state == v3::TransactionState::Success);
                let transaction = if result == ReadResult::Ok {
                    response
                        .item
                        .as_ref()
                        .and_then(|item| marshal::v3_history_item_to_transaction(item, self.network))
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
            .get_history(marshal::v3_get_history(&request))
            .await
        {
            Ok(response) => {
                if response.result == v3::HistoryResult::Ok {
                    // Malformed items are skipped, not fatal.
                    let transactions = response
                        .items
                        .iter()
                        .filter_map(|item| {
                            marshal::v3_history_item_to_transaction(item, self.network)
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
            .submit_transaction(marshal::v3_submit_transaction(&request))
            .await
        {
            Ok(response) => match response.result {
                v3::SubmitResult::Ok => {
                    match self.acknowledged_transaction(&request.transaction, &response.result_xdr)
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
                v3::SubmitResult::Failed => {
                    let blob = (!response.result_xdr.is_empty())
                        .then_some(response.result_xdr.as_slice());
                    SubmitTransactionResponse {
                        result: classify::submit_failure(blob, self.decoder.as_ref()),
                        error: None,
                        transaction: None,
                    }
                }
                v3::SubmitResult::InvoiceError => {
                    let errors = project_invoice_errors(&response.invoice_errors);
                    SubmitTransactionResponse {
                        result: SubmitTransactionResult::InvoiceError,
                        error: Some(GatewayError::InvoiceErrors(errors)),
                        transaction: None,
                    }
                }
                v3::SubmitResult::Rejected => SubmitTransactionResponse {
                    result: SubmitTransactionResult::WebhookRejected,
                    error: None,
                    transaction: None,
                },
                v3::SubmitResult::Unrecognized(code) => {
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
        // TODO: fetch this from the service once an rpc exists for it.
        GetMinFeeResponse {
            result: ServiceResult::Ok,
            error: None,
            fee: Some(Quark(100)),
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
