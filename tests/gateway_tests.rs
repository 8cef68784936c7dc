//! Gateway integration tests against mock transports.
//!
//! Covers outcome classification for both protocol generations,
//! transport-failure classification at every operation boundary, and
//! the V3/V4 parity of domain results for equivalent wire conditions.

use std::sync::Arc;

use agora_gateway::app::{AgoraGatewayV3, AgoraGatewayV4};
use agora_gateway::domain::{
    CreateAccountRequest, CreateAccountResult, GatewayError, GetAccountRequest,
    GetMinBalanceForRentExemptionRequest, GetTransactionHistoryRequest, GetTransactionRequest,
    InvoiceErrorReason, KinAccountId, NetworkEnvironment, Quark, ReadResult, ServiceResult,
    SubmitTransactionRequest, SubmitTransactionResult, TransactionGateway, TransactionHash,
    TransactionOrder, TransactionRecord, WhitelistTransactionRequest,
};
use agora_gateway::test_utils::{MockTransportV3, MockTransportV4};
use agora_gateway::wire::shared::{InvoiceErrorMessage, InvoiceMessage, LineItemMessage};
use agora_gateway::wire::xdr::encode_result_code;
use agora_gateway::wire::{TransportError, v3, v4};
use solana_sdk::transaction::Transaction;

fn account() -> KinAccountId {
    KinAccountId::new("GTESTACCOUNT", [5u8; 32])
}

fn gateway_v3(mock: MockTransportV3) -> AgoraGatewayV3 {
    AgoraGatewayV3::new(Arc::new(mock), NetworkEnvironment::TestNet)
}

fn gateway_v4(mock: MockTransportV4) -> AgoraGatewayV4 {
    AgoraGatewayV4::new(Arc::new(mock), NetworkEnvironment::TestNet)
}

fn solana_transaction_bytes() -> Vec<u8> {
    bincode::serialize(&Transaction::default()).unwrap()
}

fn wire_invoice(title: &str) -> InvoiceMessage {
    InvoiceMessage {
        items: vec![LineItemMessage {
            title: title.to_string(),
            description: String::new(),
            amount: 1_000,
            sku: None,
        }],
    }
}

// ============================================================================
// TRANSPORT FAILURE CLASSIFICATION
// ============================================================================

mod transport_failure_tests {
    use super::*;

    #[tokio::test]
    async fn test_retryable_errors_classify_transient_on_every_operation() {
        for error in [
            TransportError::Unavailable("down".to_string()),
            TransportError::Timeout("deadline".to_string()),
            TransportError::RateLimited("backoff".to_string()),
        ] {
            let gateway = gateway_v3(MockTransportV3::failing(error.clone()));
            let submit = gateway
                .submit_transaction(SubmitTransactionRequest {
                    transaction: vec![1],
                    invoice_list: None,
                })
                .await;
            assert_eq!(submit.result, SubmitTransactionResult::TransientFailure);
            assert!(matches!(submit.error, Some(GatewayError::Transport(_))));

            let history = gateway
                .get_transaction_history(GetTransactionHistoryRequest {
                    account: account(),
                    cursor: None,
                    order: TransactionOrder::Descending,
                })
                .await;
            assert_eq!(history.result, ReadResult::TransientFailure);
            assert!(history.transactions.is_none());
        }
    }

    #[tokio::test]
    async fn test_forced_upgrade_classifies_upgrade_required() {
        let error = TransportError::UpgradeRequired("v4 required".to_string());

        let v3_gateway = gateway_v3(MockTransportV3::failing(error.clone()));
        let response = v3_gateway
            .get_transaction(GetTransactionRequest {
                transaction_hash: TransactionHash(vec![1; 32]),
            })
            .await;
        assert_eq!(response.result, ReadResult::UpgradeRequired);

        let v4_gateway = gateway_v4(MockTransportV4::failing(error));
        let response = v4_gateway
            .submit_transaction(SubmitTransactionRequest {
                transaction: solana_transaction_bytes(),
                invoice_list: None,
            })
            .await;
        assert_eq!(response.result, SubmitTransactionResult::UpgradeRequired);
    }

    #[tokio::test]
    async fn test_unclassified_errors_are_undefined() {
        let error = TransportError::Status {
            code: 13,
            message: "internal".to_string(),
        };

        let gateway = gateway_v4(MockTransportV4::failing(error));
        let response = gateway.get_service_config().await;
        assert_eq!(response.result, ServiceResult::UndefinedError);
        assert!(response.config.is_none());

        let response = gateway
            .get_account(GetAccountRequest { account: account() })
            .await;
        assert_eq!(response.result, ReadResult::UndefinedError);
    }
}

// ============================================================================
// V3 SUBMISSION
// ============================================================================

mod submit_v3_tests {
    use super::*;

    fn submit_response(result: v3::SubmitResult) -> v3::SubmitTransactionResponse {
        v3::SubmitTransactionResponse {
            result,
            hash: None,
            result_xdr: vec![],
            invoice_errors: vec![],
        }
    }

    #[tokio::test]
    async fn test_ok_returns_acknowledged_transaction() {
        let gateway = gateway_v3(
            MockTransportV3::new().with_submit(submit_response(v3::SubmitResult::Ok)),
        );
        let response = gateway
            .submit_transaction(SubmitTransactionRequest {
                transaction: vec![10, 20, 30],
                invoice_list: None,
            })
            .await;

        assert_eq!(response.result, SubmitTransactionResult::Ok);
        let transaction = response.transaction.unwrap();
        assert_eq!(transaction.envelope(), &[10, 20, 30]);
        assert!(matches!(
            transaction.record(),
            TransactionRecord::Acknowledged { .. }
        ));
    }

    #[tokio::test]
    async fn test_failed_with_bad_seq_blob() {
        let mut wire = submit_response(v3::SubmitResult::Failed);
        wire.result_xdr = encode_result_code(-5);
        let gateway = gateway_v3(MockTransportV3::new().with_submit(wire));

        let response = gateway
            .submit_transaction(SubmitTransactionRequest {
                transaction: vec![1],
                invoice_list: None,
            })
            .await;
        assert_eq!(response.result, SubmitTransactionResult::BadSequenceNumber);
    }

    #[tokio::test]
    async fn test_failed_with_undecodable_blob_is_transient() {
        let mut wire = submit_response(v3::SubmitResult::Failed);
        wire.result_xdr = vec![1, 2, 3];
        let gateway = gateway_v3(MockTransportV3::new().with_submit(wire));

        let response = gateway
            .submit_transaction(SubmitTransactionRequest {
                transaction: vec![1],
                invoice_list: None,
            })
            .await;
        assert_eq!(response.result, SubmitTransactionResult::TransientFailure);
    }

    #[tokio::test]
    async fn test_failed_with_absent_blob_is_transient() {
        let gateway = gateway_v3(
            MockTransportV3::new().with_submit(submit_response(v3::SubmitResult::Failed)),
        );

        let response = gateway
            .submit_transaction(SubmitTransactionRequest {
                transaction: vec![1],
                invoice_list: None,
            })
            .await;
        assert_eq!(response.result, SubmitTransactionResult::TransientFailure);
    }

    #[tokio::test]
    async fn test_rejected_is_webhook_rejected() {
        let gateway = gateway_v3(
            MockTransportV3::new().with_submit(submit_response(v3::SubmitResult::Rejected)),
        );

        let response = gateway
            .submit_transaction(SubmitTransactionRequest {
                transaction: vec![1],
                invoice_list: None,
            })
            .await;
        assert_eq!(response.result, SubmitTransactionResult::WebhookRejected);
        assert!(response.error.is_none());
    }

    #[tokio::test]
    async fn test_unrecognized_discriminant_is_undefined() {
        let gateway = gateway_v3(
            MockTransportV3::new().with_submit(submit_response(v3::SubmitResult::Unrecognized(9))),
        );

        let response = gateway
            .submit_transaction(SubmitTransactionRequest {
                transaction: vec![1],
                invoice_list: None,
            })
            .await;
        assert_eq!(response.result, SubmitTransactionResult::UndefinedError);
    }

    #[tokio::test]
    async fn test_invoice_errors_project_and_skip_malformed() {
        let mut wire = submit_response(v3::SubmitResult::InvoiceError);
        wire.invoice_errors = vec![
            InvoiceErrorMessage {
                op_index: 0,
                invoice: Some(wire_invoice("First")),
                reason: "already_paid".to_string(),
            },
            InvoiceErrorMessage {
                op_index: 1,
                invoice: None,
                reason: "sku_not_found".to_string(),
            },
            InvoiceErrorMessage {
                op_index: 2,
                invoice: Some(wire_invoice("Third")),
                reason: "something_new".to_string(),
            },
        ];
        let gateway = gateway_v3(MockTransportV3::new().with_submit(wire));

        let response = gateway
            .submit_transaction(SubmitTransactionRequest {
                transaction: vec![1],
                invoice_list: None,
            })
            .await;

        assert_eq!(response.result, SubmitTransactionResult::InvoiceError);
        match response.error {
            Some(GatewayError::InvoiceErrors(errors)) => {
                assert_eq!(errors.len(), 2);
                assert_eq!(errors[0].operation_index, 0);
                assert_eq!(errors[0].reason, InvoiceErrorReason::AlreadyPaid);
                assert_eq!(errors[1].operation_index, 2);
                assert_eq!(errors[1].reason, InvoiceErrorReason::Unknown);
            }
            other => panic!("expected invoice errors, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_transaction_is_rejected_before_transport() {
        let gateway = gateway_v3(MockTransportV3::failing(TransportError::Unavailable(
            "must not be reached".to_string(),
        )));

        let response = gateway
            .submit_transaction(SubmitTransactionRequest {
                transaction: vec![],
                invoice_list: None,
            })
            .await;
        assert_eq!(response.result, SubmitTransactionResult::UndefinedError);
        assert!(matches!(
            response.error,
            Some(GatewayError::InvalidRequest(_))
        ));
    }
}

// ============================================================================
// V4 SUBMISSION
// ============================================================================

mod submit_v4_tests {
    use super::*;

    fn submit_response(result: v4::SubmitResult) -> v4::SubmitTransactionResponse {
        v4::SubmitTransactionResponse {
            result,
            signature: None,
            transaction_error: None,
            invoice_errors: vec![],
        }
    }

    #[tokio::test]
    async fn test_already_submitted_with_signature_matches_fresh_ok() {
        let request = || SubmitTransactionRequest {
            transaction: solana_transaction_bytes(),
            invoice_list: None,
        };
        let signature = vec![7u8; 64];

        let mut fresh = submit_response(v4::SubmitResult::Ok);
        fresh.signature = Some(signature.clone());
        let fresh_response = gateway_v4(MockTransportV4::new().with_submit(fresh))
            .submit_transaction(request())
            .await;

        let mut duplicate = submit_response(v4::SubmitResult::AlreadySubmitted);
        duplicate.signature = Some(signature);
        let duplicate_response = gateway_v4(MockTransportV4::new().with_submit(duplicate))
            .submit_transaction(request())
            .await;

        assert_eq!(fresh_response.result, SubmitTransactionResult::Ok);
        assert_eq!(duplicate_response.result, SubmitTransactionResult::Ok);

        let fresh_tx = fresh_response.transaction.unwrap();
        let duplicate_tx = duplicate_response.transaction.unwrap();
        assert_eq!(fresh_tx.envelope(), duplicate_tx.envelope());
        assert!(matches!(
            duplicate_tx.record(),
            TransactionRecord::Acknowledged { .. }
        ));
    }

    #[tokio::test]
    async fn test_already_submitted_without_signature_degrades_to_undefined() {
        let gateway = gateway_v4(
            MockTransportV4::new()
                .with_submit(submit_response(v4::SubmitResult::AlreadySubmitted)),
        );

        let response = gateway
            .submit_transaction(SubmitTransactionRequest {
                transaction: solana_transaction_bytes(),
                invoice_list: None,
            })
            .await;
        assert_eq!(response.result, SubmitTransactionResult::UndefinedError);
        assert!(response.transaction.is_none());
    }

    #[tokio::test]
    async fn test_ok_with_malformed_signature_degrades_to_undefined() {
        let mut wire = submit_response(v4::SubmitResult::Ok);
        wire.signature = Some(vec![1, 2, 3]);
        let gateway = gateway_v4(MockTransportV4::new().with_submit(wire));

        let response = gateway
            .submit_transaction(SubmitTransactionRequest {
                transaction: solana_transaction_bytes(),
                invoice_list: None,
            })
            .await;
        assert_eq!(response.result, SubmitTransactionResult::UndefinedError);
    }

    #[tokio::test]
    async fn test_ok_with_unreconstructable_transaction_degrades_to_undefined() {
        let mut wire = submit_response(v4::SubmitResult::Ok);
        wire.signature = Some(vec![7u8; 64]);
        let gateway = gateway_v4(MockTransportV4::new().with_submit(wire));

        // Valid signature, but the submitted payload is not a solana
        // transaction, so the splice step fails.
        let response = gateway
            .submit_transaction(SubmitTransactionRequest {
                transaction: vec![0xde, 0xad],
                invoice_list: None,
            })
            .await;
        assert_eq!(response.result, SubmitTransactionResult::UndefinedError);
    }

    #[tokio::test]
    async fn test_failed_with_nested_bad_seq_blob() {
        let mut wire = submit_response(v4::SubmitResult::Failed);
        wire.transaction_error = Some(v4::TransactionErrorMessage {
            result_xdr: encode_result_code(-5),
        });
        let gateway = gateway_v4(MockTransportV4::new().with_submit(wire));

        let response = gateway
            .submit_transaction(SubmitTransactionRequest {
                transaction: solana_transaction_bytes(),
                invoice_list: None,
            })
            .await;
        assert_eq!(response.result, SubmitTransactionResult::BadSequenceNumber);
    }

    #[tokio::test]
    async fn test_failed_without_transaction_error_is_transient() {
        let gateway = gateway_v4(
            MockTransportV4::new().with_submit(submit_response(v4::SubmitResult::Failed)),
        );

        let response = gateway
            .submit_transaction(SubmitTransactionRequest {
                transaction: solana_transaction_bytes(),
                invoice_list: None,
            })
            .await;
        assert_eq!(response.result, SubmitTransactionResult::TransientFailure);
    }

    #[tokio::test]
    async fn test_insufficient_balance_parity_with_v3() {
        let blob = encode_result_code(-7);

        let v3_wire = v3::SubmitTransactionResponse {
            result: v3::SubmitResult::Failed,
            hash: None,
            result_xdr: blob.clone(),
            invoice_errors: vec![],
        };
        let v3_response = gateway_v3(MockTransportV3::new().with_submit(v3_wire))
            .submit_transaction(SubmitTransactionRequest {
                transaction: vec![1],
                invoice_list: None,
            })
            .await;

        let mut v4_wire = submit_response(v4::SubmitResult::Failed);
        v4_wire.transaction_error = Some(v4::TransactionErrorMessage { result_xdr: blob });
        let v4_response = gateway_v4(MockTransportV4::new().with_submit(v4_wire))
            .submit_transaction(SubmitTransactionRequest {
                transaction: solana_transaction_bytes(),
                invoice_list: None,
            })
            .await;

        assert_eq!(
            v3_response.result,
            SubmitTransactionResult::InsufficientBalance
        );
        assert_eq!(v3_response.result, v4_response.result);
    }
}

// ============================================================================
// READ OPERATIONS AND V3/V4 PARITY
// ============================================================================

mod read_parity_tests {
    use super::*;

    fn history_request(cursor: Option<String>) -> GetTransactionHistoryRequest {
        GetTransactionHistoryRequest {
            account: account(),
            cursor,
            order: TransactionOrder::Descending,
        }
    }

    #[tokio::test]
    async fn test_history_parity_on_equivalent_data() {
        let v3_mock = MockTransportV3::new().with_history(v3::GetHistoryResponse {
            result: v3::HistoryResult::Ok,
            items: vec![v3::HistoryItem {
                hash: vec![1; 32],
                envelope_xdr: vec![42],
                result_xdr: vec![],
                cursor: Some(b"cursor-1".to_vec()),
            }],
        });
        let v4_mock = MockTransportV4::new().with_history(v4::GetHistoryResponse {
            result: v4::HistoryResult::Ok,
            items: vec![v4::HistoryItem {
                transaction_id: vec![1; 64],
                transaction: vec![42],
                transaction_error: None,
                cursor: Some(vec![0, 1]),
            }],
        });

        let v3_response = gateway_v3(v3_mock)
            .get_transaction_history(history_request(Some("cursor-0".to_string())))
            .await;
        let v4_response = gateway_v4(v4_mock)
            .get_transaction_history(history_request(Some("AAE=".to_string())))
            .await;

        assert_eq!(v3_response.result, ReadResult::Ok);
        assert_eq!(v3_response.result, v4_response.result);
        assert_eq!(v3_response.transactions.unwrap().len(), 1);
        assert_eq!(v4_response.transactions.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_history_not_found_parity() {
        let v3_mock = MockTransportV3::new().with_history(v3::GetHistoryResponse {
            result: v3::HistoryResult::NotFound,
            items: vec![],
        });
        let v4_mock = MockTransportV4::new().with_history(v4::GetHistoryResponse {
            result: v4::HistoryResult::NotFound,
            items: vec![],
        });

        let v3_response = gateway_v3(v3_mock)
            .get_transaction_history(history_request(None))
            .await;
        let v4_response = gateway_v4(v4_mock)
            .get_transaction_history(history_request(None))
            .await;

        assert_eq!(v3_response.result, ReadResult::NotFound);
        assert_eq!(v3_response.result, v4_response.result);
        assert!(v3_response.transactions.is_none());
        assert!(v4_response.transactions.is_none());
    }

    #[tokio::test]
    async fn test_empty_history_is_ok_not_not_found() {
        let gateway = gateway_v3(MockTransportV3::new().with_history(v3::GetHistoryResponse {
            result: v3::HistoryResult::Ok,
            items: vec![],
        }));

        let response = gateway.get_transaction_history(history_request(None)).await;
        assert_eq!(response.result, ReadResult::Ok);
        assert_eq!(response.transactions, Some(vec![]));
    }

    #[tokio::test]
    async fn test_get_transaction_success_without_item_is_ok() {
        let gateway = gateway_v4(MockTransportV4::new().with_transaction(
            v4::GetTransactionResponse {
                state: v4::TransactionState::Success,
                item: None,
            },
        ));

        let response = gateway
            .get_transaction(GetTransactionRequest {
                transaction_hash: TransactionHash(vec![1; 64]),
            })
            .await;
        assert_eq!(response.result, ReadResult::Ok);
        assert!(response.transaction.is_none());
    }

    #[tokio::test]
    async fn test_get_transaction_non_success_states_collapse_to_not_found() {
        for state in [
            v4::TransactionState::Unknown,
            v4::TransactionState::Failed,
            v4::TransactionState::Pending,
            v4::TransactionState::Unrecognized(9),
        ] {
            let gateway = gateway_v4(MockTransportV4::new().with_transaction(
                v4::GetTransactionResponse { state, item: None },
            ));
            let response = gateway
                .get_transaction(GetTransactionRequest {
                    transaction_hash: TransactionHash(vec![1; 64]),
                })
                .await;
            assert_eq!(response.result, ReadResult::NotFound);
        }
    }

    #[tokio::test]
    async fn test_get_account_parity() {
        let v3_mock = MockTransportV3::new().with_account(v3::GetAccountInfoResponse {
            result: v3::AccountInfoResult::Ok,
            account_info: Some(v3::AccountInfoMessage {
                account_id: "GTESTACCOUNT".to_string(),
                sequence_number: 12,
                balance: 500_000,
            }),
        });
        let v4_mock = MockTransportV4::new().with_account(v4::GetAccountInfoResponse {
            result: v4::AccountInfoResult::Ok,
            account_info: Some(v4::AccountInfoMessage {
                account_id: vec![5u8; 32],
                balance: 500_000,
            }),
        });

        let v3_response = gateway_v3(v3_mock)
            .get_account(GetAccountRequest { account: account() })
            .await;
        let v4_response = gateway_v4(v4_mock)
            .get_account(GetAccountRequest { account: account() })
            .await;

        assert_eq!(v3_response.result, ReadResult::Ok);
        assert_eq!(v3_response.result, v4_response.result);

        let v3_info = v3_response.account_info.unwrap();
        let v4_info = v4_response.account_info.unwrap();
        assert_eq!(v3_info.balance, v4_info.balance);
        assert_eq!(v3_info.sequence_number, Some(12));
        assert_eq!(v4_info.sequence_number, None);
    }

    #[tokio::test]
    async fn test_malformed_history_items_are_skipped() {
        let gateway = gateway_v3(MockTransportV3::new().with_history(v3::GetHistoryResponse {
            result: v3::HistoryResult::Ok,
            items: vec![
                v3::HistoryItem {
                    hash: vec![1],
                    envelope_xdr: vec![42],
                    result_xdr: vec![],
                    cursor: None,
                },
                // Empty envelope: malformed.
                v3::HistoryItem {
                    hash: vec![2],
                    envelope_xdr: vec![],
                    result_xdr: vec![],
                    cursor: None,
                },
            ],
        }));

        let response = gateway.get_transaction_history(history_request(None)).await;
        assert_eq!(response.result, ReadResult::Ok);
        assert_eq!(response.transactions.unwrap().len(), 1);
    }
}

// ============================================================================
// ACCOUNT CREATION
// ============================================================================

mod create_account_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_exists_parity() {
        let v3_mock = MockTransportV3::new().with_create(v3::CreateAccountResponse {
            result: v3::CreateAccountResult::Exists,
            account_info: None,
        });
        let v4_mock = MockTransportV4::new().with_create(v4::CreateAccountResponse {
            result: v4::CreateAccountResult::Exists,
            account_info: None,
        });

        let v3_response = gateway_v3(v3_mock)
            .create_account(CreateAccountRequest {
                account: account(),
                creation_transaction: None,
            })
            .await;
        let v4_response = gateway_v4(v4_mock)
            .create_account(CreateAccountRequest {
                account: account(),
                creation_transaction: Some(solana_transaction_bytes()),
            })
            .await;

        assert_eq!(v3_response.result, CreateAccountResult::Exists);
        assert_eq!(v3_response.result, v4_response.result);
    }

    #[tokio::test]
    async fn test_v4_create_requires_creation_transaction() {
        let gateway = gateway_v4(MockTransportV4::new());

        let response = gateway
            .create_account(CreateAccountRequest {
                account: account(),
                creation_transaction: None,
            })
            .await;
        assert_eq!(response.result, CreateAccountResult::UndefinedError);
        assert!(matches!(
            response.error,
            Some(GatewayError::InvalidRequest(_))
        ));
    }
}

// ============================================================================
// WHITELISTING AND MIN FEE
// ============================================================================

mod whitelist_tests {
    use super::*;

    #[tokio::test]
    async fn test_whitelist_is_a_pass_through() {
        let gateway = gateway_v3(MockTransportV3::new());
        let envelope = vec![9, 8, 7, 6];

        let first = gateway.whitelist_transaction(WhitelistTransactionRequest {
            transaction_envelope: envelope.clone(),
        });
        assert_eq!(first.result, ServiceResult::Ok);
        assert!(first.error.is_none());
        assert_eq!(first.whitelisted_transaction_envelope, envelope);

        // Idempotent: whitelisting the whitelisted envelope changes nothing.
        let second = gateway.whitelist_transaction(WhitelistTransactionRequest {
            transaction_envelope: first.whitelisted_transaction_envelope,
        });
        assert_eq!(second.whitelisted_transaction_envelope, envelope);
        assert!(gateway.is_whitelisting_available());
    }

    #[tokio::test]
    async fn test_whitelist_passes_arbitrary_input_unchanged() {
        let gateway = gateway_v4(MockTransportV4::new());
        let response = gateway.whitelist_transaction(WhitelistTransactionRequest {
            transaction_envelope: vec![],
        });
        assert_eq!(response.result, ServiceResult::Ok);
        assert!(response.whitelisted_transaction_envelope.is_empty());
    }

    #[tokio::test]
    async fn test_min_fee_per_generation() {
        let v3_response = gateway_v3(MockTransportV3::new())
            .get_transaction_min_fee()
            .await;
        assert_eq!(v3_response.result, ServiceResult::Ok);
        assert_eq!(v3_response.fee, Some(Quark(100)));

        let v4_response = gateway_v4(MockTransportV4::new())
            .get_transaction_min_fee()
            .await;
        assert_eq!(v4_response.result, ServiceResult::Ok);
        assert_eq!(v4_response.fee, Some(Quark(0)));
    }
}

// ============================================================================
// V4 INFRASTRUCTURE OPERATIONS
// ============================================================================

mod v4_infra_tests {
    use super::*;

    #[tokio::test]
    async fn test_service_config_decodes_keys() {
        let gateway = gateway_v4(MockTransportV4::new().with_service_config(
            v4::GetServiceConfigResponse {
                subsidizer_account: Some(vec![1u8; 32]),
                token_program: vec![2u8; 32],
                token: vec![3u8; 32],
            },
        ));

        let response = gateway.get_service_config().await;
        assert_eq!(response.result, ServiceResult::Ok);
        let config = response.config.unwrap();
        assert!(config.subsidizer_account.is_some());
        assert_eq!(config.token.to_bytes(), [3u8; 32]);
    }

    #[tokio::test]
    async fn test_service_config_with_malformed_key_is_undefined() {
        let gateway = gateway_v4(MockTransportV4::new().with_service_config(
            v4::GetServiceConfigResponse {
                subsidizer_account: None,
                token_program: vec![2u8; 5],
                token: vec![3u8; 32],
            },
        ));

        let response = gateway.get_service_config().await;
        assert_eq!(response.result, ServiceResult::UndefinedError);
        assert!(response.config.is_none());
    }

    #[tokio::test]
    async fn test_recent_blockhash() {
        let gateway = gateway_v4(MockTransportV4::new().with_blockhash(
            v4::GetRecentBlockhashResponse {
                blockhash: vec![7u8; 32],
            },
        ));
        let response = gateway.get_recent_blockhash().await;
        assert_eq!(response.result, ServiceResult::Ok);
        assert_eq!(response.blockhash.unwrap().to_bytes(), [7u8; 32]);

        let gateway = gateway_v4(MockTransportV4::new().with_blockhash(
            v4::GetRecentBlockhashResponse {
                blockhash: vec![7u8; 3],
            },
        ));
        let response = gateway.get_recent_blockhash().await;
        assert_eq!(response.result, ServiceResult::UndefinedError);
        assert!(response.blockhash.is_none());
    }

    #[tokio::test]
    async fn test_rent_exemption_and_minimum_version() {
        let gateway = gateway_v4(
            MockTransportV4::new()
                .with_rent_exemption(v4::GetMinimumBalanceForRentExemptionResponse {
                    lamports: 2_039_280,
                })
                .with_minimum_version(v4::GetMinimumKinVersionResponse { version: 4 }),
        );

        let rent = gateway
            .get_minimum_balance_for_rent_exemption(GetMinBalanceForRentExemptionRequest {
                size: 165,
            })
            .await;
        assert_eq!(rent.result, ServiceResult::Ok);
        assert_eq!(rent.lamports, Some(2_039_280));

        let version = gateway.get_minimum_kin_version().await;
        assert_eq!(version.result, ServiceResult::Ok);
        assert_eq!(version.version, Some(4));
    }

    #[tokio::test]
    async fn test_resolve_token_accounts_skips_malformed_keys() {
        let gateway = gateway_v4(MockTransportV4::new().with_resolve(
            v4::ResolveTokenAccountsResponse {
                token_accounts: vec![vec![1u8; 32], vec![2u8; 5], vec![3u8; 32]],
            },
        ));

        let response = gateway
            .resolve_token_accounts(agora_gateway::domain::ResolveTokenAccountsRequest {
                account: account(),
            })
            .await;
        assert_eq!(response.result, ServiceResult::Ok);
        assert_eq!(response.token_accounts.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_minimum_version_transport_failure_is_classified() {
        let gateway = gateway_v4(MockTransportV4::failing(TransportError::Timeout(
            "deadline".to_string(),
        )));
        let response = gateway.get_minimum_kin_version().await;
        assert_eq!(response.result, ServiceResult::TransientFailure);
        assert!(response.version.is_none());
    }
}
