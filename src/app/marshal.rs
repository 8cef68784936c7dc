//! Version-specific marshalling between domain and wire types.
//!
//! The encoding differences between the two generations live here:
//! V3 addresses accounts by ledger-native string and carries history
//! cursors as raw bytes; V4 addresses accounts by public key, carries
//! cursors base64-encoded, and stamps a commitment on each request.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;

use crate::domain::invoice::InvoiceList;
use crate::domain::ops::{
    CreateAccountRequest, GetAccountRequest, GetTransactionHistoryRequest, GetTransactionRequest,
    ResolveTokenAccountsRequest, SubmitTransactionRequest,
};
use crate::domain::types::{AccountInfo, KinTransaction, NetworkEnvironment, Quark, TransactionOrder};
use crate::wire::shared::InvoiceListMessage;
use crate::wire::{v3, v4};

// ---------------------------------------------------------------------------
// Domain -> wire
// ---------------------------------------------------------------------------

pub(crate) fn v3_get_account_info(request: &GetAccountRequest) -> v3::GetAccountInfoRequest {
    v3::GetAccountInfoRequest {
        account_id: request.account.address().to_string(),
    }
}

pub(crate) fn v4_get_account_info(request: &GetAccountRequest) -> v4::GetAccountInfoRequest {
    v4::GetAccountInfoRequest {
        account_id: request.account.public_key().to_vec(),
        commitment: v4::Commitment::Single,
    }
}

pub(crate) fn v3_create_account(request: &CreateAccountRequest) -> v3::CreateAccountRequest {
    v3::CreateAccountRequest {
        account_id: request.account.address().to_string(),
    }
}

/// V4 account creation needs the signed creation transaction; there is
/// no wire request to build without it.
pub(crate) fn v4_create_account(
    request: &CreateAccountRequest,
) -> Option<v4::CreateAccountRequest> {
    let transaction = request.creation_transaction.clone()?;
    Some(v4::CreateAccountRequest {
        transaction,
        commitment: v4::Commitment::Single,
    })
}

pub(crate) fn v3_get_transaction(request: &GetTransactionRequest) -> v3::GetTransactionRequest {
    v3::GetTransactionRequest {
        transaction_hash: request.transaction_hash.0.clone(),
    }
}

pub(crate) fn v4_get_transaction(request: &GetTransactionRequest) -> v4::GetTransactionRequest {
    v4::GetTransactionRequest {
        transaction_id: request.transaction_hash.0.clone(),
        commitment: v4::Commitment::Single,
    }
}

pub(crate) fn v3_get_history(request: &GetTransactionHistoryRequest) -> v3::GetHistoryRequest {
    v3::GetHistoryRequest {
        account_id: request.account.address().to_string(),
        cursor: request
            .cursor
            .as_ref()
            .map(|cursor| cursor.as_bytes().to_vec()),
        direction: match request.order {
            TransactionOrder::Ascending => v3::Direction::Asc,
            TransactionOrder::Descending => v3::Direction::Desc,
        },
    }
}

pub(crate) fn v4_get_history(request: &GetTransactionHistoryRequest) -> v4::GetHistoryRequest {
    // A cursor that does not decode is omitted rather than sent mangled;
    // the service then pages from the start.
    let cursor = request
        .cursor
        .as_ref()
        .and_then(|cursor| BASE64.decode(cursor).ok());
    v4::GetHistoryRequest {
        account_id: request.account.public_key().to_vec(),
        cursor,
        direction: match request.order {
            TransactionOrder::Ascending => v4::Direction::Asc,
            TransactionOrder::Descending => v4::Direction::Desc,
        },
    }
}

pub(crate) fn v3_submit_transaction(
    request: &SubmitTransactionRequest,
) -> v3::SubmitTransactionRequest {
    v3::SubmitTransactionRequest {
        envelope_xdr: request.transaction.clone(),
        invoice_list: request.invoice_list.as_ref().map(invoice_list_to_wire),
    }
}

pub(crate) fn v4_submit_transaction(
    request: &SubmitTransactionRequest,
) -> v4::SubmitTransactionRequest {
    v4::SubmitTransactionRequest {
        transaction: request.transaction.clone(),
        invoice_list: request.invoice_list.as_ref().map(invoice_list_to_wire),
        commitment: v4::Commitment::Recent,
    }
}

pub(crate) fn v4_resolve_token_accounts(
    request: &ResolveTokenAccountsRequest,
) -> v4::ResolveTokenAccountsRequest {
    v4::ResolveTokenAccountsRequest {
        account_id: request.account.public_key().to_vec(),
    }
}

pub(crate) fn invoice_list_to_wire(list: &InvoiceList) -> InvoiceListMessage {
    InvoiceListMessage {
        invoices: list.invoices.iter().map(|invoice| invoice.to_wire()).collect(),
    }
}

// ---------------------------------------------------------------------------
// Wire -> domain
// ---------------------------------------------------------------------------

pub(crate) fn account_info_from_v3(message: v3::AccountInfoMessage) -> AccountInfo {
    AccountInfo {
        address: message.account_id,
        balance: Quark(message.balance),
        sequence_number: Some(message.sequence_number),
    }
}

pub(crate) fn account_info_from_v4(message: v4::AccountInfoMessage) -> AccountInfo {
    AccountInfo {
        address: bs58::encode(&message.account_id).into_string(),
        balance: Quark(message.balance),
        sequence_number: None,
    }
}

/// Rebuild one V3 history item as a historical transaction. Items with
/// an empty envelope or a cursor that is not valid UTF-8 are malformed
/// and yield `None`; history assembly skips them.
pub(crate) fn v3_history_item_to_transaction(
    item: &v3::HistoryItem,
    network: NetworkEnvironment,
) -> Option<KinTransaction> {
    let paging_token = match &item.cursor {
        Some(cursor) => String::from_utf8(cursor.clone()).ok()?,
        None => String::new(),
    };
    KinTransaction::historical(
        item.envelope_xdr.clone(),
        item.result_xdr.clone(),
        paging_token,
        network,
    )
}

/// Rebuild one V4 history item as a historical transaction.
pub(crate) fn v4_history_item_to_transaction(
    item: &v4::HistoryItem,
    network: NetworkEnvironment,
) -> Option<KinTransaction> {
    let paging_token = item
        .cursor
        .as_ref()
        .map(|cursor| BASE64.encode(cursor))
        .unwrap_or_default();
    let result_xdr = item
        .transaction_error
        .as_ref()
        .map(|error| error.result_xdr.clone())
        .unwrap_or_default();
    KinTransaction::historical(item.transaction.clone(), result_xdr, paging_token, network)
}

/// Splice the service-assigned signature into the submitted solana
/// transaction and re-serialize it. Any step failing means the envelope
/// cannot be reconstructed.
pub(crate) fn splice_signature(transaction: &[u8], signature: Signature) -> Option<Vec<u8>> {
    let mut decoded: Transaction = bincode::deserialize(transaction).ok()?;
    if decoded.signatures.is_empty() {
        decoded.signatures.push(signature);
    } else {
        decoded.signatures[0] = signature;
    }
    bincode::serialize(&decoded).ok()
}
