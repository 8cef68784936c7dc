//! Domain layer containing core business types, traits, and error
//! definitions.

pub mod error;
pub mod invoice;
pub mod ops;
pub mod outcome;
pub mod traits;
pub mod types;

pub use error::GatewayError;
pub use invoice::{
    Invoice, InvoiceError, InvoiceErrorReason, InvoiceFormatError, InvoiceList, LineItem,
    project_invoice_errors,
};
pub use ops::{
    CreateAccountRequest, CreateAccountResponse, GetAccountRequest, GetAccountResponse,
    GetMinBalanceForRentExemptionRequest, GetMinBalanceForRentExemptionResponse,
    GetMinFeeResponse, GetMinimumVersionResponse, GetRecentBlockhashResponse,
    GetServiceConfigResponse, GetTransactionHistoryRequest, GetTransactionHistoryResponse,
    GetTransactionRequest, GetTransactionResponse, ResolveTokenAccountsRequest,
    ResolveTokenAccountsResponse, SubmitTransactionRequest, SubmitTransactionResponse,
    WhitelistTransactionRequest, WhitelistTransactionResponse,
};
pub use outcome::{
    CreateAccountResult, FailureKind, ReadResult, ServiceResult, SubmitTransactionResult,
};
pub use traits::{AgoraTransportV3, AgoraTransportV4, TransactionGateway};
pub use types::{
    AccountInfo, KinAccountId, KinTransaction, NetworkEnvironment, QUARKS_PER_KIN, Quark,
    ServiceConfig, TransactionHash, TransactionOrder, TransactionRecord,
};
