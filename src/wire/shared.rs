//! Invoice messages shared by the V3 and V4 wire schemas.
//!
//! The invoice schema did not change between protocol generations; V4
//! submission requests and responses reuse these messages unchanged.

/// A single billed item inside an invoice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItemMessage {
    pub title: String,
    pub description: String,
    /// Amount in quarks.
    pub amount: i64,
    pub sku: Option<Vec<u8>>,
}

/// An invoice attached to one operation of a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InvoiceMessage {
    pub items: Vec<LineItemMessage>,
}

/// Invoices for every operation of a transaction, in operation order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InvoiceListMessage {
    pub invoices: Vec<InvoiceMessage>,
}

/// Wire reason key: the invoice was rejected for an unspecified reason.
pub const REASON_UNKNOWN: &str = "unknown";
/// Wire reason key: the invoice has already been paid for.
pub const REASON_ALREADY_PAID: &str = "already_paid";
/// Wire reason key: the operation's destination does not match the invoice.
pub const REASON_WRONG_DESTINATION: &str = "wrong_destination";
/// Wire reason key: one or more SKUs in the invoice was not found.
pub const REASON_SKU_NOT_FOUND: &str = "sku_not_found";

/// A per-operation invoice rejection reported with a submission response.
///
/// The invoice payload is optional on the wire; entries arriving without a
/// well-formed invoice are dropped during projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceErrorMessage {
    /// Index of the rejected operation within the transaction.
    pub op_index: u32,
    pub invoice: Option<InvoiceMessage>,
    /// String-keyed rejection reason; unrecognized keys decode to unknown.
    pub reason: String,
}
