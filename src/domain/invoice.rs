//! Invoice model and the projection of wire invoice rejections.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::Quark;
use crate::wire::shared::{
    self, InvoiceErrorMessage, InvoiceMessage, LineItemMessage,
};

/// Violations of the invoice shape rules.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvoiceFormatError {
    #[error("An invoice must contain at least one line item")]
    EmptyInvoice,

    #[error("A line item title must not be blank")]
    BlankTitle,
}

/// A single billed item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineItem {
    title: String,
    description: String,
    amount: Quark,
    sku: Option<Vec<u8>>,
}

impl LineItem {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        amount: Quark,
        sku: Option<Vec<u8>>,
    ) -> Result<Self, InvoiceFormatError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(InvoiceFormatError::BlankTitle);
        }
        Ok(Self {
            title,
            description: description.into(),
            amount,
            sku,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Quark {
        self.amount
    }

    pub fn sku(&self) -> Option<&[u8]> {
        self.sku.as_deref()
    }
}

/// A billing record attached to one operation of a transaction.
///
/// Equality is structural; invoices built from the same line items
/// compare equal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Invoice {
    line_items: Vec<LineItem>,
}

impl Invoice {
    pub fn new(line_items: Vec<LineItem>) -> Result<Self, InvoiceFormatError> {
        if line_items.is_empty() {
            return Err(InvoiceFormatError::EmptyInvoice);
        }
        Ok(Self { line_items })
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    /// Build from a wire invoice, rejecting malformed payloads.
    pub(crate) fn from_wire(message: &InvoiceMessage) -> Option<Self> {
        let items = message
            .items
            .iter()
            .map(|item| {
                LineItem::new(
                    item.title.clone(),
                    item.description.clone(),
                    Quark(item.amount),
                    item.sku.clone(),
                )
                .ok()
            })
            .collect::<Option<Vec<_>>>()?;
        Self::new(items).ok()
    }

    pub(crate) fn to_wire(&self) -> InvoiceMessage {
        InvoiceMessage {
            items: self
                .line_items
                .iter()
                .map(|item| LineItemMessage {
                    title: item.title.clone(),
                    description: item.description.clone(),
                    amount: item.amount.0,
                    sku: item.sku.clone(),
                })
                .collect(),
        }
    }
}

/// Invoices for every operation of a transaction, in operation order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct InvoiceList {
    pub invoices: Vec<Invoice>,
}

/// Why the service rejected an invoice.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceErrorReason {
    Unknown,
    AlreadyPaid,
    WrongDestination,
    SkuNotFound,
}

impl InvoiceErrorReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => shared::REASON_UNKNOWN,
            Self::AlreadyPaid => shared::REASON_ALREADY_PAID,
            Self::WrongDestination => shared::REASON_WRONG_DESTINATION,
            Self::SkuNotFound => shared::REASON_SKU_NOT_FOUND,
        }
    }

    /// Decode a wire reason key; unrecognized keys become `Unknown`
    /// rather than failing, so future reasons degrade gracefully.
    pub fn from_wire(key: &str) -> Self {
        match key {
            shared::REASON_ALREADY_PAID => Self::AlreadyPaid,
            shared::REASON_WRONG_DESTINATION => Self::WrongDestination,
            shared::REASON_SKU_NOT_FOUND => Self::SkuNotFound,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for InvoiceErrorReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A per-operation invoice rejection, as handed to callers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InvoiceError {
    /// Index of the rejected operation within the transaction.
    pub operation_index: u32,
    pub invoice: Invoice,
    pub reason: InvoiceErrorReason,
}

/// Project wire invoice rejections into domain records.
///
/// Entries whose invoice payload is absent or malformed are dropped
/// silently; the surviving entries keep their operation indices. This is
/// a deliberate policy: one unreadable entry must not discard the rest
/// of the list.
pub fn project_invoice_errors(raw: &[InvoiceErrorMessage]) -> Vec<InvoiceError> {
    raw.iter()
        .filter_map(|entry| {
            let invoice = entry.invoice.as_ref().and_then(Invoice::from_wire)?;
            Some(InvoiceError {
                operation_index: entry.op_index,
                invoice,
                reason: InvoiceErrorReason::from_wire(&entry.reason),
            })
        })
        .collect()
}
