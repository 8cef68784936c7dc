//! Lenient decoding of the embedded transaction-result blob.
//!
//! Failed submissions carry a binary result payload (flat on the V3
//! response, nested inside the transaction error for V4). Only the
//! top-level result code matters to classification; everything else in
//! the blob is ignored. A blob that cannot be decoded means "code
//! absent", never a hard error.

const TX_BAD_SEQ: i32 = -5;
const TX_INSUFFICIENT_BALANCE: i32 = -7;
const TX_NO_ACCOUNT: i32 = -8;
const TX_INSUFFICIENT_FEE: i32 = -9;

/// Byte offset of the result code: the blob leads with the 8-byte
/// fee-charged field, the big-endian code follows.
const RESULT_CODE_OFFSET: usize = 8;

/// Transaction-level result code extracted from the blob.
///
/// Codes without a dedicated domain outcome collapse into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionResultCode {
    InsufficientBalance,
    InsufficientFee,
    NoAccount,
    BadSeq,
    Other,
}

/// Decoder for the embedded result blob.
///
/// `None` means the code is absent or the blob is unreadable; callers
/// treat that the same as an unrecognized code.
pub trait ResultCodeDecoder: Send + Sync {
    fn decode(&self, blob: &[u8]) -> Option<TransactionResultCode>;
}

/// Default decoder reading the big-endian result code at its fixed
/// offset in the XDR-encoded transaction result.
#[derive(Debug, Clone, Copy, Default)]
pub struct XdrResultCodeDecoder;

impl ResultCodeDecoder for XdrResultCodeDecoder {
    fn decode(&self, blob: &[u8]) -> Option<TransactionResultCode> {
        let raw = blob.get(RESULT_CODE_OFFSET..RESULT_CODE_OFFSET + 4)?;
        let code = i32::from_be_bytes(raw.try_into().ok()?);
        Some(match code {
            TX_INSUFFICIENT_BALANCE => TransactionResultCode::InsufficientBalance,
            TX_INSUFFICIENT_FEE => TransactionResultCode::InsufficientFee,
            TX_NO_ACCOUNT => TransactionResultCode::NoAccount,
            TX_BAD_SEQ => TransactionResultCode::BadSeq,
            _ => TransactionResultCode::Other,
        })
    }
}

/// Build a minimal result blob carrying the given code. Test helper for
/// this crate and for transport implementations.
pub fn encode_result_code(code: i32) -> Vec<u8> {
    let mut blob = vec![0u8; RESULT_CODE_OFFSET];
    blob.extend_from_slice(&code.to_be_bytes());
    blob
}
