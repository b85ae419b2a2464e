use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, base64::Base64, serde_as};

/// Body of `POST /v1/invoices`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddInvoiceRequest {
    /// Amount in satoshis. Not checked locally; the node decides what it accepts.
    pub value: i64,
    pub memo: String,
}

impl AddInvoiceRequest {
    pub fn new(value: i64, memo: impl Into<String>) -> Self {
        Self {
            value,
            memo: memo.into(),
        }
    }
}

/// Response of `POST /v1/invoices`.
///
/// The REST gateway renders proto `bytes` as standard base64 and 64-bit
/// integers as decimal strings; both are decoded here.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddInvoiceResponse {
    #[serde_as(as = "Base64")]
    pub r_hash: Vec<u8>,

    pub payment_request: String,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_index: Option<u64>,

    #[serde_as(as = "Option<Base64>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_addr: Option<Vec<u8>>,
}

impl AddInvoiceResponse {
    /// Payment hash as lowercase hex, the form users compare against explorers
    /// and `lncli`.
    pub fn r_hash_hex(&self) -> String {
        hex::encode(&self.r_hash)
    }
}
