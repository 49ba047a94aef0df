//! Business payloads, one per gateway operation.
//!
//! Amounts are integer minor units (fen). Text fields use an empty string
//! for "not set"; empty values never reach the wire.

use serde::Serialize;
use serde_with::{DisplayFromStr, serde_as};

use crate::ledger::{Ledger, LedgerError};
use crate::operation::Operation;

/// Channel code forced onto every payment, refund and reversal.
pub const CHANNEL: &str = "05";
/// Business type forced onto barcode payments.
pub const BUSI_TYPE: &str = "0000001";

/// Barcode payment: the merchant scans the code shown by the payer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceOrderPayload {
    /// Merchant id assigned by the gateway (max 30).
    pub merchant_id: String,
    /// Sub-merchant id assigned by the merchant platform (max 30).
    pub sub_merchant_id: String,
    /// Code scanned from the payer's app (max 30).
    pub barcode: String,
    /// Order number, unique per merchant, even length (max 30).
    pub order_no: String,
    /// Order request number, even length (max 30).
    pub order_req_no: String,
    /// Overwritten with [`CHANNEL`] during validation.
    pub channel: String,
    /// Overwritten with [`BUSI_TYPE`] during validation.
    pub busi_type: String,
    /// Order time, `yyyyMMddHHmmss`.
    pub order_date: String,
    /// Order total; must equal `product_amt + attach_amt`.
    pub order_amt: i64,
    /// Product amount.
    pub product_amt: i64,
    /// Surcharge amount.
    pub attach_amt: i64,
    /// Goods description (max 256).
    pub goods_name: String,
    /// Store number (max 10).
    pub store_id: String,
    /// Asynchronous result callback (max 255).
    pub back_url: String,
    /// Serialized fund split (max 255), see [`PlaceOrderPayload::set_ledger`].
    pub ledger_detail: String,
    /// Free-form merchant data echoed back (max 128).
    pub attach: String,
    /// Merchant-defined terminal number (max 50).
    pub mchnt_tm_num: String,
    /// Device terminal number (max 50).
    pub device_tm_num: String,
    /// Cashier number (max 64).
    pub erp_no: String,
    /// Line items, sent as JSON (max 4000 bytes).
    pub goods_detail: Vec<GoodsDetail>,
}

/// One line item of a barcode payment.
///
/// Sub-fields are not validated individually.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoodsDetail {
    /// Goods number.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub goods_id: String,
    /// Goods name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub goods_name: String,
    /// Quantity.
    #[serde_as(as = "DisplayFromStr")]
    #[serde(skip_serializing_if = "is_zero")]
    pub quantity: i64,
    /// Unit price in minor units.
    #[serde_as(as = "DisplayFromStr")]
    #[serde(skip_serializing_if = "is_zero")]
    pub price: i64,
    /// Goods category.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub goods_category: String,
    /// Description.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub body: String,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(value: &i64) -> bool {
    *value == 0
}

/// Order status query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOrderPayload {
    /// Merchant id (max 30).
    pub merchant_id: String,
    /// Order number, even length (max 30).
    pub order_no: String,
    /// Order request number, even length (max 30).
    pub order_req_no: String,
    /// Order time, `yyyyMMddHHmmss`.
    pub order_date: String,
}

/// Refund of a settled payment, fully or partially.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefundPayload {
    /// Merchant id (max 30).
    pub merchant_id: String,
    /// Sub-merchant id (max 30).
    pub sub_merchant_id: String,
    /// Transaction password, 1-20 bytes.
    pub merchant_pwd: String,
    /// Order number of the original payment, even length (max 30).
    pub old_order_no: String,
    /// Request number of the original payment, even length (max 30).
    pub old_order_req_no: String,
    /// Refund request number, unique, even length (max 30).
    /// Must differ from both original identifiers.
    pub refund_req_no: String,
    /// Refund date, `yyyyMMdd`.
    pub refund_req_date: String,
    /// Amount to refund, at most the original amount.
    pub trans_amt: i64,
    /// Serialized fund split (max 255), see [`RefundPayload::set_ledger`].
    pub ledger_detail: String,
    /// Overwritten with [`CHANNEL`] during validation.
    pub channel: String,
    /// Refund acceptance callback (max 255).
    pub bg_url: String,
}

/// Same-day reversal (cancellation) of a payment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReversePayload {
    /// Merchant id (max 30).
    pub merchant_id: String,
    /// Sub-merchant id (max 30).
    pub sub_merchant_id: String,
    /// Transaction password, 1-20 bytes.
    pub merchant_pwd: String,
    /// Order number of the original payment, even length (max 30).
    pub old_order_no: String,
    /// Request number of the original payment, even length (max 30).
    pub old_order_req_no: String,
    /// Reversal request number, even length (max 30).
    pub refund_req_no: String,
    /// Reversal date, `yyyyMMdd`.
    pub refund_req_date: String,
    /// Amount to reverse.
    pub trans_amt: i64,
    /// Overwritten with [`CHANNEL`] during validation.
    pub channel: String,
}

impl PlaceOrderPayload {
    /// Serializes `ledger` against `order_amt` into `ledger_detail`.
    ///
    /// # Errors
    ///
    /// Returns the split error; `ledger_detail` is left unchanged.
    pub fn set_ledger(&mut self, ledger: &Ledger) -> Result<(), LedgerError> {
        self.ledger_detail = ledger.serialize(self.order_amt)?;
        Ok(())
    }
}

impl RefundPayload {
    /// Serializes `ledger` against `trans_amt` into `ledger_detail`.
    ///
    /// # Errors
    ///
    /// Returns the split error; `ledger_detail` is left unchanged.
    pub fn set_ledger(&mut self, ledger: &Ledger) -> Result<(), LedgerError> {
        self.ledger_detail = ledger.serialize(self.trans_amt)?;
        Ok(())
    }
}

/// A payload for any of the four operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BizPayload {
    /// Barcode payment.
    PlaceOrder(PlaceOrderPayload),
    /// Order query.
    QueryOrder(QueryOrderPayload),
    /// Refund.
    Refund(RefundPayload),
    /// Reversal.
    Reverse(ReversePayload),
}

impl BizPayload {
    /// The operation this payload is sent to.
    #[must_use]
    pub const fn operation(&self) -> Operation {
        match self {
            Self::PlaceOrder(_) => Operation::PlaceOrder,
            Self::QueryOrder(_) => Operation::QueryOrder,
            Self::Refund(_) => Operation::Refund,
            Self::Reverse(_) => Operation::Reverse,
        }
    }

    /// Merchant id carried by the payload.
    #[must_use]
    pub fn merchant_id(&self) -> &str {
        match self {
            Self::PlaceOrder(p) => &p.merchant_id,
            Self::QueryOrder(p) => &p.merchant_id,
            Self::Refund(p) => &p.merchant_id,
            Self::Reverse(p) => &p.merchant_id,
        }
    }
}

impl From<PlaceOrderPayload> for BizPayload {
    fn from(payload: PlaceOrderPayload) -> Self {
        Self::PlaceOrder(payload)
    }
}

impl From<QueryOrderPayload> for BizPayload {
    fn from(payload: QueryOrderPayload) -> Self {
        Self::QueryOrder(payload)
    }
}

impl From<RefundPayload> for BizPayload {
    fn from(payload: RefundPayload) -> Self {
        Self::Refund(payload)
    }
}

impl From<ReversePayload> for BizPayload {
    fn from(payload: ReversePayload) -> Self {
        Self::Reverse(payload)
    }
}
