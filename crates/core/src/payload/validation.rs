//! Field rules for each operation payload.
//!
//! Validation normalizes fixed-value fields (`channel`, `busiType`) in place
//! and then reports the first violated rule.

use chrono::{NaiveDate, NaiveDateTime};

use super::error::PayloadError;
use super::fields;
use super::types::{
    BUSI_TYPE, BizPayload, CHANNEL, PlaceOrderPayload, QueryOrderPayload, RefundPayload,
    ReversePayload,
};

/// Maximum length for merchant, barcode and order identifiers.
pub const ID_MAX_LEN: usize = 30;
/// Maximum length of `storeId`.
pub const STORE_ID_MAX_LEN: usize = 10;
/// Maximum length of `merchantPwd`.
pub const MERCHANT_PWD_MAX_LEN: usize = 20;
/// Maximum length of `goodsName`.
pub const GOODS_NAME_MAX_LEN: usize = 256;
/// Maximum length of callback URLs and `ledgerDetail`.
pub const URL_MAX_LEN: usize = 255;
/// Maximum length of `attach`.
pub const ATTACH_MAX_LEN: usize = 128;
/// Maximum length of terminal numbers.
pub const TERMINAL_MAX_LEN: usize = 50;
/// Maximum length of `erpNo`.
pub const ERP_NO_MAX_LEN: usize = 64;
/// Maximum size of the serialized `goodsDetail` JSON, in bytes.
pub const GOODS_DETAIL_MAX_LEN: usize = 4000;

const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";
const DATE_FORMAT: &str = "%Y%m%d";

/// Payloads that can check themselves before signing.
pub trait Validate {
    /// Normalizes fixed fields and checks every rule in a fixed order.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule.
    fn validate(&mut self) -> Result<(), PayloadError>;
}

fn required(field: &'static str, value: &str, max: usize) -> Result<(), PayloadError> {
    if value.is_empty() || value.len() > max {
        return Err(PayloadError::field(field));
    }
    Ok(())
}

fn required_even(field: &'static str, value: &str, max: usize) -> Result<(), PayloadError> {
    required(field, value, max)?;
    if value.len() % 2 != 0 {
        return Err(PayloadError::field(field));
    }
    Ok(())
}

fn optional(field: &'static str, value: &str, max: usize) -> Result<(), PayloadError> {
    if value.len() > max {
        return Err(PayloadError::field(field));
    }
    Ok(())
}

fn all_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

fn timestamp(field: &'static str, value: &str) -> Result<(), PayloadError> {
    if !all_digits(value, 14) || NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).is_err() {
        return Err(PayloadError::field(field));
    }
    Ok(())
}

fn date(field: &'static str, value: &str) -> Result<(), PayloadError> {
    if !all_digits(value, 8) || NaiveDate::parse_from_str(value, DATE_FORMAT).is_err() {
        return Err(PayloadError::field(field));
    }
    Ok(())
}

fn positive(field: &'static str, value: i64) -> Result<(), PayloadError> {
    if value <= 0 {
        return Err(PayloadError::field(field));
    }
    Ok(())
}

fn non_negative(field: &'static str, value: i64) -> Result<(), PayloadError> {
    if value < 0 {
        return Err(PayloadError::field(field));
    }
    Ok(())
}

/// The refund request number must not reuse an original order identifier.
fn distinct_refund_no(
    refund_req_no: &str,
    old_order_no: &str,
    old_order_req_no: &str,
) -> Result<(), PayloadError> {
    if refund_req_no == old_order_no || refund_req_no == old_order_req_no {
        return Err(PayloadError::cross_field(
            "refundReqNo differs from oldOrderNo and oldOrderReqNo",
        ));
    }
    Ok(())
}

impl Validate for PlaceOrderPayload {
    fn validate(&mut self) -> Result<(), PayloadError> {
        CHANNEL.clone_into(&mut self.channel);
        BUSI_TYPE.clone_into(&mut self.busi_type);

        required(fields::MERCHANT_ID, &self.merchant_id, ID_MAX_LEN)?;
        required(fields::BARCODE, &self.barcode, ID_MAX_LEN)?;
        required_even(fields::ORDER_NO, &self.order_no, ID_MAX_LEN)?;
        required_even(fields::ORDER_REQ_NO, &self.order_req_no, ID_MAX_LEN)?;
        required(fields::STORE_ID, &self.store_id, STORE_ID_MAX_LEN)?;
        timestamp(fields::ORDER_DATE, &self.order_date)?;

        positive(fields::ORDER_AMT, self.order_amt)?;
        positive(fields::PRODUCT_AMT, self.product_amt)?;
        non_negative(fields::ATTACH_AMT, self.attach_amt)?;
        if self.product_amt.checked_add(self.attach_amt) != Some(self.order_amt) {
            return Err(PayloadError::cross_field("orderAmt = productAmt + attachAmt"));
        }

        optional(fields::SUB_MERCHANT_ID, &self.sub_merchant_id, ID_MAX_LEN)?;
        optional(fields::GOODS_NAME, &self.goods_name, GOODS_NAME_MAX_LEN)?;
        optional(fields::BACK_URL, &self.back_url, URL_MAX_LEN)?;
        optional(fields::LEDGER_DETAIL, &self.ledger_detail, URL_MAX_LEN)?;
        optional(fields::ATTACH, &self.attach, ATTACH_MAX_LEN)?;
        optional(fields::MCHNT_TM_NUM, &self.mchnt_tm_num, TERMINAL_MAX_LEN)?;
        optional(fields::DEVICE_TM_NUM, &self.device_tm_num, TERMINAL_MAX_LEN)?;
        optional(fields::ERP_NO, &self.erp_no, ERP_NO_MAX_LEN)?;

        if !self.goods_detail.is_empty() {
            let json = serde_json::to_string(&self.goods_detail)
                .map_err(|_| PayloadError::field(fields::GOODS_DETAIL))?;
            optional(fields::GOODS_DETAIL, &json, GOODS_DETAIL_MAX_LEN)?;
        }

        Ok(())
    }
}

impl Validate for QueryOrderPayload {
    fn validate(&mut self) -> Result<(), PayloadError> {
        required(fields::MERCHANT_ID, &self.merchant_id, ID_MAX_LEN)?;
        required_even(fields::ORDER_NO, &self.order_no, ID_MAX_LEN)?;
        required_even(fields::ORDER_REQ_NO, &self.order_req_no, ID_MAX_LEN)?;
        timestamp(fields::ORDER_DATE, &self.order_date)
    }
}

impl Validate for RefundPayload {
    fn validate(&mut self) -> Result<(), PayloadError> {
        CHANNEL.clone_into(&mut self.channel);

        required(fields::MERCHANT_ID, &self.merchant_id, ID_MAX_LEN)?;
        required(fields::MERCHANT_PWD, &self.merchant_pwd, MERCHANT_PWD_MAX_LEN)?;
        required_even(fields::OLD_ORDER_NO, &self.old_order_no, ID_MAX_LEN)?;
        required_even(fields::OLD_ORDER_REQ_NO, &self.old_order_req_no, ID_MAX_LEN)?;
        required_even(fields::REFUND_REQ_NO, &self.refund_req_no, ID_MAX_LEN)?;
        distinct_refund_no(&self.refund_req_no, &self.old_order_no, &self.old_order_req_no)?;
        date(fields::REFUND_REQ_DATE, &self.refund_req_date)?;
        positive(fields::TRANS_AMT, self.trans_amt)?;

        optional(fields::SUB_MERCHANT_ID, &self.sub_merchant_id, ID_MAX_LEN)?;
        optional(fields::LEDGER_DETAIL, &self.ledger_detail, URL_MAX_LEN)?;
        optional(fields::BG_URL, &self.bg_url, URL_MAX_LEN)
    }
}

impl Validate for ReversePayload {
    fn validate(&mut self) -> Result<(), PayloadError> {
        CHANNEL.clone_into(&mut self.channel);

        required(fields::MERCHANT_ID, &self.merchant_id, ID_MAX_LEN)?;
        required(fields::MERCHANT_PWD, &self.merchant_pwd, MERCHANT_PWD_MAX_LEN)?;
        required_even(fields::OLD_ORDER_NO, &self.old_order_no, ID_MAX_LEN)?;
        required_even(fields::OLD_ORDER_REQ_NO, &self.old_order_req_no, ID_MAX_LEN)?;
        required_even(fields::REFUND_REQ_NO, &self.refund_req_no, ID_MAX_LEN)?;
        distinct_refund_no(&self.refund_req_no, &self.old_order_no, &self.old_order_req_no)?;
        date(fields::REFUND_REQ_DATE, &self.refund_req_date)?;
        positive(fields::TRANS_AMT, self.trans_amt)?;

        optional(fields::SUB_MERCHANT_ID, &self.sub_merchant_id, ID_MAX_LEN)
    }
}

impl Validate for BizPayload {
    fn validate(&mut self) -> Result<(), PayloadError> {
        match self {
            Self::PlaceOrder(p) => p.validate(),
            Self::QueryOrder(p) => p.validate(),
            Self::Refund(p) => p.validate(),
            Self::Reverse(p) => p.validate(),
        }
    }
}
