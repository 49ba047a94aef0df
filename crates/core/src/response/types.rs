//! Response envelope and per-operation results.

#![allow(missing_docs)]

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};

/// Envelope wrapping every gateway response.
///
/// The gateway sends `success` either as a JSON boolean or as the string
/// `"true"`/`"false"`; both decode.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse<T> {
    /// Whether the gateway accepted the request.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[serde(default)]
    pub success: bool,
    /// Gateway error code when `success` is false.
    pub error_code: Option<String>,
    /// Gateway error message when `success` is false.
    pub error_msg: Option<String>,
    /// Operation result.
    pub result: Option<T>,
}

impl<T> GatewayResponse<T> {
    /// Returns the result if the call succeeded.
    pub fn into_result(self) -> Option<T> {
        if self.success { self.result } else { None }
    }
}

/// Transaction state reported by payment and query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransStatus {
    /// Request received, payment in progress.
    #[serde(rename = "A")]
    Processing,
    /// Paid.
    #[serde(rename = "B")]
    Success,
    /// Failed.
    #[serde(rename = "C")]
    Failed,
}

/// Result of a barcode payment.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlaceOrderResult {
    pub merchant_id: String,
    pub order_no: String,
    pub order_req_no: String,
    pub order_date: String,
    /// Gateway transaction number.
    pub our_trans_no: String,
    #[serde_as(as = "DisplayFromStr")]
    pub trans_amt: i64,
    pub trans_status: Option<TransStatus>,
    /// 1 = MD5, 3 = RSA, 9 = CA.
    pub encode_type: String,
    pub sign: String,
    /// Discount paid by vouchers.
    #[serde_as(as = "DisplayFromStr")]
    pub coupon: i64,
    /// Merchant marketing cost.
    #[serde_as(as = "DisplayFromStr")]
    pub sc_value: i64,
    pub payer_account: String,
    pub payee_account: String,
    /// Funding source, see [`crate::bank::resolve_bank_account`].
    pub pay_channel: String,
    pub product_desc: String,
    pub refund_flag: String,
    pub customer_id: String,
    pub mchnt_tm_num: String,
    pub device_tm_num: String,
    pub attach: String,
    pub trans_phone: String,
}

/// Result of an order query.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryOrderResult {
    pub merchant_id: String,
    pub order_no: String,
    pub order_req_no: String,
    pub order_date: String,
    pub our_trans_no: String,
    #[serde_as(as = "DisplayFromStr")]
    pub trans_amt: i64,
    pub trans_status: Option<TransStatus>,
    pub encode_type: String,
    pub sign: String,
    pub refund_flag: String,
    pub customer_id: String,
    #[serde_as(as = "DisplayFromStr")]
    pub coupon: i64,
    #[serde_as(as = "DisplayFromStr")]
    pub sc_value: i64,
    pub payer_account: String,
    pub payee_account: String,
    pub pay_channel: String,
    pub product_desc: String,
}

/// Result of a refund.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RefundResult {
    pub old_order_no: String,
    pub refund_req_no: String,
    #[serde_as(as = "DisplayFromStr")]
    pub trans_amt: i64,
    pub sign: String,
}

/// Result of a reversal.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReverseResult {
    pub old_order_no: String,
    pub refund_req_no: String,
    #[serde_as(as = "DisplayFromStr")]
    pub trans_amt: i64,
    pub sign: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_query_success() {
        let body = r#"{
            "success": true,
            "result": {
                "merchantId": "043101180050000",
                "orderNo": "2016081800000001",
                "ourTransNo": "2016081810000000000001",
                "transAmt": "100",
                "transStatus": "B",
                "payChannel": "EPAYACC",
                "coupon": "0"
            }
        }"#;
        let resp: GatewayResponse<QueryOrderResult> = serde_json::from_str(body).unwrap();
        let result = resp.into_result().unwrap();
        assert_eq!(result.trans_amt, 100);
        assert_eq!(result.trans_status, Some(TransStatus::Success));
        assert_eq!(result.pay_channel, "EPAYACC");
        assert_eq!(result.sc_value, 0);
    }

    #[test]
    fn test_decode_failure_envelope() {
        let body = r#"{"success":false,"errorCode":"BE300001","errorMsg":"order not found"}"#;
        let resp: GatewayResponse<RefundResult> = serde_json::from_str(body).unwrap();
        assert_eq!(resp.error_code.as_deref(), Some("BE300001"));
        assert_eq!(resp.error_msg.as_deref(), Some("order not found"));
        assert!(resp.into_result().is_none());
    }

    #[test]
    fn test_success_as_string() {
        let body = r#"{"success":"true","result":{"refundReqNo":"R1","transAmt":"100"}}"#;
        let resp: GatewayResponse<RefundResult> = serde_json::from_str(body).unwrap();
        assert!(resp.success);
        assert!(resp.into_result().is_some());

        let body = r#"{"success":"false","errorCode":"BE300001"}"#;
        let resp: GatewayResponse<RefundResult> = serde_json::from_str(body).unwrap();
        assert!(!resp.success);
        assert!(resp.into_result().is_none());
    }

    #[test]
    fn test_success_rejects_other_strings() {
        let body = r#"{"success":"yes"}"#;
        assert!(serde_json::from_str::<GatewayResponse<RefundResult>>(body).is_err());
    }

    #[test]
    fn test_success_defaults_to_false() {
        let resp: GatewayResponse<RefundResult> = serde_json::from_str("{}").unwrap();
        assert!(!resp.success);
    }

    #[test]
    fn test_trans_status_codes() {
        for (code, status) in [
            ("\"A\"", TransStatus::Processing),
            ("\"B\"", TransStatus::Success),
            ("\"C\"", TransStatus::Failed),
        ] {
            assert_eq!(serde_json::from_str::<TransStatus>(code).unwrap(), status);
        }
        assert!(serde_json::from_str::<TransStatus>("\"D\"").is_err());
    }

    #[test]
    fn test_reverse_amount_must_be_numeric() {
        let body = r#"{"oldOrderNo":"01","refundReqNo":"02","transAmt":"abc"}"#;
        assert!(serde_json::from_str::<ReverseResult>(body).is_err());
    }
}
