//! Flattening of payloads into form fields.
//!
//! Every payload has an explicit table of `(wire name, value)` pairs. Empty
//! strings are dropped: an unset field must not appear in the form at all.

use std::collections::BTreeMap;

use super::fields;
use super::types::{
    BizPayload, GoodsDetail, PlaceOrderPayload, QueryOrderPayload, RefundPayload, ReversePayload,
};

/// Wire name to value, sorted by name.
pub type FormFields = BTreeMap<String, String>;

fn collect(pairs: impl IntoIterator<Item = (&'static str, String)>) -> FormFields {
    pairs
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

fn goods_json(goods: &[GoodsDetail]) -> String {
    if goods.is_empty() {
        return String::new();
    }
    // Vec of plain structs with string keys cannot fail to serialize.
    serde_json::to_string(goods).unwrap_or_default()
}

fn place_order(p: &PlaceOrderPayload) -> FormFields {
    collect([
        (fields::MERCHANT_ID, p.merchant_id.clone()),
        (fields::SUB_MERCHANT_ID, p.sub_merchant_id.clone()),
        (fields::BARCODE, p.barcode.clone()),
        (fields::ORDER_NO, p.order_no.clone()),
        (fields::ORDER_REQ_NO, p.order_req_no.clone()),
        (fields::CHANNEL, p.channel.clone()),
        (fields::BUSI_TYPE, p.busi_type.clone()),
        (fields::ORDER_DATE, p.order_date.clone()),
        (fields::ORDER_AMT, p.order_amt.to_string()),
        (fields::PRODUCT_AMT, p.product_amt.to_string()),
        (fields::ATTACH_AMT, p.attach_amt.to_string()),
        (fields::GOODS_NAME, p.goods_name.clone()),
        (fields::STORE_ID, p.store_id.clone()),
        (fields::BACK_URL, p.back_url.clone()),
        (fields::LEDGER_DETAIL, p.ledger_detail.clone()),
        (fields::ATTACH, p.attach.clone()),
        (fields::MCHNT_TM_NUM, p.mchnt_tm_num.clone()),
        (fields::DEVICE_TM_NUM, p.device_tm_num.clone()),
        (fields::ERP_NO, p.erp_no.clone()),
        (fields::GOODS_DETAIL, goods_json(&p.goods_detail)),
    ])
}

fn query_order(p: &QueryOrderPayload) -> FormFields {
    collect([
        (fields::MERCHANT_ID, p.merchant_id.clone()),
        (fields::ORDER_NO, p.order_no.clone()),
        (fields::ORDER_REQ_NO, p.order_req_no.clone()),
        (fields::ORDER_DATE, p.order_date.clone()),
    ])
}

fn refund(p: &RefundPayload) -> FormFields {
    collect([
        (fields::MERCHANT_ID, p.merchant_id.clone()),
        (fields::SUB_MERCHANT_ID, p.sub_merchant_id.clone()),
        (fields::MERCHANT_PWD, p.merchant_pwd.clone()),
        (fields::OLD_ORDER_NO, p.old_order_no.clone()),
        (fields::OLD_ORDER_REQ_NO, p.old_order_req_no.clone()),
        (fields::REFUND_REQ_NO, p.refund_req_no.clone()),
        (fields::REFUND_REQ_DATE, p.refund_req_date.clone()),
        (fields::TRANS_AMT, p.trans_amt.to_string()),
        (fields::LEDGER_DETAIL, p.ledger_detail.clone()),
        (fields::CHANNEL, p.channel.clone()),
        (fields::BG_URL, p.bg_url.clone()),
    ])
}

fn reverse(p: &ReversePayload) -> FormFields {
    collect([
        (fields::MERCHANT_ID, p.merchant_id.clone()),
        (fields::SUB_MERCHANT_ID, p.sub_merchant_id.clone()),
        (fields::MERCHANT_PWD, p.merchant_pwd.clone()),
        (fields::OLD_ORDER_NO, p.old_order_no.clone()),
        (fields::OLD_ORDER_REQ_NO, p.old_order_req_no.clone()),
        (fields::REFUND_REQ_NO, p.refund_req_no.clone()),
        (fields::REFUND_REQ_DATE, p.refund_req_date.clone()),
        (fields::TRANS_AMT, p.trans_amt.to_string()),
        (fields::CHANNEL, p.channel.clone()),
    ])
}

/// Flattens any payload into its form fields, without the `mac`.
#[must_use]
pub fn flatten(payload: &BizPayload) -> FormFields {
    match payload {
        BizPayload::PlaceOrder(p) => place_order(p),
        BizPayload::QueryOrder(p) => query_order(p),
        BizPayload::Refund(p) => refund(p),
        BizPayload::Reverse(p) => reverse(p),
    }
}

impl BizPayload {
    /// Form fields of this payload, see [`flatten`].
    #[must_use]
    pub fn flatten(&self) -> FormFields {
        flatten(self)
    }
}

#[cfg(test)]
mod tests {
    use super::super::validation::{Validate, fixtures};
    use super::*;

    #[test]
    fn test_query_fields() {
        let map = BizPayload::from(fixtures::query_order()).flatten();
        assert_eq!(map.len(), 4);
        assert_eq!(map["merchantId"], "043101180050000");
        assert_eq!(map["orderNo"], "2016081800000001");
        assert_eq!(map["orderReqNo"], "2016081800000002");
        assert_eq!(map["orderDate"], "20160818103000");
    }

    #[test]
    fn test_empty_strings_omitted() {
        let map = BizPayload::from(fixtures::place_order()).flatten();
        for name in [
            fields::SUB_MERCHANT_ID,
            fields::BACK_URL,
            fields::LEDGER_DETAIL,
            fields::ATTACH,
            fields::ERP_NO,
            fields::GOODS_DETAIL,
            fields::CHANNEL,
        ] {
            assert!(!map.contains_key(name), "{name} should be omitted");
        }
        assert!(map.values().all(|v| !v.is_empty()));
    }

    #[test]
    fn test_zero_amount_rendered() {
        let map = BizPayload::from(fixtures::place_order()).flatten();
        assert_eq!(map["attachAmt"], "0");
        assert_eq!(map["orderAmt"], "100");
    }

    #[test]
    fn test_normalized_constants_flattened() {
        let mut p = fixtures::place_order();
        p.validate().unwrap();
        let map = BizPayload::from(p).flatten();
        assert_eq!(map["channel"], "05");
        assert_eq!(map["busiType"], "0000001");
    }

    #[test]
    fn test_goods_detail_as_json() {
        let mut p = fixtures::place_order();
        p.goods_detail = fixtures::goods(1);
        let map = BizPayload::from(p).flatten();
        assert_eq!(
            map["goodsDetail"],
            r#"[{"goodsId":"G0000","goodsName":"coffee beans, medium roast","quantity":"1","price":"100"}]"#
        );
    }

    #[test]
    fn test_refund_fields() {
        let mut r = fixtures::refund();
        r.bg_url = "https://merchant.example/notify".into();
        let map = BizPayload::from(r).flatten();
        assert_eq!(map["merchantPwd"], "123456");
        assert_eq!(map["refundReqNo"], "2016081800000003");
        assert_eq!(map["transAmt"], "100");
        assert_eq!(map["bgUrl"], "https://merchant.example/notify");
        assert!(!map.contains_key("ledgerDetail"));
    }

    #[test]
    fn test_reverse_has_no_refund_only_fields() {
        let map = BizPayload::from(fixtures::reverse()).flatten();
        assert!(!map.contains_key("bgUrl"));
        assert!(!map.contains_key("ledgerDetail"));
        assert_eq!(map["refundReqDate"], "20160818");
    }
}
