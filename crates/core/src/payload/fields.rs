//! Wire names of request fields.
//!
//! These are the form keys the gateway expects and the names reported in
//! `PayloadError::FieldFormat`.

#![allow(missing_docs)]

pub const MERCHANT_ID: &str = "merchantId";
pub const SUB_MERCHANT_ID: &str = "subMerchantId";
pub const MERCHANT_PWD: &str = "merchantPwd";
pub const BARCODE: &str = "barcode";
pub const ORDER_NO: &str = "orderNo";
pub const ORDER_REQ_NO: &str = "orderReqNo";
pub const OLD_ORDER_NO: &str = "oldOrderNo";
pub const OLD_ORDER_REQ_NO: &str = "oldOrderReqNo";
pub const REFUND_REQ_NO: &str = "refundReqNo";
pub const REFUND_REQ_DATE: &str = "refundReqDate";
pub const CHANNEL: &str = "channel";
pub const BUSI_TYPE: &str = "busiType";
pub const ORDER_DATE: &str = "orderDate";
pub const ORDER_AMT: &str = "orderAmt";
pub const PRODUCT_AMT: &str = "productAmt";
pub const ATTACH_AMT: &str = "attachAmt";
pub const TRANS_AMT: &str = "transAmt";
pub const GOODS_NAME: &str = "goodsName";
pub const GOODS_DETAIL: &str = "goodsDetail";
pub const STORE_ID: &str = "storeId";
pub const BACK_URL: &str = "backUrl";
pub const BG_URL: &str = "bgUrl";
pub const LEDGER_DETAIL: &str = "ledgerDetail";
pub const ATTACH: &str = "attach";
pub const MCHNT_TM_NUM: &str = "mchntTmNum";
pub const DEVICE_TM_NUM: &str = "deviceTmNum";
pub const ERP_NO: &str = "erpNo";
/// Injected by the assembler, never part of a payload.
pub const MAC: &str = "mac";
