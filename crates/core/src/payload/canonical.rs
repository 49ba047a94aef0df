//! Canonical signing strings.
//!
//! Each operation signs a fixed, ordered subset of its fields as
//! `NAME=value` segments joined by `&`. The order is part of the wire
//! contract with the gateway.

use std::fmt::Display;

use super::types::{BizPayload, PlaceOrderPayload, QueryOrderPayload, RefundPayload, ReversePayload};

/// Builds the string that is digested into the request MAC.
#[cfg_attr(test, mockall::automock)]
pub trait CanonicalBuilder {
    /// Renders the canonical string of a validated payload.
    fn build(&self, payload: &BizPayload) -> String;
}

/// The gateway's fixed per-operation field order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedOrderCanonical;

impl CanonicalBuilder for FixedOrderCanonical {
    fn build(&self, payload: &BizPayload) -> String {
        canonical_string(payload)
    }
}

#[derive(Default)]
struct Segments(Vec<String>);

impl Segments {
    fn push(mut self, name: &str, value: impl Display) -> Self {
        self.0.push(format!("{name}={value}"));
        self
    }

    fn finish(self) -> String {
        self.0.join("&")
    }
}

fn place_order(p: &PlaceOrderPayload) -> String {
    Segments::default()
        .push("MERCHANTID", &p.merchant_id)
        .push("ORDERNO", &p.order_no)
        .push("ORDERREQNO", &p.order_req_no)
        .push("ORDERDATE", &p.order_date)
        .push("BARCODE", &p.barcode)
        .push("ORDERAMT", p.order_amt)
        .finish()
}

fn query_order(p: &QueryOrderPayload) -> String {
    Segments::default()
        .push("MERCHANTID", &p.merchant_id)
        .push("ORDERNO", &p.order_no)
        .push("ORDERREQNO", &p.order_req_no)
        .push("ORDERDATE", &p.order_date)
        .finish()
}

fn refund(p: &RefundPayload) -> String {
    Segments::default()
        .push("MERCHANTID", &p.merchant_id)
        .push("MERCHANTPWD", &p.merchant_pwd)
        .push("OLDORDERNO", &p.old_order_no)
        .push("OLDORDERREQNO", &p.old_order_req_no)
        .push("REFUNDREQNO", &p.refund_req_no)
        .push("REFUNDREQDATE", &p.refund_req_date)
        .push("TRANSAMT", p.trans_amt)
        .push("LEDGERDETAIL", &p.ledger_detail)
        .finish()
}

fn reverse(p: &ReversePayload) -> String {
    Segments::default()
        .push("MERCHANTID", &p.merchant_id)
        .push("MERCHANTPWD", &p.merchant_pwd)
        .push("OLDORDERNO", &p.old_order_no)
        .push("OLDORDERREQNO", &p.old_order_req_no)
        .push("REFUNDREQNO", &p.refund_req_no)
        .push("REFUNDREQDATE", &p.refund_req_date)
        .push("TRANSAMT", p.trans_amt)
        .finish()
}

/// Renders the canonical string for any payload.
#[must_use]
pub fn canonical_string(payload: &BizPayload) -> String {
    match payload {
        BizPayload::PlaceOrder(p) => place_order(p),
        BizPayload::QueryOrder(p) => query_order(p),
        BizPayload::Refund(p) => refund(p),
        BizPayload::Reverse(p) => reverse(p),
    }
}

impl BizPayload {
    /// Canonical signing string, see [`canonical_string`].
    #[must_use]
    pub fn canonical(&self) -> String {
        canonical_string(self)
    }
}
