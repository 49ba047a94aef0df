//! Property-based tests for payload validation.

use proptest::prelude::*;

use super::error::PayloadError;
use super::fields;
use super::validation::{Validate, fixtures};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Identifiers of even length up to 30 pass; odd lengths fail on that field.
    #[test]
    fn prop_order_no_parity(order_no in "[0-9]{1,30}") {
        let mut p = fixtures::place_order();
        p.order_no = order_no.clone();
        let result = p.validate();
        if order_no.len() % 2 == 0 {
            prop_assert_eq!(result, Ok(()));
        } else {
            prop_assert_eq!(result, Err(PayloadError::field(fields::ORDER_NO)));
        }
    }

    /// The amount rule holds exactly when order = product + attach.
    #[test]
    fn prop_amount_sum_rule(
        product in 1i64..1_000_000,
        attach in 0i64..1_000_000,
        order in 1i64..2_000_000,
    ) {
        let mut p = fixtures::place_order();
        p.order_amt = order;
        p.product_amt = product;
        p.attach_amt = attach;
        let result = p.validate();
        if order == product + attach {
            prop_assert_eq!(result, Ok(()));
        } else {
            let is_cross_field = matches!(result, Err(PayloadError::CrossFieldInvariant { .. }));
            prop_assert!(is_cross_field, "got {:?}", result);
        }
    }

    /// Channel and business type end up fixed whatever the caller set.
    #[test]
    fn prop_constants_normalized(channel in ".{0,8}", busi_type in ".{0,8}") {
        let mut p = fixtures::place_order();
        p.channel = channel;
        p.busi_type = busi_type;
        prop_assert_eq!(p.validate(), Ok(()));
        prop_assert_eq!(p.channel.as_str(), "05");
        prop_assert_eq!(p.busi_type.as_str(), "0000001");
    }

    /// Any well-formed calendar date passes as a refund date.
    #[test]
    fn prop_refund_date_accepts_calendar_dates(
        year in 1970i32..2100,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let mut r = fixtures::refund();
        r.refund_req_date = format!("{year:04}{month:02}{day:02}");
        prop_assert_eq!(r.validate(), Ok(()));
    }

    /// Non-positive refund amounts are rejected.
    #[test]
    fn prop_refund_amount_positive(amount in i64::MIN..=0) {
        let mut r = fixtures::refund();
        r.trans_amt = amount;
        prop_assert_eq!(r.validate(), Err(PayloadError::field(fields::TRANS_AMT)));
    }
}
