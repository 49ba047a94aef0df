//! Signed request assembly.
//!
//! Order is fixed: key check, validation, canonical string, signature,
//! flattening. Nothing is built for a payload that fails validation.

use crate::payload::wire::FormFields;
use crate::payload::{BizPayload, CanonicalBuilder, FixedOrderCanonical, PayloadError, Validate};
use crate::signing::Signer;

use super::types::Operation;

/// Wire name of the signature field.
pub const MAC_FIELD: &str = crate::payload::fields::MAC;

/// A validated, signed request ready for transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    /// Operation the request targets.
    pub operation: Operation,
    /// Form fields including `mac`.
    pub fields: FormFields,
}

impl SignedRequest {
    /// The injected signature.
    #[must_use]
    pub fn mac(&self) -> &str {
        self.fields.get(MAC_FIELD).map_or("", String::as_str)
    }
}

/// Turns payloads into signed requests.
#[derive(Debug, Clone, Default)]
pub struct RequestAssembler<B = FixedOrderCanonical> {
    builder: B,
    signer: Signer,
}

impl RequestAssembler {
    /// Assembler with the gateway's canonical order and `signer`.
    #[must_use]
    pub fn new(signer: Signer) -> Self {
        Self {
            builder: FixedOrderCanonical,
            signer,
        }
    }
}

impl<B: CanonicalBuilder> RequestAssembler<B> {
    /// Assembler with a custom canonical builder.
    pub fn with_builder(builder: B, signer: Signer) -> Self {
        Self { builder, signer }
    }

    /// The signer in use.
    pub fn signer(&self) -> Signer {
        self.signer
    }

    /// Validates, signs and flattens `payload`.
    ///
    /// The payload is normalized in place by validation.
    ///
    /// # Errors
    ///
    /// `MissingMerchantKey` for an empty key, otherwise the first
    /// validation failure. No partial request is returned.
    pub fn assemble(
        &self,
        payload: &mut BizPayload,
        merchant_key: &str,
    ) -> Result<SignedRequest, PayloadError> {
        if merchant_key.is_empty() {
            return Err(PayloadError::MissingMerchantKey);
        }
        payload.validate()?;

        let canonical = self.builder.build(payload);
        let mac = self.signer.sign(&canonical, merchant_key);

        let mut fields = payload.flatten();
        fields.insert(MAC_FIELD.to_string(), mac);

        Ok(SignedRequest {
            operation: payload.operation(),
            fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::validation::fixtures;
    use crate::payload::{MockCanonicalBuilder, fields};
    use crate::signing::sign;
    use bestpay_shared::MacAlgorithm;
    use rstest::rstest;

    const KEY: &str = "344C4FB521F5A52EA28FB7FC79AEA889478D4343E4548C02";

    fn md5_assembler() -> RequestAssembler {
        RequestAssembler::new(Signer::default())
    }

    fn without_merchant_id(payload: impl Into<BizPayload>) -> BizPayload {
        let mut payload = payload.into();
        match &mut payload {
            BizPayload::PlaceOrder(p) => p.merchant_id.clear(),
            BizPayload::QueryOrder(p) => p.merchant_id.clear(),
            BizPayload::Refund(p) => p.merchant_id.clear(),
            BizPayload::Reverse(p) => p.merchant_id.clear(),
        }
        payload
    }

    #[test]
    fn test_assemble_query() {
        let mut payload = BizPayload::from(fixtures::query_order());
        let request = md5_assembler().assemble(&mut payload, KEY).unwrap();

        assert_eq!(request.operation, Operation::QueryOrder);
        assert_eq!(request.fields.len(), 5);
        assert_eq!(request.mac(), "9828CDC972F1945E3E0EA3AFF6CA84F8");
        assert_eq!(request.fields["orderNo"], "2016081800000001");
    }

    #[test]
    fn test_assemble_place_order_signs_canonical() {
        let mut payload = BizPayload::from(fixtures::place_order());
        let request = md5_assembler().assemble(&mut payload, KEY).unwrap();

        assert_eq!(request.mac(), sign(&payload.canonical(), KEY));
        assert_eq!(request.fields["channel"], "05");
        assert_eq!(request.fields["busiType"], "0000001");
        assert!(request.fields.values().all(|v| !v.is_empty()));
    }

    #[test]
    fn test_sha256_signer() {
        let mut payload = BizPayload::from(fixtures::refund());
        let assembler = RequestAssembler::new(Signer::new(MacAlgorithm::Sha256));
        let request = assembler.assemble(&mut payload, KEY).unwrap();
        assert_eq!(request.mac().len(), 64);
    }

    #[test]
    fn test_missing_key() {
        let mut payload = BizPayload::from(fixtures::query_order());
        assert_eq!(
            md5_assembler().assemble(&mut payload, ""),
            Err(PayloadError::MissingMerchantKey)
        );
    }

    #[rstest]
    #[case(without_merchant_id(fixtures::place_order()))]
    #[case(without_merchant_id(fixtures::query_order()))]
    #[case(without_merchant_id(fixtures::refund()))]
    #[case(without_merchant_id(fixtures::reverse()))]
    fn test_invalid_payload_never_builds_canonical(#[case] mut payload: BizPayload) {
        let mut builder = MockCanonicalBuilder::new();
        builder.expect_build().never();

        let assembler = RequestAssembler::with_builder(builder, Signer::default());
        assert_eq!(
            assembler.assemble(&mut payload, KEY),
            Err(PayloadError::field(fields::MERCHANT_ID))
        );
    }

    #[test]
    fn test_valid_payload_builds_canonical_once() {
        let mut builder = MockCanonicalBuilder::new();
        builder
            .expect_build()
            .times(1)
            .returning(|_| "CANONICAL".to_string());

        let assembler = RequestAssembler::with_builder(builder, Signer::default());
        let mut payload = BizPayload::from(fixtures::query_order());
        let request = assembler.assemble(&mut payload, "k").unwrap();
        assert_eq!(request.mac(), sign("CANONICAL", "k"));
    }

    #[test]
    fn test_cross_field_failure_is_not_signed() {
        let mut p = fixtures::place_order();
        p.order_amt = 2;
        p.product_amt = 1;
        let mut payload = BizPayload::from(p);
        assert!(matches!(
            md5_assembler().assemble(&mut payload, KEY),
            Err(PayloadError::CrossFieldInvariant { .. })
        ));
    }

    #[test]
    fn test_minimal_amounts_accepted() {
        let mut p = fixtures::place_order();
        p.order_amt = 1;
        p.product_amt = 1;
        p.attach_amt = 0;
        p.order_no = "14337346095601".into();
        let mut payload = BizPayload::from(p);
        assert!(md5_assembler().assemble(&mut payload, KEY).is_ok());
    }
}
