//! Gateway client.

use std::sync::Arc;

use bestpay_core::operation::{OperationRegistry, RequestAssembler};
use bestpay_core::payload::{
    BizPayload, PlaceOrderPayload, QueryOrderPayload, RefundPayload, ReversePayload,
};
use bestpay_core::signing::Signer;
use bestpay_shared::{AppError, AppResult, GatewayConfig};
use tracing::{debug, info, instrument, warn};

use crate::error::ClientError;
use crate::transport::{HttpTransport, Transport};

/// Assembles, signs and sends gateway requests.
///
/// Returns the raw response body; decoding is left to the caller (see
/// `bestpay_core::response`). A failed send is reported once and never
/// retried.
pub struct BestpayClient<T> {
    registry: Arc<OperationRegistry>,
    assembler: RequestAssembler,
    transport: T,
    merchant_key: String,
}

impl BestpayClient<HttpTransport> {
    /// Builds a client over HTTP from gateway configuration.
    pub fn from_config(config: &GatewayConfig) -> AppResult<Self> {
        config.validate()?;
        let transport =
            HttpTransport::from_config(config).map_err(|e| AppError::Transport(e.to_string()))?;
        let registry = Arc::new(OperationRegistry::with_defaults(config.base_url.clone()));
        Ok(Self::new(
            registry,
            RequestAssembler::new(Signer::new(config.mac_algorithm)),
            transport,
            config.merchant_key.clone(),
        ))
    }
}

impl<T: Transport> BestpayClient<T> {
    /// Creates a client from its parts.
    pub fn new(
        registry: Arc<OperationRegistry>,
        assembler: RequestAssembler,
        transport: T,
        merchant_key: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            assembler,
            transport,
            merchant_key: merchant_key.into(),
        }
    }

    /// The shared endpoint registry.
    pub fn registry(&self) -> &Arc<OperationRegistry> {
        &self.registry
    }

    /// Validates, signs and sends `payload`, returning the raw body.
    #[instrument(
        skip_all,
        fields(operation = %payload.operation(), merchant_id = %payload.merchant_id())
    )]
    pub async fn execute(&self, mut payload: BizPayload) -> Result<String, ClientError> {
        let request = self
            .assembler
            .assemble(&mut payload, &self.merchant_key)
            .inspect_err(|e| warn!(code = e.error_code(), error = %e, "payload rejected"))?;

        let endpoint_url = self.registry.endpoint_url(request.operation);
        let descriptor = self.registry.lookup(&endpoint_url);
        if !descriptor.is_registered() {
            warn!(%endpoint_url, "operation not registered");
            return Err(ClientError::UnknownOperation { endpoint_url });
        }

        debug!(
            endpoint = %descriptor.endpoint_url,
            field_count = request.fields.len(),
            "sending request"
        );
        let body = self
            .transport
            .send(&descriptor.endpoint_url, &request.fields)
            .await
            .inspect_err(|e| warn!(error = %e, "transport failed"))?;

        info!(
            name = %descriptor.display_name,
            body_len = body.len(),
            "gateway responded"
        );
        Ok(body)
    }

    /// Barcode payment.
    pub async fn place_order(&self, payload: PlaceOrderPayload) -> Result<String, ClientError> {
        self.execute(payload.into()).await
    }

    /// Order status query.
    pub async fn query_order(&self, payload: QueryOrderPayload) -> Result<String, ClientError> {
        self.execute(payload.into()).await
    }

    /// Refund.
    pub async fn refund(&self, payload: RefundPayload) -> Result<String, ClientError> {
        self.execute(payload.into()).await
    }

    /// Same-day reversal.
    pub async fn reverse(&self, payload: ReversePayload) -> Result<String, ClientError> {
        self.execute(payload.into()).await
    }
}

impl<T> std::fmt::Debug for BestpayClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BestpayClient")
            .field("base_url", &self.registry.base_url())
            .field("signer", &self.assembler.signer())
            .field("merchant_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}
