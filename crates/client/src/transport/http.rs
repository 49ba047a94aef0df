//! reqwest-backed transport.

use std::time::Duration;

use async_trait::async_trait;
use bestpay_core::payload::FormFields;
use bestpay_shared::GatewayConfig;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use super::{Transport, TransportError};

/// Form-encoded POST over HTTPS.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport with explicit timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(timeout: Duration, connect_timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| TransportError::new(e.to_string()))?;
        Ok(Self { client })
    }

    /// Creates a transport with the timeouts from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &GatewayConfig) -> Result<Self, TransportError> {
        Self::new(config.timeout(), config.connect_timeout())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, fields), fields(field_count = fields.len()))]
    async fn send(&self, endpoint_url: &str, fields: &FormFields) -> Result<String, TransportError> {
        let response = self
            .client
            .post(endpoint_url)
            .form(fields)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "request failed");
                TransportError::new(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        if !status.is_success() {
            warn!(%status, body_len = body.len(), "gateway returned non-success status");
            return Err(TransportError::new(format!("HTTP {status}: {body}")));
        }

        debug!(%status, body_len = body.len(), "response received");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let config = GatewayConfig::new("043101180050000", "key");
        assert!(HttpTransport::from_config(&config).is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let transport =
            HttpTransport::new(Duration::from_secs(2), Duration::from_secs(1)).unwrap();
        let result = transport
            .send("http://127.0.0.1:9/query/queryOrder", &FormFields::new())
            .await;
        assert!(result.is_err());
    }
}
