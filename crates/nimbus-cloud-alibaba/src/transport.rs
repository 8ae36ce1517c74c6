//! Vendor RPC transport
//!
//! The provider talks to Alibaba Cloud through `AlibabaTransport`, one call
//! per vendor RPC. `GatewayTransport` reaches the vendor through an HTTPS API
//! gateway that owns request signing and credentials.

use crate::error::{AlibabaError, Result};
use crate::types::VendorRequest;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Issues one vendor RPC per call
#[async_trait]
pub trait AlibabaTransport: Send + Sync {
    /// Region every call of this session is bound to
    fn region(&self) -> &str;

    async fn call<R: VendorRequest>(&self, request: &R) -> Result<R::Response>;
}

/// Connection settings for the HTTPS gateway
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL, e.g. `https://cloud-gateway.internal`
    pub endpoint: String,
    pub region: String,
    pub timeout: Duration,
}

impl GatewayConfig {
    pub fn new(endpoint: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            region: region.into(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTPS gateway transport
///
/// Sends `POST {endpoint}/{product}/{version}/{action}` with the request as a
/// JSON body.
pub struct GatewayTransport {
    client: reqwest::Client,
    endpoint: String,
    region: String,
}

impl GatewayTransport {
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let endpoint = config.endpoint.trim_end_matches('/').to_string();
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(AlibabaError::InvalidEndpoint(config.endpoint));
        }

        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            endpoint,
            region: config.region,
        })
    }

    fn url_for<R: VendorRequest>(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            self.endpoint,
            R::PRODUCT.code(),
            R::PRODUCT.version(),
            R::ACTION
        )
    }
}

#[async_trait]
impl AlibabaTransport for GatewayTransport {
    fn region(&self) -> &str {
        &self.region
    }

    async fn call<R: VendorRequest>(&self, request: &R) -> Result<R::Response> {
        let url = self.url_for::<R>();
        tracing::debug!("Calling {} ({})", R::ACTION, url);

        let response = self
            .client
            .post(&url)
            .header("x-acs-region-id", &self.region)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let envelope: ErrorEnvelope = serde_json::from_str(&body).unwrap_or_default();
            let reason = status.canonical_reason().unwrap_or("Unknown error");
            return Err(AlibabaError::Api {
                code: envelope.code.unwrap_or_else(|| status.as_u16().to_string()),
                message: envelope.message.unwrap_or_else(|| reason.to_string()),
                request_id: envelope.request_id,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ErrorEnvelope {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DescribeZonesRequest, GetOrderDetailRequest};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn transport(server: &MockServer) -> GatewayTransport {
        GatewayTransport::new(GatewayConfig::new(server.uri(), "cn-hangzhou")).unwrap()
    }

    #[test]
    fn test_rejects_non_http_endpoint() {
        let result = GatewayTransport::new(GatewayConfig::new("ftp://gateway", "cn-hangzhou"));
        assert!(matches!(result, Err(AlibabaError::InvalidEndpoint(_))));
    }

    #[tokio::test]
    async fn test_call_routes_by_product_and_action() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/vpc/2016-04-28/DescribeZones"))
            .and(header("x-acs-region-id", "cn-hangzhou"))
            .and(body_json(json!({"RegionId": "cn-hangzhou"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "RequestId": "req-1",
                "Zones": {"Zone": [{"ZoneId": "cn-hangzhou-h", "LocalName": "Hangzhou H"}]}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = transport(&server)
            .call(&DescribeZonesRequest {
                region_id: "cn-hangzhou".to_string(),
            })
            .await
            .unwrap();

        let zones = response.zones.unwrap().zone;
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].zone_id.as_deref(), Some("cn-hangzhou-h"));
    }

    #[tokio::test]
    async fn test_error_envelope_becomes_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/bssopenapi/2017-12-14/GetOrderDetail"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "Code": "InvalidParameter",
                "Message": "OrderId is invalid",
                "RequestId": "req-2"
            })))
            .mount(&server)
            .await;

        let err = transport(&server)
            .call(&GetOrderDetailRequest {
                order_id: "bad".to_string(),
            })
            .await
            .unwrap_err();

        match err {
            AlibabaError::Api {
                code,
                message,
                request_id,
            } => {
                assert_eq!(code, "InvalidParameter");
                assert_eq!(message, "OrderId is invalid");
                assert_eq!(request_id.as_deref(), Some("req-2"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_error_without_envelope_uses_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
            .mount(&server)
            .await;

        let err = transport(&server)
            .call(&DescribeZonesRequest {
                region_id: "cn-hangzhou".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AlibabaError::Api { ref code, .. } if code == "503"));
    }
}
