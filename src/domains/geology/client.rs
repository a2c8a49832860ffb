//! Async HTTP client for the BGS WMS endpoint.

use std::time::Duration;

use tracing::{debug, instrument, warn};

use super::error::GeologyError;
use super::wms::{self, CapabilitiesRequest, FeatureInfoRequest, MapRequest, WmsQuery};
use crate::core::config::WmsConfig;

/// Thin wrapper around a shared `reqwest::Client` bound to one WMS endpoint.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct WmsClient {
    http: reqwest::Client,
    endpoint: String,
}

impl WmsClient {
    /// Create a client from configuration.
    pub fn new(config: &WmsConfig) -> Result<Self, GeologyError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(GeologyError::Client)?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    /// The WMS endpoint requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issue a WMS request and return the body verbatim.
    ///
    /// Any non-2xx status is an error.
    #[instrument(skip_all, fields(request = query.request_name()))]
    pub async fn fetch(&self, query: &impl WmsQuery) -> Result<String, GeologyError> {
        debug!("Sending WMS request to {}", self.endpoint);

        let response = self
            .http
            .get(&self.endpoint)
            .query(&query.params())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("WMS responded with {}", status);
            return Err(GeologyError::Status { status });
        }

        Ok(response.text().await?)
    }

    /// Fetch feature info for a point.
    pub async fn feature_info(&self, request: &FeatureInfoRequest) -> Result<String, GeologyError> {
        self.fetch(request).await
    }

    /// Fetch the capabilities document.
    pub async fn capabilities(&self) -> Result<String, GeologyError> {
        self.fetch(&CapabilitiesRequest).await
    }

    /// Build a GetMap URL without sending it.
    pub fn map_url(&self, request: &MapRequest) -> Result<String, GeologyError> {
        wms::request_url(&self.endpoint, request)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! One-shot local HTTP responder for exercising the client without
    //! touching the real service.

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    use crate::core::config::WmsConfig;

    /// Serve a single canned response and report the request line received.
    pub async fn start_single_response_server(
        status: &str,
        body: &'static str,
    ) -> (WmsConfig, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Length: {}\r\nContent-Type: text/plain\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
        .into_bytes();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 8192];
            let n = socket.read(&mut buf).await.unwrap_or(0);
            let request = String::from_utf8_lossy(&buf[..n]);
            let request_line = request.lines().next().unwrap_or_default().to_string();
            let _ = tx.send(request_line);
            let _ = socket.write_all(&response).await;
            let _ = socket.shutdown().await;
        });

        (test_config(format!("http://{addr}/wms")), rx)
    }

    /// Config pointing at a port nothing listens on.
    pub async fn unreachable_config() -> WmsConfig {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        test_config(format!("http://{addr}/wms"))
    }

    fn test_config(endpoint: String) -> WmsConfig {
        WmsConfig {
            endpoint,
            timeout_secs: 5,
            ..WmsConfig::default()
        }
    }

    /// Extract a decoded query parameter from an HTTP request line.
    pub fn query_param(request_line: &str, key: &str) -> Option<String> {
        let target = request_line.split_whitespace().nth(1)?;
        let (_, query) = target.split_once('?')?;
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query).ok()?;
        pairs.into_iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}
