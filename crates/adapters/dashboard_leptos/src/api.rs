//! HTTP client wrapping `gloo-net` for calls to the device service.

use gloo_net::http::Request;

use blueswitch_app::ports::ToggleSender;
use blueswitch_domain::error::SendError;
use blueswitch_domain::toggle::ToggleRequest;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Posts toggle requests as JSON to `<api_base><endpoint>`.
#[derive(Debug, Clone)]
pub struct HttpToggleSender {
    api_base: String,
}

impl HttpToggleSender {
    /// Create a sender targeting endpoints under `api_base` (may be empty).
    #[must_use]
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    fn url(&self, request: &ToggleRequest) -> String {
        format!("{}{}", self.api_base, request.endpoint())
    }

    /// Target URL and JSON body of the POST issued for `request`.
    fn encode(&self, request: &ToggleRequest) -> Result<(String, String), serde_json::Error> {
        let body = serde_json::to_string(&request.body())?;
        Ok((self.url(request), body))
    }
}

impl ToggleSender for HttpToggleSender {
    async fn send(&self, request: ToggleRequest) -> Result<(), SendError> {
        let (url, body) = self.encode(&request).map_err(SendError::transport)?;
        let resp = Request::post(&url)
            .header("Content-Type", JSON_CONTENT_TYPE)
            .body(body)
            .map_err(SendError::transport)?
            .send()
            .await
            .map_err(SendError::transport)?;

        if !resp.ok() {
            return Err(SendError::Status {
                status: resp.status(),
            });
        }
        Ok(())
    }
}
