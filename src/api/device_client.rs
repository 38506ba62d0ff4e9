use async_trait::async_trait;
use log::debug;
use reqwest::{Method, Url};
use serde_json::json;

use super::DeviceApi;
use crate::error::AppError;
use crate::models::device_info::DeviceInfo;
use crate::models::device_state::DeviceState;
use crate::models::hsv::Hsv;

const PATH_INFO: &str = "info";
const PATH_STATE: &str = "state";
const PATH_ON: &str = "on";
const PATH_OFF: &str = "off";
const PATH_COLORLOOP: &str = "colorloop";
const PATH_RAINBOW: &str = "rainbow";
const PATH_PULSE: &str = "pulse";

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// HTTP client for a single LED stripe.
pub struct HttpDeviceClient {
    client: reqwest::Client,
    base_url: String,
}

fn build_http_client() -> Result<reqwest::Client, AppError> {
    Ok(reqwest::Client::builder()
        .user_agent(concat!("ohmled/", env!("CARGO_PKG_VERSION")))
        .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?)
}

/// Trim trailing slashes and check the URL is an absolute http(s) URL.
pub fn normalize_base_url(base_url: &str) -> Result<String, AppError> {
    let trimmed = base_url.trim().trim_end_matches('/');
    let url = Url::parse(trimmed)
        .map_err(|e| AppError::InvalidInput(format!("Invalid URL '{}': {}", base_url, e)))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(AppError::InvalidInput(format!(
            "Unsupported URL scheme '{}'",
            url.scheme()
        )));
    }
    Ok(trimmed.to_string())
}

impl HttpDeviceClient {
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        Ok(Self {
            client: build_http_client()?,
            base_url: normalize_base_url(base_url)?,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, AppError> {
        let url = self.endpoint(path);
        debug!("{} {}", method, url);

        let mut request = self.client.request(method, &url);
        if let Some(body) = &body {
            debug!("Body: {}", body);
            request = request.json(body);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Api {
                message: format!("{}: {}", status, body),
                status: Some(status.as_u16()),
            });
        }

        let text = response.text().await?;
        debug!("Response: {}", text);
        if text.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }

    async fn send_hsv(&self, path: &str, hsv: Hsv) -> Result<(), AppError> {
        self.request(Method::POST, path, Some(json!({ "hsv": hsv })))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl DeviceApi for HttpDeviceClient {
    async fn get_info(&self) -> Result<DeviceInfo, AppError> {
        let value = self.request(Method::GET, PATH_INFO, None).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn get_state(&self) -> Result<DeviceState, AppError> {
        let value = self.request(Method::GET, PATH_STATE, None).await?;
        DeviceState::from_json(&value).ok_or_else(|| AppError::Api {
            message: format!("Malformed state response: {}", value),
            status: None,
        })
    }

    async fn on(&self, hsv: Hsv) -> Result<(), AppError> {
        self.send_hsv(PATH_ON, hsv).await
    }

    async fn off(&self) -> Result<(), AppError> {
        self.request(Method::POST, PATH_OFF, None).await?;
        Ok(())
    }

    async fn colorloop(&self, hsv: Hsv) -> Result<(), AppError> {
        self.send_hsv(PATH_COLORLOOP, hsv).await
    }

    async fn rainbow(&self, hsv: Hsv) -> Result<(), AppError> {
        self.send_hsv(PATH_RAINBOW, hsv).await
    }

    async fn pulse(&self, hsv: Hsv) -> Result<(), AppError> {
        self.send_hsv(PATH_PULSE, hsv).await
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client(server: &MockServer) -> HttpDeviceClient {
        HttpDeviceClient::new(&server.uri()).unwrap()
    }

    #[test]
    fn test_normalize_strips_trailing_slash() {
        assert_eq!(
            normalize_base_url("http://192.168.1.40/").unwrap(),
            "http://192.168.1.40"
        );
        assert_eq!(
            normalize_base_url(" http://led.local:8080// ").unwrap(),
            "http://led.local:8080"
        );
    }

    #[test]
    fn test_normalize_rejects_bad_urls() {
        assert!(normalize_base_url("not a url").is_err());
        assert!(normalize_base_url("ftp://led.local").is_err());
    }

    #[test]
    fn test_endpoint() {
        let client = HttpDeviceClient::new("http://led.local/").unwrap();
        assert_eq!(client.endpoint(PATH_STATE), "http://led.local/state");
        assert_eq!(client.base_url(), "http://led.local");
    }

    #[tokio::test]
    async fn test_on_sends_unset_channels_as_null() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/on"))
            .and(body_json(json!({"hsv": [null, null, 128]})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let hsv = Hsv {
            hue: None,
            saturation: None,
            value: Some(128),
        };
        client(&server).await.on(hsv).await.unwrap();
    }

    #[tokio::test]
    async fn test_colorloop_sends_full_triple() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/colorloop"))
            .and(body_json(json!({"hsv": [10, 200, 0]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let hsv = Hsv {
            hue: Some(10),
            saturation: Some(200),
            value: Some(0),
        };
        client(&server).await.colorloop(hsv).await.unwrap();
    }

    #[tokio::test]
    async fn test_off_posts_without_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/off"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        client(&server).await.off().await.unwrap();
        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].body.is_empty());
    }

    #[tokio::test]
    async fn test_server_error_becomes_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/state"))
            .respond_with(ResponseTemplate::new(500).set_body_string("overheated"))
            .mount(&server)
            .await;

        let err = client(&server).await.get_state().await.unwrap_err();
        match err {
            AppError::Api { message, status } => {
                assert_eq!(status, Some(500));
                assert!(message.contains("overheated"));
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_state_parses_snapshot() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/state"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"mode": "colorloop", "value": 7})),
            )
            .mount(&server)
            .await;

        let state = client(&server).await.get_state().await.unwrap();
        assert_eq!(state.mode, "colorloop");
        assert_eq!(state.value, 7);
    }

    #[tokio::test]
    async fn test_get_state_without_value_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/state"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"mode": "on"})))
            .mount(&server)
            .await;

        let err = client(&server).await.get_state().await.unwrap_err();
        assert!(matches!(err, AppError::Api { status: None, .. }));
    }

    #[tokio::test]
    async fn test_get_info_keeps_vendor_fields() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/info"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"name": "shelf", "num-led": 30, "fw": "2.1"})),
            )
            .mount(&server)
            .await;

        let info = client(&server).await.get_info().await.unwrap();
        assert_eq!(info.name, "shelf");
        assert_eq!(info.num_led, 30);
        assert_eq!(info.extra["fw"], "2.1");
    }
}
