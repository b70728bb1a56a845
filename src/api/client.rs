use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use crate::config::ServiceConfig;

use super::error::ApiError;

pub const HEALTH_PATH: &str = "/healthz";
pub const MODEL_PATH: &str = "/model";
pub const PREDICT_URL_PATH: &str = "/predict_url";

#[derive(Debug, Serialize)]
struct PredictUrlRequest<'a> {
    url: &'a str,
}

/// Client for the classification service, bound to one base URL.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ServiceConfig) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /healthz`. Any status is accepted as long as the body is JSON.
    pub async fn health(&self) -> Result<Value, ApiError> {
        self.get_json(HEALTH_PATH).await
    }

    /// `GET /model`. Same acceptance rule as [`ApiClient::health`].
    pub async fn model(&self) -> Result<Value, ApiError> {
        self.get_json(MODEL_PATH).await
    }

    /// `POST /predict_url` with `{"url": ...}`.
    ///
    /// A non-2xx status fails with [`ApiError::Http`] without reading the body.
    pub async fn predict_url(&self, url: &str) -> Result<Value, ApiError> {
        let response = self
            .http
            .post(self.endpoint(PREDICT_URL_PATH))
            .json(&PredictUrlRequest { url })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
            });
        }

        read_json(response).await
    }

    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let response = self.http.get(self.endpoint(path)).send().await?;
        read_json(response).await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn read_json(response: reqwest::Response) -> Result<Value, ApiError> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(base_url: &str) -> ServiceConfig {
        ServiceConfig {
            base_url: base_url.to_string(),
            request_timeout_secs: None,
        }
    }

    #[test]
    fn endpoint_joins_base_and_path() {
        let client = ApiClient::new(&service("http://127.0.0.1:8000")).unwrap();
        assert_eq!(client.endpoint(HEALTH_PATH), "http://127.0.0.1:8000/healthz");
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = ApiClient::new(&service("http://localhost:9000/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9000");
        assert_eq!(
            client.endpoint(PREDICT_URL_PATH),
            "http://localhost:9000/predict_url"
        );
    }

    #[test]
    fn request_body_shape() {
        let body = serde_json::to_value(PredictUrlRequest {
            url: "https://example.com/a",
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "url": "https://example.com/a" }));
    }
}
