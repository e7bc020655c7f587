use crate::error::{ApiError, Result};
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub bearer_token: Option<String>,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000/api".to_string()),
            bearer_token: std::env::var("API_TOKEN").ok(),
            timeout: Duration::from_secs(
                std::env::var("API_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
        }
    }
}

/// Shape of server error payloads.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    retry_after: Option<u64>,
}

/// Thin HTTP client for the management API. Cheap to clone; every typed
/// collection handle carries one.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ApiError::from)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            bearer_token: config.bearer_token,
        })
    }

    pub async fn get(&self, path: &str) -> Result<Value> {
        self.request(Method::GET, path, None).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        self.request(Method::POST, path, Some(body)).await
    }

    pub async fn patch(&self, path: &str, body: &Value) -> Result<Value> {
        self.request(Method::PATCH, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value> {
        self.request(Method::DELETE, path, None).await
    }

    async fn request(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method.clone(), &url);

        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let payload: Value = response.json().await.unwrap_or(Value::Null);

        if status.is_success() {
            Ok(payload)
        } else {
            let err = error_from_response(status, &payload);
            tracing::warn!(%method, path, status = status.as_u16(), error = %err, "request failed");
            Err(err)
        }
    }
}

/// Map a failed response to an [`ApiError`], surfacing the server's own
/// message when the payload carries one.
fn error_from_response(status: StatusCode, payload: &Value) -> ApiError {
    let body: ErrorBody = serde_json::from_value(payload.clone()).unwrap_or(ErrorBody {
        error: None,
        message: None,
        retry_after: None,
    });

    if status == StatusCode::TOO_MANY_REQUESTS {
        return ApiError::RateLimited {
            retry_after: body.retry_after.unwrap_or(60),
        };
    }

    if matches!(body.error.as_deref(), Some("token_expired") | Some("expired")) {
        return ApiError::TokenExpired;
    }

    let message = body
        .message
        .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));

    ApiError::Remote {
        status: status.as_u16(),
        message,
    }
}
