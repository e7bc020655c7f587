use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// HTTP 429 on rate-limited endpoints; kept distinct so the UI can
    /// show the dedicated "try again later" path.
    #[error("Too many requests. Please try again in {retry_after} seconds.")]
    RateLimited { retry_after: u64 },

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Server rejected the request; carries the message extracted from the
    /// error payload, or a generic fallback.
    #[error("{message}")]
    Remote { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<ApiError> for admin_store::StoreError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Decode(message) => admin_store::StoreError::Decode(message),
            other => admin_store::StoreError::Remote(other.to_string()),
        }
    }
}
