use crate::client::ApiClient;
use crate::error::{ApiError, Result};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

/// Successful verification payload. `session_token` is present when the
/// server auto-logs the user in after verification.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifiedEmail {
    pub user_id: Uuid,
    pub email: String,
    pub session_token: Option<String>,
}

impl ApiClient {
    /// Redeem an email verification token.
    ///
    /// Failures are distinguished: an expired token stays
    /// [`ApiError::TokenExpired`] so the UI can offer a resend, while any
    /// other rejection becomes [`ApiError::InvalidToken`].
    pub async fn verify_email(&self, token: &str) -> Result<VerifiedEmail> {
        let response = self
            .post("/verify-email", &json!({ "token": token }))
            .await
            .map_err(|err| match err {
                ApiError::TokenExpired => ApiError::TokenExpired,
                ApiError::Remote { message, .. } => ApiError::InvalidToken(message),
                other => other,
            })?;

        serde_json::from_value(response).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Request a new verification email. Rate-limited server-side; a 429
    /// surfaces as [`ApiError::RateLimited`].
    pub async fn resend_verification(&self, email: &str) -> Result<()> {
        self.post("/resend-verification", &json!({ "email": email }))
            .await?;
        tracing::info!(email, "verification email resent");
        Ok(())
    }
}
