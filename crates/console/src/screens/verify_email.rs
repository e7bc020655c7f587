use crate::interaction::{PendingAction, PendingActions};
use crate::notify::Notifications;
use admin_client::{ApiError, Result as ApiResult, VerifiedEmail};
use async_trait::async_trait;

/// Verification endpoints behind a seam so the screen is testable without
/// a live server.
#[async_trait]
pub trait VerificationRemote: Send + Sync {
    async fn verify(&self, token: &str) -> ApiResult<VerifiedEmail>;
    async fn resend(&self, email: &str) -> ApiResult<()>;
}

#[async_trait]
impl VerificationRemote for admin_client::ApiClient {
    async fn verify(&self, token: &str) -> ApiResult<VerifiedEmail> {
        self.verify_email(token).await
    }

    async fn resend(&self, email: &str) -> ApiResult<()> {
        self.resend_verification(email).await
    }
}

/// Where the verification flow currently stands. `Expired` is its own
/// state, not a flavor of `Failed`: it is the one that offers a resend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyState {
    Pending,
    Verified { session_token: Option<String> },
    Expired,
    Failed(String),
}

/// Controller for the email verification landing screen.
pub struct VerifyEmailScreen {
    remote: Box<dyn VerificationRemote>,
    state: VerifyState,
    pending: PendingActions,
    pub notifications: Notifications,
}

impl VerifyEmailScreen {
    pub fn new(remote: Box<dyn VerificationRemote>) -> Self {
        Self {
            remote,
            state: VerifyState::Pending,
            pending: PendingActions::default(),
            notifications: Notifications::default(),
        }
    }

    pub fn state(&self) -> &VerifyState {
        &self.state
    }

    /// Redeem the token from the verification link.
    pub async fn verify(&mut self, token: &str) -> &VerifyState {
        self.state = VerifyState::Pending;
        self.state = match self.remote.verify(token).await {
            Ok(VerifiedEmail { session_token, .. }) => VerifyState::Verified { session_token },
            Err(ApiError::TokenExpired) => VerifyState::Expired,
            Err(err) => VerifyState::Failed(err.to_string()),
        };
        &self.state
    }

    /// Resend is offered once verification did not go through.
    pub fn can_resend(&self) -> bool {
        matches!(self.state, VerifyState::Expired | VerifyState::Failed(_))
    }

    /// Request a fresh verification email. Rate limiting gets its own
    /// message path; it is not a generic failure.
    pub async fn resend(&mut self, email: &str) -> bool {
        if !self.can_resend() {
            return false;
        }
        if !self.pending.begin(PendingAction::Resend) {
            return false;
        }
        let result = self.remote.resend(email).await;
        self.pending.finish(PendingAction::Resend);

        match result {
            Ok(()) => {
                self.notifications.success("Verification email sent");
                true
            }
            Err(err @ ApiError::RateLimited { .. }) => {
                self.notifications.error(err.to_string());
                false
            }
            Err(_) => {
                self.notifications
                    .error("Failed to resend verification email. Please try again.");
                false
            }
        }
    }
}
