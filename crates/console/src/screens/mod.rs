pub mod organizations;
pub mod teams;
pub mod users;
pub mod verify_email;

pub use organizations::OrganizationsScreen;
pub use teams::TeamsScreen;
pub use users::UsersScreen;
pub use verify_email::{VerifyEmailScreen, VerifyState};

/// Whole-screen guard state. Access denial is a first-class state with its
/// own rendering, never an error toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    Ready,
    AccessDenied,
}

/// Result of dispatching a user action. Callers pattern-match instead of
/// assuming completion; remote failure details travel via notifications.
#[derive(Debug)]
pub enum ActionOutcome {
    Done,
    /// The authorization predicate said no; the UI should not have offered
    /// this action in the first place.
    Denied,
    /// The same action is already in flight; submission stays disabled.
    Busy,
    /// Client-side validation failed; render these inline at the fields.
    Invalid(validator::ValidationErrors),
    /// The remote call failed; an error notification was queued.
    Failed,
}

impl ActionOutcome {
    pub fn is_done(&self) -> bool {
        matches!(self, ActionOutcome::Done)
    }
}
