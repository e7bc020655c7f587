// Admin console core: interaction state, screen controllers, notifications.
// Presentation (markup, routing, toast rendering) lives elsewhere and
// consumes these controllers.

pub mod config;
pub mod interaction;
pub mod notify;
pub mod screens;

#[cfg(test)]
pub(crate) mod testutil;

pub use config::Config;
pub use interaction::{InteractionState, MenuState, ModalState, PendingAction, PendingActions};
pub use notify::{Level, Notification, Notifications};
pub use screens::{
    ActionOutcome, OrganizationsScreen, ScreenState, TeamsScreen, UsersScreen, VerifyEmailScreen,
    VerifyState,
};
