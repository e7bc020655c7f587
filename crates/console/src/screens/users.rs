use crate::interaction::{InteractionState, PendingAction, PendingActions};
use crate::notify::Notifications;
use crate::screens::{ActionOutcome, ScreenState};
use admin_authz::{assignable_roles, can_assign_role, can_perform, Action, Target};
use admin_models::{Role, UpdateUser, User};
use admin_query::{filter, user_stats, UserStats};
use admin_store::EntityStore;
use uuid::Uuid;
use validator::Validate;

/// Controller for the user management screen.
pub struct UsersScreen {
    actor: User,
    store: EntityStore<User>,
    pub interaction: InteractionState,
    pending: PendingActions,
    pub notifications: Notifications,
    search_term: String,
    state: ScreenState,
}

impl UsersScreen {
    pub fn new(actor: User, store: EntityStore<User>) -> Self {
        Self {
            actor,
            store,
            interaction: InteractionState::default(),
            pending: PendingActions::default(),
            notifications: Notifications::default(),
            search_term: String::new(),
            state: ScreenState::Ready,
        }
    }

    pub fn state(&self) -> ScreenState {
        self.state
    }

    pub async fn refresh(&mut self) -> ActionOutcome {
        if !can_perform(&self.actor, Action::ManageUsers, Target::None) {
            self.state = ScreenState::AccessDenied;
            return ActionOutcome::Denied;
        }
        self.state = ScreenState::Ready;

        if !self.pending.begin(PendingAction::Load) {
            return ActionOutcome::Busy;
        }
        let result = self.store.load().await;
        self.pending.finish(PendingAction::Load);

        match result {
            Ok(()) => ActionOutcome::Done,
            Err(err) => {
                self.notifications.error(err.to_string());
                ActionOutcome::Failed
            }
        }
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn visible(&self) -> Vec<&User> {
        filter(self.store.snapshot(), &self.search_term)
    }

    pub fn stats(&self) -> UserStats {
        user_stats(self.store.snapshot())
    }

    pub fn get(&self, id: Uuid) -> Option<&User> {
        self.store.get(id)
    }

    /// Roles the actor may offer in the role picker.
    pub fn assignable_roles(&self) -> Vec<Role> {
        assignable_roles(&self.actor)
    }

    pub fn can_delete(&self, target: &User) -> bool {
        can_perform(&self.actor, Action::DeleteUser, Target::User(target))
    }

    pub async fn update(&mut self, id: Uuid, patch: UpdateUser) -> ActionOutcome {
        let allowed = match self.store.get(id) {
            Some(target) => can_perform(&self.actor, Action::EditUser, Target::User(target)),
            None => {
                self.notifications.error("User no longer exists");
                return ActionOutcome::Failed;
            }
        };
        if !allowed {
            return ActionOutcome::Denied;
        }
        // Role promotion ceiling is checked separately from the edit
        // permission itself.
        if let Some(new_role) = patch.role {
            if !can_assign_role(&self.actor, new_role) {
                return ActionOutcome::Denied;
            }
        }
        if let Err(errors) = patch.validate() {
            return ActionOutcome::Invalid(errors);
        }
        if !self.pending.begin(PendingAction::Update(id)) {
            return ActionOutcome::Busy;
        }
        let result = self.store.update(id, &patch).await;
        self.pending.finish(PendingAction::Update(id));

        match result {
            Ok(updated) => {
                self.notifications
                    .success(format!("User \"{}\" updated", updated.name));
                ActionOutcome::Done
            }
            Err(err) => {
                self.notifications.error(err.to_string());
                ActionOutcome::Failed
            }
        }
    }

    pub async fn delete(&mut self, id: Uuid) -> ActionOutcome {
        let allowed = match self.store.get(id) {
            Some(target) => can_perform(&self.actor, Action::DeleteUser, Target::User(target)),
            None => {
                self.notifications.error("User no longer exists");
                return ActionOutcome::Failed;
            }
        };
        if !allowed {
            return ActionOutcome::Denied;
        }
        if !self.pending.begin(PendingAction::Remove(id)) {
            return ActionOutcome::Busy;
        }
        let result = self.store.remove(id).await;
        self.pending.finish(PendingAction::Remove(id));

        match result {
            Ok(()) => {
                self.notifications.success("User deleted");
                ActionOutcome::Done
            }
            Err(err) => {
                self.notifications.error(err.to_string());
                ActionOutcome::Failed
            }
        }
    }
}
