use crate::interaction::{InteractionState, PendingAction, PendingActions};
use crate::notify::Notifications;
use crate::screens::{ActionOutcome, ScreenState};
use admin_authz::{can_perform, Action, Target};
use admin_models::{CreateOrganization, Organization, UpdateOrganization, User};
use admin_query::{filter, organization_stats, OrganizationStats};
use admin_store::EntityStore;
use uuid::Uuid;
use validator::Validate;

/// Controller for the organizations management screen.
///
/// Every mutating path goes through the authorization predicate before any
/// store call; the store is the only holder of entity data and views are
/// re-derived from its snapshot after each operation.
pub struct OrganizationsScreen {
    actor: User,
    store: EntityStore<Organization>,
    pub interaction: InteractionState,
    pending: PendingActions,
    pub notifications: Notifications,
    search_term: String,
    state: ScreenState,
}

impl OrganizationsScreen {
    pub fn new(actor: User, store: EntityStore<Organization>) -> Self {
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

    /// Reload the collection. Viewing all organizations is itself gated;
    /// a denied actor lands in the access-denied state without any remote
    /// call being made.
    pub async fn refresh(&mut self) -> ActionOutcome {
        if !can_perform(&self.actor, Action::ViewAllOrgs, Target::None) {
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

    /// The search-filtered view of the current snapshot.
    pub fn visible(&self) -> Vec<&Organization> {
        filter(self.store.snapshot(), &self.search_term)
    }

    /// Recomputed from the snapshot on every call; nothing is cached.
    pub fn stats(&self) -> OrganizationStats {
        organization_stats(self.store.snapshot())
    }

    pub fn get(&self, id: Uuid) -> Option<&Organization> {
        self.store.get(id)
    }

    pub fn can_create(&self) -> bool {
        can_perform(&self.actor, Action::CreateOrg, Target::None)
    }

    pub fn can_edit(&self, org: &Organization) -> bool {
        can_perform(&self.actor, Action::EditOrg, Target::Organization(org))
    }

    pub fn can_delete(&self) -> bool {
        can_perform(&self.actor, Action::DeleteOrg, Target::None)
    }

    pub async fn create(&mut self, payload: CreateOrganization) -> ActionOutcome {
        if !self.can_create() {
            return ActionOutcome::Denied;
        }
        if let Err(errors) = payload.validate() {
            return ActionOutcome::Invalid(errors);
        }
        if !self.pending.begin(PendingAction::Create) {
            return ActionOutcome::Busy;
        }
        let result = self.store.create(&payload).await;
        self.pending.finish(PendingAction::Create);

        match result {
            Ok(org) => {
                self.notifications
                    .success(format!("Organization \"{}\" created", org.name));
                ActionOutcome::Done
            }
            Err(err) => {
                self.notifications.error(err.to_string());
                ActionOutcome::Failed
            }
        }
    }

    pub async fn update(&mut self, id: Uuid, patch: UpdateOrganization) -> ActionOutcome {
        let allowed = match self.store.get(id) {
            Some(org) => can_perform(&self.actor, Action::EditOrg, Target::Organization(org)),
            None => {
                self.notifications.error("Organization no longer exists");
                return ActionOutcome::Failed;
            }
        };
        if !allowed {
            return ActionOutcome::Denied;
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
            Ok(_) => {
                self.notifications.success("Organization updated");
                ActionOutcome::Done
            }
            Err(err) => {
                self.notifications.error(err.to_string());
                ActionOutcome::Failed
            }
        }
    }

    /// Confirm-then-apply: the row disappears only after the remote delete
    /// succeeded.
    pub async fn delete(&mut self, id: Uuid) -> ActionOutcome {
        if !self.can_delete() {
            return ActionOutcome::Denied;
        }
        if !self.pending.begin(PendingAction::Remove(id)) {
            return ActionOutcome::Busy;
        }
        let result = self.store.remove(id).await;
        self.pending.finish(PendingAction::Remove(id));

        match result {
            Ok(()) => {
                self.notifications.success("Organization deleted");
                ActionOutcome::Done
            }
            Err(err) => {
                self.notifications.error(err.to_string());
                ActionOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Level;
    use crate::testutil::{org, user, ScriptedRemote, SharedRemote};
    use admin_models::Role;
    use admin_store::StoreError;
    use std::sync::Arc;

    fn screen_with(
        actor: User,
        remote: &Arc<ScriptedRemote>,
    ) -> OrganizationsScreen {
        let store = EntityStore::new(Box::new(SharedRemote(Arc::clone(remote))));
        OrganizationsScreen::new(actor, store)
    }

    #[tokio::test]
    async fn test_viewer_gets_access_denied_without_remote_call() {
        // The scripted remote would panic if any call reached it.
        let remote = Arc::new(ScriptedRemote::default());
        let mut screen = screen_with(user(Role::Viewer, None), &remote);

        let outcome = screen.refresh().await;
        assert!(matches!(outcome, ActionOutcome::Denied));
        assert_eq!(screen.state(), ScreenState::AccessDenied);
        assert!(screen.notifications.is_empty());
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_all_rows() {
        let remote = Arc::new(ScriptedRemote::default());
        let orgs = vec![org("Acme", 5), org("Globex", 2), org("Initech", 1)];
        remote.push_list(Ok(serde_json::to_value(&orgs).unwrap()));

        let mut screen = screen_with(user(Role::SuperAdmin, None), &remote);
        screen.refresh().await;
        assert_eq!(screen.visible().len(), 3);

        // Simulated 500 on the delete call.
        remote.push_remove(Err(StoreError::Remote("internal server error".to_string())));
        let outcome = screen.delete(orgs[1].id).await;

        assert!(matches!(outcome, ActionOutcome::Failed));
        assert_eq!(screen.visible().len(), 3);
        let last = screen.notifications.last().unwrap();
        assert_eq!(last.level, Level::Error);
        assert_eq!(last.message, "internal server error");
    }

    #[tokio::test]
    async fn test_confirmed_delete_updates_view_and_stats() {
        let remote = Arc::new(ScriptedRemote::default());
        let orgs = vec![org("Acme", 5), org("Globex", 2)];
        remote.push_list(Ok(serde_json::to_value(&orgs).unwrap()));

        let mut screen = screen_with(user(Role::SuperAdmin, None), &remote);
        screen.refresh().await;
        assert_eq!(screen.stats().total_members, 7);

        remote.push_remove(Ok(()));
        let outcome = screen.delete(orgs[0].id).await;

        assert!(outcome.is_done());
        assert_eq!(screen.visible().len(), 1);
        // Deleted record no longer contributes to the sums.
        assert_eq!(screen.stats().total_members, 2);
    }

    #[tokio::test]
    async fn test_create_denied_below_super_admin() {
        let remote = Arc::new(ScriptedRemote::default());
        let mut screen = screen_with(user(Role::OrgAdmin, Some(Uuid::new_v4())), &remote);
        assert!(!screen.can_create());

        let payload = CreateOrganization {
            name: "Acme".to_string(),
            description: None,
            owner_id: Uuid::new_v4(),
        };
        assert!(matches!(screen.create(payload).await, ActionOutcome::Denied));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_payload_inline() {
        let remote = Arc::new(ScriptedRemote::default());
        let mut screen = screen_with(user(Role::SuperAdmin, None), &remote);

        let payload = CreateOrganization {
            name: String::new(),
            description: None,
            owner_id: Uuid::new_v4(),
        };
        let outcome = screen.create(payload).await;
        assert!(matches!(outcome, ActionOutcome::Invalid(_)));
        // Validation failures are inline, not toasts.
        assert!(screen.notifications.is_empty());
    }

    #[tokio::test]
    async fn test_search_narrows_visible_rows() {
        let remote = Arc::new(ScriptedRemote::default());
        let orgs = vec![org("Acme", 5), org("Acme Labs", 2), org("Globex", 1)];
        remote.push_list(Ok(serde_json::to_value(&orgs).unwrap()));

        let mut screen = screen_with(user(Role::SuperAdmin, None), &remote);
        screen.refresh().await;

        screen.set_search("acme");
        assert_eq!(screen.visible().len(), 2);
        screen.set_search("");
        assert_eq!(screen.visible().len(), 3);
    }

    #[tokio::test]
    async fn test_failed_load_shows_empty_list_and_error() {
        let remote = Arc::new(ScriptedRemote::default());
        let orgs = vec![org("Acme", 5)];
        remote.push_list(Ok(serde_json::to_value(&orgs).unwrap()));

        let mut screen = screen_with(user(Role::SuperAdmin, None), &remote);
        screen.refresh().await;
        assert_eq!(screen.visible().len(), 1);

        remote.push_list(Err(StoreError::Remote("connection refused".to_string())));
        let outcome = screen.refresh().await;

        assert!(matches!(outcome, ActionOutcome::Failed));
        // Stale rows are not kept around after a failed load.
        assert!(screen.visible().is_empty());
        assert_eq!(
            screen.notifications.last().unwrap().message,
            "connection refused"
        );
    }
}
