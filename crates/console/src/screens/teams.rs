use crate::interaction::{InteractionState, PendingAction, PendingActions};
use crate::notify::Notifications;
use crate::screens::ActionOutcome;
use admin_authz::{can_perform, Action, Target};
use admin_models::{AddTeamMember, CreateTeam, Team, UpdateTeam, User};
use admin_query::{filter, team_stats, TeamStats};
use admin_store::{EntityStore, Result as StoreResult};
use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;
use validator::Validate;

/// Member management side-channel: adding a member is not plain CRUD, the
/// endpoint returns the updated team record to absorb.
#[async_trait]
pub trait TeamMemberRemote: Send + Sync {
    async fn add_member(&self, team_id: Uuid, payload: &AddTeamMember) -> StoreResult<Value>;
}

#[async_trait]
impl TeamMemberRemote for admin_client::ApiClient {
    async fn add_member(&self, team_id: Uuid, payload: &AddTeamMember) -> StoreResult<Value> {
        self.add_team_member(team_id, payload)
            .await
            .map_err(Into::into)
    }
}

/// Controller for the teams management screen.
pub struct TeamsScreen {
    actor: User,
    store: EntityStore<Team>,
    members: Box<dyn TeamMemberRemote>,
    pub interaction: InteractionState,
    pending: PendingActions,
    pub notifications: Notifications,
    search_term: String,
}

impl TeamsScreen {
    pub fn new(actor: User, store: EntityStore<Team>, members: Box<dyn TeamMemberRemote>) -> Self {
        Self {
            actor,
            store,
            members,
            interaction: InteractionState::default(),
            pending: PendingActions::default(),
            notifications: Notifications::default(),
            search_term: String::new(),
        }
    }

    /// Team listing is role-scoped server-side; no client gate applies.
    pub async fn refresh(&mut self) -> ActionOutcome {
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

    pub fn visible(&self) -> Vec<&Team> {
        filter(self.store.snapshot(), &self.search_term)
    }

    pub fn stats(&self) -> TeamStats {
        team_stats(self.store.snapshot())
    }

    pub fn get(&self, id: Uuid) -> Option<&Team> {
        self.store.get(id)
    }

    pub fn can_create(&self) -> bool {
        can_perform(&self.actor, Action::CreateTeam, Target::None)
    }

    pub fn can_manage(&self, team: &Team) -> bool {
        can_perform(&self.actor, Action::EditTeam, Target::Team(team))
    }

    pub async fn create(&mut self, payload: CreateTeam) -> ActionOutcome {
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
            Ok(created) => {
                self.notifications
                    .success(format!("Team \"{}\" created", created.name));
                ActionOutcome::Done
            }
            Err(err) => {
                self.notifications.error(err.to_string());
                ActionOutcome::Failed
            }
        }
    }

    pub async fn update(&mut self, id: Uuid, patch: UpdateTeam) -> ActionOutcome {
        let allowed = match self.store.get(id) {
            Some(existing) => can_perform(&self.actor, Action::EditTeam, Target::Team(existing)),
            None => {
                self.notifications.error("Team no longer exists");
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
                self.notifications.success("Team updated");
                ActionOutcome::Done
            }
            Err(err) => {
                self.notifications.error(err.to_string());
                ActionOutcome::Failed
            }
        }
    }

    pub async fn delete(&mut self, id: Uuid) -> ActionOutcome {
        if !can_perform(&self.actor, Action::DeleteTeam, Target::None) {
            return ActionOutcome::Denied;
        }
        if !self.pending.begin(PendingAction::Remove(id)) {
            return ActionOutcome::Busy;
        }
        let result = self.store.remove(id).await;
        self.pending.finish(PendingAction::Remove(id));

        match result {
            Ok(()) => {
                self.notifications.success("Team deleted");
                ActionOutcome::Done
            }
            Err(err) => {
                self.notifications.error(err.to_string());
                ActionOutcome::Failed
            }
        }
    }

    /// Add a member through the dedicated endpoint, then absorb the updated
    /// team record the server returns.
    pub async fn add_member(&mut self, team_id: Uuid, payload: AddTeamMember) -> ActionOutcome {
        if !can_perform(&self.actor, Action::AddTeamMember, Target::None) {
            return ActionOutcome::Denied;
        }
        if !self.pending.begin(PendingAction::AddMember(team_id)) {
            return ActionOutcome::Busy;
        }
        let result = self.members.add_member(team_id, &payload).await;
        self.pending.finish(PendingAction::AddMember(team_id));

        let record = match result {
            Ok(record) => record,
            Err(err) => {
                self.notifications.error(err.to_string());
                return ActionOutcome::Failed;
            }
        };

        match self.store.absorb(record) {
            Ok(_) => {
                self.notifications.success("Member added");
                ActionOutcome::Done
            }
            Err(err) => {
                self.notifications.error(err.to_string());
                ActionOutcome::Failed
            }
        }
    }
}
