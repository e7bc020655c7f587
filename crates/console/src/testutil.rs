//! Shared fakes and builders for screen tests.

use admin_models::{
    Organization, Role, Team, TeamMember, TeamRole, TeamSettings, User, UserRef, UserStatus,
};
use admin_store::{RemoteCollection, Result, StoreError};
use chrono::Utc;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Scripted remote: each call pops the next queued response and panics on
/// an unscripted call, so tests also assert which calls happen at all.
#[derive(Default)]
pub struct ScriptedRemote {
    list: Mutex<VecDeque<Result<Value>>>,
    create: Mutex<VecDeque<Result<Value>>>,
    update: Mutex<VecDeque<Result<Value>>>,
    remove: Mutex<VecDeque<Result<()>>>,
}

impl ScriptedRemote {
    pub fn push_list(&self, response: Result<Value>) {
        self.list.lock().unwrap().push_back(response);
    }

    pub fn push_create(&self, response: Result<Value>) {
        self.create.lock().unwrap().push_back(response);
    }

    pub fn push_update(&self, response: Result<Value>) {
        self.update.lock().unwrap().push_back(response);
    }

    pub fn push_remove(&self, response: Result<()>) {
        self.remove.lock().unwrap().push_back(response);
    }
}

fn pop<T>(queue: &Mutex<VecDeque<Result<T>>>, name: &str) -> Result<T> {
    queue
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| panic!("unscripted {name} call"))
}

/// Local wrapper so the foreign [`RemoteCollection`] trait can be implemented
/// for a shared [`ScriptedRemote`] without tripping the orphan rule.
pub struct SharedRemote(pub Arc<ScriptedRemote>);

#[async_trait::async_trait]
impl RemoteCollection for SharedRemote {
    async fn list(&self) -> Result<Value> {
        pop(&self.0.list, "list")
    }

    async fn create(&self, _payload: Value) -> Result<Value> {
        pop(&self.0.create, "create")
    }

    async fn update(&self, _id: Uuid, _patch: Value) -> Result<Value> {
        pop(&self.0.update, "update")
    }

    async fn remove(&self, _id: Uuid) -> Result<()> {
        pop(&self.0.remove, "remove")
    }
}

pub fn user_ref(name: &str, email: &str) -> UserRef {
    UserRef {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: email.to_string(),
    }
}

pub fn user(role: Role, organization_id: Option<Uuid>) -> User {
    User {
        id: Uuid::new_v4(),
        name: "Actor".to_string(),
        email: "actor@example.com".to_string(),
        role,
        status: UserStatus::Active,
        organization_id,
        teams: vec![],
        last_active: None,
        created_at: Utc::now(),
    }
}

pub fn org(name: &str, member_count: u32) -> Organization {
    Organization {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: None,
        owner: user_ref("Owner", "owner@example.com"),
        admins: vec![],
        member_count,
        team_count: 0,
        project_count: 0,
        is_active: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn team(name: &str, organization_id: Uuid) -> Team {
    Team {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: None,
        organization_id,
        lead: user_ref("Lead", "lead@example.com"),
        members: vec![],
        projects: vec![],
        settings: TeamSettings::default(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn member(name: &str, email: &str, role: TeamRole) -> TeamMember {
    TeamMember {
        user: user_ref(name, email),
        role,
        joined_at: Utc::now(),
    }
}

pub fn remote_err(message: &str) -> StoreError {
    StoreError::Remote(message.to_string())
}
