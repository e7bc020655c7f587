use crate::role::{Role, TeamRole};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Account lifecycle status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Active,
    Inactive,
    Pending,
    Suspended,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,

    // Optional organization membership (NULL for platform admins)
    pub organization_id: Option<Uuid>,

    #[serde(default)]
    pub teams: Vec<TeamMembership>,

    pub last_active: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}

/// A user's membership in one team. A user appears at most once per team.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamMembership {
    pub team_id: Uuid,
    pub role: TeamRole,
}

/// Lightweight user reference embedded in owner/lead/member fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRef {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// Update user request. All fields optional; absent fields are untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUser {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    pub role: Option<Role>,

    pub status: Option<UserStatus>,
}
