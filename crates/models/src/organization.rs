use crate::user::UserRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Organization (tenant) as returned by the management API.
///
/// The `member_count`/`team_count`/`project_count` fields are computed
/// server-side and must never be recomputed locally; they change only when
/// the record is refreshed from the remote store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Organization {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,

    /// Exactly one owner, set at creation, never null.
    pub owner: UserRef,

    /// Admin user ids. The owner counts as an admin even when absent here.
    #[serde(default)]
    pub admins: Vec<Uuid>,

    #[serde(default)]
    pub member_count: u32,
    #[serde(default)]
    pub team_count: u32,
    #[serde(default)]
    pub project_count: u32,

    pub is_active: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Organization {
    /// Whether `user_id` administers this organization. The owner is an
    /// implicit admin regardless of the `admins` list.
    pub fn is_admin(&self, user_id: Uuid) -> bool {
        self.owner.id == user_id || self.admins.contains(&user_id)
    }
}

/// Create new organization request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateOrganization {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    pub description: Option<String>,

    pub owner_id: Uuid,
}

/// Update organization request
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateOrganization {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    pub description: Option<String>,

    pub is_active: Option<bool>,
}
