use crate::role::TeamRole;
use crate::user::UserRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,

    /// Owning organization, immutable after creation.
    pub organization_id: Uuid,

    /// The lead may legitimately be missing from `members`; display it
    /// unconditionally rather than looking it up there.
    pub lead: UserRef,

    #[serde(default)]
    pub members: Vec<TeamMember>,

    #[serde(default)]
    pub projects: Vec<Uuid>,

    #[serde(default)]
    pub settings: TeamSettings,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Team {
    /// The member entry matching the lead, when one exists.
    pub fn lead_entry(&self) -> Option<&TeamMember> {
        self.members.iter().find(|m| m.user.id == self.lead.id)
    }

    pub fn is_member(&self, user_id: Uuid) -> bool {
        self.members.iter().any(|m| m.user.id == user_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamMember {
    pub user: UserRef,
    pub role: TeamRole,
    pub joined_at: DateTime<Utc>,
}

/// Team settings (JSON stored with the team record)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TeamSettings {
    #[serde(default)]
    pub allow_guest_access: bool,

    #[serde(default)]
    pub require_approval_for_projects: bool,
}

/// Create new team request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTeam {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    pub description: Option<String>,

    pub organization_id: Uuid,

    pub lead_id: Uuid,

    pub settings: Option<TeamSettings>,
}

/// Update team request
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateTeam {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    pub description: Option<String>,

    pub lead_id: Option<Uuid>,

    pub settings: Option<TeamSettings>,
}

/// Add a user to a team
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTeamMember {
    pub user_id: Uuid,
    pub role: TeamRole,
}
