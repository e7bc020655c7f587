use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Platform-wide role, totally ordered by privilege.
///
/// `SuperAdmin` outranks `OrgAdmin`, which outranks `TeamLead`, and so on
/// down to `Viewer`. Use [`Role::rank`] or [`Role::is_at_least`] for
/// comparisons instead of matching on variants at call sites.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    OrgAdmin,
    TeamLead,
    Member,
    Viewer,
}

impl Role {
    /// Numeric privilege rank. Higher means more privileged.
    pub fn rank(&self) -> u8 {
        match self {
            Role::SuperAdmin => 4,
            Role::OrgAdmin => 3,
            Role::TeamLead => 2,
            Role::Member => 1,
            Role::Viewer => 0,
        }
    }

    pub fn is_at_least(&self, threshold: Role) -> bool {
        self.rank() >= threshold.rank()
    }

    /// All roles, most privileged first.
    pub fn all() -> [Role; 5] {
        [
            Role::SuperAdmin,
            Role::OrgAdmin,
            Role::TeamLead,
            Role::Member,
            Role::Viewer,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::OrgAdmin => "org_admin",
            Role::TeamLead => "team_lead",
            Role::Member => "member",
            Role::Viewer => "viewer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super_admin" => Ok(Role::SuperAdmin),
            "org_admin" => Ok(Role::OrgAdmin),
            "team_lead" => Ok(Role::TeamLead),
            "member" => Ok(Role::Member),
            "viewer" => Ok(Role::Viewer),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role: {}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

/// Role within a single team, distinct from the platform-wide [`Role`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TeamRole {
    Lead,
    Member,
}
