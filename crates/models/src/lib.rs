// Core modules
pub mod organization;
pub mod role;
pub mod team;
pub mod user;

// Re-export commonly used types
pub use organization::{CreateOrganization, Organization, UpdateOrganization};
pub use role::{Role, TeamRole, UnknownRole};
pub use team::{AddTeamMember, CreateTeam, Team, TeamMember, TeamSettings, UpdateTeam};
pub use user::{TeamMembership, UpdateUser, User, UserRef, UserStatus};
