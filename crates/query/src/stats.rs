use admin_models::{Organization, Team, User};
use serde::Serialize;

/// Dashboard statistics over the organizations snapshot.
///
/// The member/team/project sums come from the server-computed counters on
/// each record; they are summed over exactly the records currently in the
/// snapshot, recomputed on demand, never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrganizationStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub total_members: u64,
    pub total_teams: u64,
    pub total_projects: u64,
}

pub fn organization_stats(orgs: &[Organization]) -> OrganizationStats {
    let active = orgs.iter().filter(|o| o.is_active).count();
    OrganizationStats {
        total: orgs.len(),
        active,
        inactive: orgs.len() - active,
        total_members: orgs.iter().map(|o| u64::from(o.member_count)).sum(),
        total_teams: orgs.iter().map(|o| u64::from(o.team_count)).sum(),
        total_projects: orgs.iter().map(|o| u64::from(o.project_count)).sum(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

/// Active means `status == active`; everything else counts as inactive.
pub fn user_stats(users: &[User]) -> UserStats {
    let active = users.iter().filter(|u| u.is_active()).count();
    UserStats {
        total: users.len(),
        active,
        inactive: users.len() - active,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TeamStats {
    pub total: usize,
    pub total_members: usize,
    pub total_projects: usize,
}

pub fn team_stats(teams: &[Team]) -> TeamStats {
    TeamStats {
        total: teams.len(),
        total_members: teams.iter().map(|t| t.members.len()).sum(),
        total_projects: teams.iter().map(|t| t.projects.len()).sum(),
    }
}
