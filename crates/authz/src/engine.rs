use admin_models::{Organization, Role, Team, User};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whole-action permissions checked before any mutation or gated view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    ViewAllOrgs,
    CreateOrg,
    EditOrg,
    DeleteOrg,
    CreateTeam,
    EditTeam,
    DeleteTeam,
    AddTeamMember,
    ManageUsers,
    EditUser,
    DeleteUser,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::ViewAllOrgs => "view-all-orgs",
            Action::CreateOrg => "create-org",
            Action::EditOrg => "edit-org",
            Action::DeleteOrg => "delete-org",
            Action::CreateTeam => "create-team",
            Action::EditTeam => "edit-team",
            Action::DeleteTeam => "delete-team",
            Action::AddTeamMember => "add-team-member",
            Action::ManageUsers => "manage-users",
            Action::EditUser => "edit-user",
            Action::DeleteUser => "delete-user",
        };
        f.write_str(name)
    }
}

/// The entity an action is aimed at, or `None` for global actions.
#[derive(Debug, Clone, Copy)]
pub enum Target<'a> {
    None,
    Organization(&'a Organization),
    Team(&'a Team),
    User(&'a User),
}

/// Decide whether `actor` may perform `action` on `target`.
///
/// Pure function of the actor's role plus ownership/membership facts on the
/// target; it never fails and never panics. Denial is an ordinary `false`
/// that callers present as an access-denied state, not an error.
///
/// Evaluation order matters: the self-delete guard runs before the role
/// table, so even a super admin cannot delete their own account.
pub fn can_perform(actor: &User, action: Action, target: Target<'_>) -> bool {
    // Self-delete is denied for every role.
    if action == Action::DeleteUser {
        if let Target::User(user) = target {
            if user.id == actor.id {
                tracing::debug!(actor = %actor.id, "self-delete denied");
                return false;
            }
        }
    }

    let allowed = match action {
        Action::ViewAllOrgs | Action::CreateOrg | Action::DeleteOrg | Action::DeleteUser => {
            actor.role == Role::SuperAdmin
        }

        Action::EditOrg => {
            actor.role == Role::SuperAdmin
                || matches!(target, Target::Organization(org) if org.is_admin(actor.id))
        }

        // Team creation additionally requires an organization to create the
        // team in; team leads may create teams within their own organization.
        Action::CreateTeam => {
            actor.role == Role::SuperAdmin
                || (matches!(actor.role, Role::OrgAdmin | Role::TeamLead)
                    && actor.organization_id.is_some())
        }

        Action::EditTeam | Action::DeleteTeam | Action::AddTeamMember => {
            matches!(actor.role, Role::SuperAdmin | Role::OrgAdmin)
        }

        Action::ManageUsers | Action::EditUser => {
            matches!(actor.role, Role::SuperAdmin | Role::OrgAdmin)
        }
    };

    if !allowed {
        tracing::debug!(actor = %actor.id, role = %actor.role, action = %action, "denied");
    }

    allowed
}

/// Whether `actor` may set another user's role to `new_role`.
///
/// Super admins may assign anything up to and including `org_admin`; org
/// admins anything strictly below `org_admin`. Promotion to `super_admin`
/// is unreachable through user editing for every actor.
pub fn can_assign_role(actor: &User, new_role: Role) -> bool {
    match actor.role {
        Role::SuperAdmin => new_role.rank() <= Role::OrgAdmin.rank(),
        Role::OrgAdmin => new_role.rank() < Role::OrgAdmin.rank(),
        _ => false,
    }
}

/// Roles `actor` may offer in a role picker, most privileged first.
pub fn assignable_roles(actor: &User) -> Vec<Role> {
    Role::all()
        .into_iter()
        .filter(|role| can_assign_role(actor, *role))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use admin_models::{UserRef, UserStatus};
    use chrono::Utc;
    use uuid::Uuid;

    fn user(role: Role, organization_id: Option<Uuid>) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            role,
            status: UserStatus::Active,
            organization_id,
            teams: vec![],
            last_active: None,
            created_at: Utc::now(),
        }
    }

    fn org(owner: &User, admins: Vec<Uuid>) -> Organization {
        Organization {
            id: Uuid::new_v4(),
            name: "Acme".to_string(),
            description: None,
            owner: UserRef {
                id: owner.id,
                name: owner.name.clone(),
                email: owner.email.clone(),
            },
            admins,
            member_count: 0,
            team_count: 0,
            project_count: 0,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_global_actions_require_super_admin() {
        let super_admin = user(Role::SuperAdmin, None);
        let org_admin = user(Role::OrgAdmin, Some(Uuid::new_v4()));

        for action in [Action::ViewAllOrgs, Action::CreateOrg, Action::DeleteOrg] {
            assert!(can_perform(&super_admin, action, Target::None));
            assert!(!can_perform(&org_admin, action, Target::None));
        }
    }

    #[test]
    fn test_can_perform_is_pure() {
        let actor = user(Role::OrgAdmin, Some(Uuid::new_v4()));
        let first = can_perform(&actor, Action::ManageUsers, Target::None);
        for _ in 0..10 {
            assert_eq!(can_perform(&actor, Action::ManageUsers, Target::None), first);
        }
    }

    #[test]
    fn test_self_delete_denied_for_every_role() {
        for role in Role::all() {
            let actor = user(role, Some(Uuid::new_v4()));
            assert!(
                !can_perform(&actor, Action::DeleteUser, Target::User(&actor)),
                "self-delete must be denied for {role}"
            );
        }
    }

    #[test]
    fn test_super_admin_can_delete_other_user() {
        let actor = user(Role::SuperAdmin, None);
        let other = user(Role::Member, None);
        assert!(can_perform(&actor, Action::DeleteUser, Target::User(&other)));
    }

    #[test]
    fn test_edit_org_allows_owner_and_listed_admins() {
        let owner = user(Role::Member, None);
        let admin = user(Role::Member, None);
        let outsider = user(Role::Member, None);
        let organization = org(&owner, vec![admin.id]);

        assert!(can_perform(&owner, Action::EditOrg, Target::Organization(&organization)));
        assert!(can_perform(&admin, Action::EditOrg, Target::Organization(&organization)));
        assert!(!can_perform(
            &outsider,
            Action::EditOrg,
            Target::Organization(&organization)
        ));
    }

    #[test]
    fn test_create_team_requires_an_organization() {
        let homeless_admin = user(Role::OrgAdmin, None);
        assert!(!can_perform(&homeless_admin, Action::CreateTeam, Target::None));

        let org_admin = user(Role::OrgAdmin, Some(Uuid::new_v4()));
        assert!(can_perform(&org_admin, Action::CreateTeam, Target::None));

        let team_lead = user(Role::TeamLead, Some(Uuid::new_v4()));
        assert!(can_perform(&team_lead, Action::CreateTeam, Target::None));

        let member = user(Role::Member, Some(Uuid::new_v4()));
        assert!(!can_perform(&member, Action::CreateTeam, Target::None));
    }

    #[test]
    fn test_role_assignment_ceiling() {
        let super_admin = user(Role::SuperAdmin, None);
        let org_admin = user(Role::OrgAdmin, Some(Uuid::new_v4()));
        let team_lead = user(Role::TeamLead, Some(Uuid::new_v4()));

        assert!(can_assign_role(&super_admin, Role::OrgAdmin));
        assert!(can_assign_role(&super_admin, Role::Viewer));
        assert!(!can_assign_role(&super_admin, Role::SuperAdmin));

        assert!(can_assign_role(&org_admin, Role::TeamLead));
        assert!(can_assign_role(&org_admin, Role::Member));
        assert!(can_assign_role(&org_admin, Role::Viewer));
        assert!(!can_assign_role(&org_admin, Role::OrgAdmin));
        assert!(!can_assign_role(&org_admin, Role::SuperAdmin));

        assert!(assignable_roles(&team_lead).is_empty());
    }

    #[test]
    fn test_assignable_roles_ordering() {
        let super_admin = user(Role::SuperAdmin, None);
        assert_eq!(
            assignable_roles(&super_admin),
            vec![Role::OrgAdmin, Role::TeamLead, Role::Member, Role::Viewer]
        );
    }
}
