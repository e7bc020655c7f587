use crate::remote::Entity;
use admin_models::{Organization, Team, User};
use uuid::Uuid;

impl Entity for Organization {
    fn id(&self) -> Uuid {
        self.id
    }

    fn kind() -> &'static str {
        "organization"
    }
}

impl Entity for Team {
    fn id(&self) -> Uuid {
        self.id
    }

    fn kind() -> &'static str {
        "team"
    }
}

impl Entity for User {
    fn id(&self) -> Uuid {
        self.id
    }

    fn kind() -> &'static str {
        "user"
    }
}
