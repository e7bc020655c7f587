pub mod engine;

pub use engine::{assignable_roles, can_assign_role, can_perform, Action, Target};
