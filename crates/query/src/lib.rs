pub mod search;
pub mod stats;

pub use search::{filter, matches, Searchable};
pub use stats::{
    organization_stats, team_stats, user_stats, OrganizationStats, TeamStats, UserStats,
};
