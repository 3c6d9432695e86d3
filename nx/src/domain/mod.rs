//! Domain types for the competition
//!
//! Users, teams, proposals and badges. Everything lives in memory; the seed
//! data in [`mock`] is the only source of records.

mod id;
pub mod mock;
mod proposal;
mod team;
mod user;

pub use id::{generate_proposal_id, random_seed};
pub use proposal::{Proposal, ProposalStatus};
pub use team::{Team, TeamPatch};
pub use user::{Badge, User, UserPatch};

/// One leaderboard row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking {
    pub user_id: String,
    pub score: i64,
}
