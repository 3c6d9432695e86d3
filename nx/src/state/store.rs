//! DomainStore - owner of the competition state
//!
//! Every mutation is synchronous. Operations that name a record that does
//! not exist are silent no-ops; there is no error channel.

use chrono::Utc;
use tracing::debug;

use crate::domain::{
    Proposal, ProposalStatus, Ranking, Team, TeamPatch, User, UserPatch, generate_proposal_id, mock,
};

/// Description given to every proposal submitted from the console
pub const DEFAULT_PROPOSAL_DESCRIPTION: &str =
    "Propuesta de optimización estratégica enviada al núcleo de decisión.";

/// Snapshot of everything the competition knows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainState {
    pub current_user: Option<User>,
    pub teams: Vec<Team>,
    pub proposals: Vec<Proposal>,
    pub rankings: Vec<Ranking>,
}

/// Owner of the [`DomainState`]
#[derive(Debug, Clone, Default)]
pub struct DomainStore {
    state: DomainState,
}

impl DomainStore {
    /// Wrap an existing state
    pub fn new(state: DomainState) -> Self {
        Self { state }
    }

    /// Seed from mock data, signed in as the given mock user
    ///
    /// An unknown `user_id` leaves the store without a current user.
    pub fn seeded_as(user_id: &str) -> Self {
        debug!(%user_id, "seeded_as: called");
        let current_user = mock::users().into_iter().find(|u| u.id == user_id);
        if current_user.is_none() {
            debug!(%user_id, "seeded_as: no such mock user");
        }
        Self::new(DomainState {
            current_user,
            teams: mock::teams(),
            proposals: mock::proposals(),
            rankings: mock::rankings(),
        })
    }

    /// Seed from mock data, signed in as the top-ranked mock user
    pub fn seeded() -> Self {
        Self::seeded_as("u1")
    }

    /// Read access to the live state
    pub fn state(&self) -> &DomainState {
        &self.state
    }

    /// By-value copy for the assistant
    pub fn snapshot(&self) -> DomainState {
        self.state.clone()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.state.current_user.as_ref()
    }

    pub fn team(&self, team_id: &str) -> Option<&Team> {
        self.state.teams.iter().find(|t| t.id == team_id)
    }

    pub fn proposal(&self, proposal_id: &str) -> Option<&Proposal> {
        self.state.proposals.iter().find(|p| p.id == proposal_id)
    }

    /// Add `delta` to a proposal's vote count
    pub fn cast_vote(&mut self, proposal_id: &str, delta: i64) {
        debug!(%proposal_id, %delta, "cast_vote: called");
        match self.state.proposals.iter_mut().find(|p| p.id == proposal_id) {
            Some(proposal) => {
                proposal.votes += delta;
                debug!(votes = proposal.votes, "cast_vote: applied");
            }
            None => debug!(%proposal_id, "cast_vote: unknown proposal"),
        }
    }

    /// Prepend a new proposal authored by the current user
    ///
    /// Returns the new id, or `None` when the title is absent or empty or
    /// nobody is signed in.
    pub fn submit_proposal(&mut self, title: Option<&str>) -> Option<String> {
        debug!(?title, "submit_proposal: called");
        let title = title.filter(|t| !t.is_empty())?;
        let author = self.state.current_user.as_ref()?;

        let id = generate_proposal_id(self.state.proposals.iter().map(|p| p.id.as_str()));
        let proposal = Proposal {
            id: id.clone(),
            title: title.to_string(),
            description: DEFAULT_PROPOSAL_DESCRIPTION.to_string(),
            author_id: author.id.clone(),
            author_name: author.name.clone(),
            votes: 1,
            status: ProposalStatus::Pending,
            created_at: Utc::now(),
        };

        debug!(%id, status = %proposal.status, "submit_proposal: created");
        self.state.proposals.insert(0, proposal);
        Some(id)
    }

    /// Shallow-merge `patch` into the current user
    pub fn update_current_user(&mut self, patch: UserPatch) {
        debug!(?patch, "update_current_user: called");
        match self.state.current_user.as_mut() {
            Some(user) => patch.apply(user),
            None => debug!("update_current_user: no current user"),
        }
    }

    /// Shallow-merge `patch` into the matching team
    pub fn update_team(&mut self, team_id: &str, patch: TeamPatch) {
        debug!(%team_id, ?patch, "update_team: called");
        match self.state.teams.iter_mut().find(|t| t.id == team_id) {
            Some(team) => patch.apply(team),
            None => debug!(%team_id, "update_team: unknown team"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_seeded_signs_in_first_user() {
        let store = DomainStore::seeded();
        assert_eq!(store.current_user().map(|u| u.id.as_str()), Some("u1"));
        assert_eq!(store.state().teams.len(), 2);
        assert_eq!(store.state().proposals.len(), 2);
        assert_eq!(store.state().rankings.len(), 2);
    }

    #[test]
    fn test_seeded_as_unknown_user_has_no_current_user() {
        let store = DomainStore::seeded_as("nobody");
        assert!(store.current_user().is_none());
    }

    #[test]
    fn test_cast_vote_inverse() {
        let mut store = DomainStore::seeded();
        store.cast_vote("p1", 1);
        assert_eq!(store.proposal("p1").unwrap().votes, 43);
        store.cast_vote("p1", -1);
        assert_eq!(store.proposal("p1").unwrap().votes, 42);
    }

    #[test]
    fn test_cast_vote_unknown_id_is_noop() {
        let mut store = DomainStore::seeded();
        let before = store.state().proposals.clone();
        store.cast_vote("nope", 1);
        store.cast_vote("nope", -1);
        assert_eq!(store.state().proposals, before);
    }

    #[test]
    fn test_cast_vote_has_no_floor() {
        let mut store = DomainStore::seeded();
        for _ in 0..50 {
            store.cast_vote("p2", -1);
        }
        assert_eq!(store.proposal("p2").unwrap().votes, -22);
    }

    #[test]
    fn test_submit_proposal_rejects_empty_and_absent() {
        let mut store = DomainStore::seeded();
        let before = store.state().proposals.clone();

        assert!(store.submit_proposal(Some("")).is_none());
        assert!(store.submit_proposal(None).is_none());
        assert_eq!(store.state().proposals, before);
    }

    #[test]
    fn test_submit_proposal_prepends() {
        let mut store = DomainStore::seeded();
        let old_ids: Vec<String> = store.state().proposals.iter().map(|p| p.id.clone()).collect();

        let id = store.submit_proposal(Some("Faster Nodes")).unwrap();

        let proposals = &store.state().proposals;
        assert_eq!(proposals.len(), 3);
        let first = &proposals[0];
        assert_eq!(first.id, id);
        assert!(!old_ids.contains(&id));
        assert_eq!(first.title, "Faster Nodes");
        assert_eq!(first.votes, 1);
        assert_eq!(first.status, ProposalStatus::Pending);
        assert_eq!(first.author_id, "u1");
        assert_eq!(first.author_name, "Neo Spectra");
        assert_eq!(first.description, DEFAULT_PROPOSAL_DESCRIPTION);
        assert_eq!(proposals[1].id, "p1");
    }

    #[test]
    fn test_submit_proposal_without_user_is_noop() {
        let mut store = DomainStore::seeded_as("nobody");
        assert!(store.submit_proposal(Some("Faster Nodes")).is_none());
        assert_eq!(store.state().proposals.len(), 2);
    }

    #[test]
    fn test_update_current_user() {
        let mut store = DomainStore::seeded();
        store.update_current_user(UserPatch {
            email: Some("neo@grid.io".to_string()),
            ..Default::default()
        });
        let user = store.current_user().unwrap();
        assert_eq!(user.email, "neo@grid.io");
        assert_eq!(user.name, "Neo Spectra");
    }

    #[test]
    fn test_update_current_user_without_user_is_noop() {
        let mut store = DomainStore::seeded_as("nobody");
        let before = store.snapshot();
        store.update_current_user(UserPatch {
            name: Some("Ghost".to_string()),
            ..Default::default()
        });
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_update_team() {
        let mut store = DomainStore::seeded();
        store.update_team(
            "t2",
            TeamPatch {
                description: Some("Silencio absoluto.".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(store.team("t2").unwrap().description, "Silencio absoluto.");
        assert_eq!(store.team("t1").unwrap().description, mock::teams()[0].description);
    }

    #[test]
    fn test_update_team_unknown_id_is_noop() {
        let mut store = DomainStore::seeded();
        let before = store.state().teams.clone();
        store.update_team(
            "t9",
            TeamPatch {
                points: Some(1),
                ..Default::default()
            },
        );
        assert_eq!(store.state().teams, before);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut store = DomainStore::seeded();
        let snapshot = store.snapshot();
        store.cast_vote("p1", 5);
        assert_eq!(snapshot.proposals[0].votes, 42);
    }

    proptest! {
        #[test]
        fn prop_vote_up_then_down_restores(start in -1000i64..1000, idx in 0usize..2) {
            let mut store = DomainStore::seeded();
            let id = store.state().proposals[idx].id.clone();
            store.cast_vote(&id, start);
            let before = store.proposal(&id).unwrap().votes;

            store.cast_vote(&id, 1);
            store.cast_vote(&id, -1);
            prop_assert_eq!(store.proposal(&id).unwrap().votes, before);

            store.cast_vote(&id, -1);
            store.cast_vote(&id, 1);
            prop_assert_eq!(store.proposal(&id).unwrap().votes, before);
        }

        #[test]
        fn prop_vote_unknown_id_never_changes_proposals(id in "[a-z]{3,8}", delta in -5i64..5) {
            prop_assume!(id != "p1" && id != "p2");
            let mut store = DomainStore::seeded();
            let before = store.state().proposals.clone();
            store.cast_vote(&id, delta);
            prop_assert_eq!(&store.state().proposals, &before);
        }
    }
}
