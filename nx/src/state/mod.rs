//! In-memory competition state
//!
//! The application owns a single [`DomainStore`]. The assistant only ever
//! sees a cloned [`DomainState`] snapshot.

mod store;

pub use store::{DEFAULT_PROPOSAL_DESCRIPTION, DomainState, DomainStore};
