//! Prompt building for the Nexus Core assistant
//!
//! [`build_context`] projects the competition state into a short summary;
//! [`PromptLoader`] renders it into the persona template.

mod context;
mod embedded;
mod loader;

pub use context::{NO_ACTIVE_USER, TOP_TEAMS, build_context};
pub use loader::{PromptContext, PromptLoader};
