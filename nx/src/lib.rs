//! Neon Nexus - competition console core
//!
//! Domain state for a hackathon-style competition (operators, squads,
//! proposals, badges) plus the Nexus Core assistant that answers questions
//! about that state through a hosted LLM.
//!
//! # Modules
//!
//! - [`domain`] - Users, teams, proposals and the mock seed data
//! - [`state`] - The domain store and its mutations
//! - [`prompts`] - State summary and persona prompt rendering
//! - [`llm`] - LLM client trait and Gemini implementation
//! - [`assistant`] - One-shot question answering with a fixed fallback
//! - [`session`] - Chat transcript and the busy guard
//! - [`console`] - Interactive terminal front end
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod assistant;
pub mod cli;
pub mod config;
pub mod console;
pub mod domain;
pub mod llm;
pub mod prompts;
pub mod session;
pub mod state;

pub use assistant::{Assistant, AssistantError, FALLBACK_REPLY, TEMPERATURE};
pub use config::{Config, ConsoleConfig, LlmConfig};
pub use domain::{Proposal, ProposalStatus, Team, User};
pub use llm::{GeminiClient, LlmClient, LlmError};
pub use prompts::{PromptLoader, build_context};
pub use session::{ChatMessage, ConversationSession, SessionMode, Speaker};
pub use state::{DomainState, DomainStore};
