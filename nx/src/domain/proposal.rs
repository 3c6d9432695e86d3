//! Community proposals

use chrono::{DateTime, Utc};

/// Lifecycle of a proposal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProposalStatus {
    #[default]
    Pending,
    Active,
    Completed,
}

impl ProposalStatus {
    /// Label shown in the console
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "pendiente",
            Self::Active => "activa",
            Self::Completed => "completada",
        }
    }
}

impl std::fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Active => write!(f, "active"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// A votable suggestion
///
/// `votes` is signed and has no floor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    pub id: String,
    pub title: String,
    pub description: String,
    pub author_id: String,
    pub author_name: String,
    pub votes: i64,
    pub status: ProposalStatus,
    pub created_at: DateTime<Utc>,
}
