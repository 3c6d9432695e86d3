//! Conversation session for the Nexus Core chat widget
//!
//! Holds the transcript, the busy flag and the widget mode. The busy flag is
//! the only backpressure: while an exchange is in flight every further
//! submission is silently dropped.

use chrono::Local;
use tracing::debug;

use crate::assistant::Assistant;
use crate::state::DomainState;

/// Greeting seeded into every new session
pub const GREETING: &str =
    "CANAL ESTABLECIDO. Soy Nexus Core v4.0. Consultas de ranking y estado operativo listas. ¿Cuál es tu comando?";

/// Who wrote a transcript line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
}

/// One transcript line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Speaker,
    pub text: String,
    /// Local wall-clock time, `HH:MM:SS`
    pub time: String,
}

impl ChatMessage {
    fn now(role: Speaker, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            time: Local::now().format("%H:%M:%S").to_string(),
        }
    }
}

/// Widget visibility, derived from the open and minimized flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionMode {
    #[default]
    Closed,
    Open,
    Minimized,
}

/// An accepted submission awaiting its reply
///
/// Returned by [`ConversationSession::begin`]; hand it back to
/// [`ConversationSession::finish`] once the assistant has answered.
#[derive(Debug)]
#[must_use = "an exchange left unfinished keeps the session busy"]
pub struct PendingExchange {
    utterance: String,
}

impl PendingExchange {
    pub fn utterance(&self) -> &str {
        &self.utterance
    }
}

/// Chat session state machine
#[derive(Debug, Clone)]
pub struct ConversationSession {
    open: bool,
    /// Survives close, so a reopened widget comes back minimized
    minimized: bool,
    busy: bool,
    messages: Vec<ChatMessage>,
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationSession {
    /// New closed session with the greeting already in the transcript
    pub fn new() -> Self {
        Self {
            open: false,
            minimized: false,
            busy: false,
            messages: vec![ChatMessage::now(Speaker::Bot, GREETING)],
        }
    }

    pub fn mode(&self) -> SessionMode {
        match (self.open, self.minimized) {
            (false, _) => SessionMode::Closed,
            (true, true) => SessionMode::Minimized,
            (true, false) => SessionMode::Open,
        }
    }

    /// Open and not minimized: the transcript is visible and takes input
    pub fn is_expanded(&self) -> bool {
        self.mode() == SessionMode::Open
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Messages in the order they were appended
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Launcher: show the widget
    pub fn open(&mut self) {
        debug!(mode = ?self.mode(), "open: called");
        self.open = true;
    }

    /// Hide the widget; the transcript is kept
    pub fn close(&mut self) {
        debug!(mode = ?self.mode(), "close: called");
        self.open = false;
    }

    /// Switch between open and minimized; ignored while closed
    pub fn toggle_minimized(&mut self) {
        if self.open {
            self.minimized = !self.minimized;
        }
        debug!(mode = ?self.mode(), "toggle_minimized: now");
    }

    /// Accept a submission if the session can take it
    ///
    /// Blank input or a busy session yields `None` and changes nothing.
    /// Otherwise the user line is appended and the session turns busy.
    pub fn begin(&mut self, utterance: &str) -> Option<PendingExchange> {
        if utterance.trim().is_empty() || self.busy {
            return None;
        }

        self.messages.push(ChatMessage::now(Speaker::User, utterance));
        self.busy = true;
        debug!(message_count = self.messages.len(), "begin: exchange started");
        Some(PendingExchange {
            utterance: utterance.to_string(),
        })
    }

    /// Append the bot's reply and clear busy
    pub fn finish(&mut self, exchange: PendingExchange, reply: impl Into<String>) {
        debug!(utterance_len = exchange.utterance.len(), "finish: called");
        self.messages.push(ChatMessage::now(Speaker::Bot, reply));
        self.busy = false;
    }

    /// Run one full exchange against the assistant
    ///
    /// Returns `false` when the submission was dropped by the guards.
    pub async fn submit(&mut self, utterance: &str, assistant: &Assistant, snapshot: &DomainState) -> bool {
        let Some(exchange) = self.begin(utterance) else {
            return false;
        };
        let reply = assistant.reply(exchange.utterance(), snapshot).await;
        self.finish(exchange, reply);
        true
    }
}
