//! Interactive competition console
//!
//! Terminal rendition of the Neon Nexus dashboard: a decorative login, five
//! views, theme switching and the Nexus Core chat widget.

mod commands;
mod state;
mod views;

pub use commands::{Command, parse};
pub use state::{AuthMode, BUSY_WORDS, ConsoleState, Theme, View, busy_word};

use colored::Colorize;
use eyre::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::{debug, info};

use crate::assistant::Assistant;
use crate::domain::{TeamPatch, UserPatch, mock, random_seed};
use crate::session::ConversationSession;
use crate::state::DomainStore;

/// What the loop should do after handling a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print this and keep reading
    Continue(String),
    /// Return to the login screen
    Logout,
    /// Leave the console
    Quit,
}

/// The running application: state, chat session and assistant
pub struct Console {
    store: DomainStore,
    session: ConversationSession,
    assistant: Assistant,
    ui: ConsoleState,
}

impl Console {
    pub fn new(store: DomainStore, assistant: Assistant, theme: Theme) -> Self {
        Self {
            store,
            session: ConversationSession::new(),
            assistant,
            ui: ConsoleState::new(theme),
        }
    }

    pub fn store(&self) -> &DomainStore {
        &self.store
    }

    pub fn session(&self) -> &ConversationSession {
        &self.session
    }

    pub fn ui(&self) -> &ConsoleState {
        &self.ui
    }

    /// Full screen: navigation, active view and chat widget
    pub fn render(&self) -> String {
        format!(
            "{}\n\n{}\n{}",
            views::render_header(&self.ui),
            views::render_view(&self.ui, &self.store),
            views::render_chat(self.ui.theme, &self.session)
        )
    }

    /// Handle one line of input
    pub async fn handle(&mut self, input: &str) -> Outcome {
        let command = parse(input);
        debug!(?command, "handle: parsed");

        match command {
            Command::Help => Outcome::Continue(views::render_help(self.ui.theme)),
            Command::Quit => Outcome::Quit,
            Command::Logout => {
                self.ui.log_out();
                Outcome::Logout
            }
            Command::Show(view) => {
                self.ui.view = view;
                Outcome::Continue(self.render())
            }
            Command::SetTheme(theme) => {
                self.ui.theme = theme;
                info!(%theme, "Theme changed");
                Outcome::Continue(self.render())
            }
            Command::Vote { proposal_id, delta } => {
                self.store.cast_vote(&proposal_id, delta);
                Outcome::Continue(self.render())
            }
            Command::Propose(title) => {
                if let Some(id) = self.store.submit_proposal(title.as_deref()) {
                    info!(%id, "Proposal submitted");
                    self.ui.view = View::Proposals;
                }
                Outcome::Continue(self.render())
            }
            Command::Rename(name) => {
                self.store.update_current_user(UserPatch {
                    name: Some(name),
                    ..Default::default()
                });
                Outcome::Continue(self.render())
            }
            Command::Email(email) => {
                self.store.update_current_user(UserPatch {
                    email: Some(email),
                    ..Default::default()
                });
                Outcome::Continue(self.render())
            }
            Command::ReseedAvatar => {
                self.store.update_current_user(UserPatch {
                    avatar: Some(mock::avatar_url(&random_seed())),
                    ..Default::default()
                });
                Outcome::Continue(self.render())
            }
            Command::TeamDescription(text) => self.update_own_team(text),
            Command::ChatOpen => {
                self.session.open();
                Outcome::Continue(self.render())
            }
            Command::ChatMinimize => {
                self.session.toggle_minimized();
                Outcome::Continue(self.render())
            }
            Command::ChatClose => {
                self.session.close();
                Outcome::Continue(self.render())
            }
            Command::Say(text) => self.say(&text).await,
            Command::Invalid(message) => Outcome::Continue(format!(
                "{} {}\nEscribe {} para ver los comandos",
                "?".yellow(),
                message,
                "/help".yellow()
            )),
        }
    }

    /// Only a team admin may edit the team description
    fn update_own_team(&mut self, text: String) -> Outcome {
        let team_id = self
            .store
            .current_user()
            .filter(|u| u.is_team_admin)
            .and_then(|u| u.team_id.clone());

        match team_id {
            Some(team_id) => {
                self.store.update_team(
                    &team_id,
                    TeamPatch {
                        description: Some(text),
                        ..Default::default()
                    },
                );
                self.ui.view = View::Teams;
                Outcome::Continue(self.render())
            }
            None => Outcome::Continue(format!("{}", "Solo el admin del escuadrón puede editarlo.".dimmed())),
        }
    }

    async fn say(&mut self, text: &str) -> Outcome {
        if !self.session.is_expanded() {
            if text.trim().is_empty() {
                return Outcome::Continue(String::new());
            }
            return Outcome::Continue(format!(
                "{}",
                "Nexus Core no está abierto. Usa /chat para abrir el canal.".dimmed()
            ));
        }

        let snapshot = self.store.snapshot();
        let Some(exchange) = self.session.begin(text) else {
            return Outcome::Continue(String::new());
        };

        println!("{}", format!("{}...", busy_word()).color(self.ui.theme.accent()).italic());
        let reply = self.assistant.reply(exchange.utterance(), &snapshot).await;
        self.session.finish(exchange, reply);

        Outcome::Continue(views::render_chat(self.ui.theme, &self.session))
    }
}

/// Decorative login: any credentials open the console
fn login(rl: &mut DefaultEditor, ui: &mut ConsoleState) -> Result<bool> {
    let accent = ui.theme.accent();
    println!();
    println!("{}", "NEXUS CORE".color(accent).bold());
    println!("{}", "Despliegue de Red v4.0".dimmed());

    loop {
        let title = match ui.auth_mode {
            AuthMode::Login => "ACCESO",
            AuthMode::Register => "REGISTRO",
        };
        println!();
        println!("{} {}", title.color(accent).bold(), "(/register para cambiar de modo)".dimmed());

        if ui.auth_mode == AuthMode::Register {
            match read_field(rl, "Alias Neural")? {
                Some(_) => {}
                None => return Ok(false),
            }
        }
        let email = match read_field(rl, "Identificador (Email)")? {
            Some(email) => email,
            None => return Ok(false),
        };
        if email.trim() == "/register" {
            ui.auth_mode = ui.auth_mode.toggled();
            continue;
        }
        if read_field(rl, "Código de Acceso")?.is_none() {
            return Ok(false);
        }

        ui.log_in();
        info!("Console unlocked");
        return Ok(true);
    }
}

/// Read one form field; `None` on Ctrl+D
fn read_field(rl: &mut DefaultEditor, label: &str) -> Result<Option<String>> {
    match rl.readline(&format!("{}: ", label)) {
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(err) => Err(eyre::eyre!("Readline error: {}", err)),
    }
}

/// Run the console until the user quits
pub async fn run(mut console: Console) -> Result<()> {
    let mut rl = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;

    'session: loop {
        if !login(&mut rl, &mut console.ui)? {
            break;
        }
        println!();
        println!("{}", console.render());
        println!("Escribe {} para ver los comandos", "/help".yellow());

        loop {
            let prompt = format!("{} ", ">".color(console.ui.theme.accent()));
            match rl.readline(&prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = rl.add_history_entry(line.as_str());
                    }
                    match console.handle(&line).await {
                        Outcome::Continue(output) => {
                            if !output.is_empty() {
                                println!("{}", output);
                            }
                        }
                        Outcome::Logout => continue 'session,
                        Outcome::Quit => break 'session,
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!();
                    break 'session;
                }
                Err(err) => return Err(eyre::eyre!("Readline error: {}", err)),
            }
        }
    }

    println!("Canal cerrado.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::FALLBACK_REPLY;
    use crate::llm::CompletionResponse;
    use crate::llm::client::mock::MockLlmClient;
    use crate::prompts::PromptLoader;
    use crate::session::{SessionMode, Speaker};
    use std::sync::Arc;

    fn console(llm: MockLlmClient) -> Console {
        let assistant = Assistant::new(Arc::new(llm), PromptLoader::embedded_only());
        Console::new(DomainStore::seeded(), assistant, Theme::Cyan)
    }

    #[tokio::test]
    async fn test_vote_commands() {
        let mut c = console(MockLlmClient::new(vec![]));
        c.handle("/up p1").await;
        assert_eq!(c.store().proposal("p1").unwrap().votes, 43);
        c.handle("/down p1").await;
        assert_eq!(c.store().proposal("p1").unwrap().votes, 42);
    }

    #[tokio::test]
    async fn test_propose_switches_to_proposals() {
        let mut c = console(MockLlmClient::new(vec![]));
        c.handle("/propose").await;
        assert_eq!(c.store().state().proposals.len(), 2);

        c.handle("/propose Faster Nodes").await;
        assert_eq!(c.store().state().proposals[0].title, "Faster Nodes");
        assert_eq!(c.ui().view, View::Proposals);
    }

    #[tokio::test]
    async fn test_team_description_requires_admin() {
        let mut c = console(MockLlmClient::new(vec![]));
        c.handle("/team-desc Sin piedad.").await;
        assert_eq!(c.store().team("t1").unwrap().description, "Sin piedad.");

        let assistant = Assistant::new(Arc::new(MockLlmClient::new(vec![])), PromptLoader::embedded_only());
        let mut c = Console::new(DomainStore::seeded_as("u2"), assistant, Theme::Cyan);
        c.handle("/team-desc Sin piedad.").await;
        assert_eq!(c.store().team("t1").unwrap().description, mock::teams()[0].description);
    }

    #[tokio::test]
    async fn test_avatar_reseed_changes_url() {
        let mut c = console(MockLlmClient::new(vec![]));
        let before = c.store().current_user().unwrap().avatar.clone();
        c.handle("/avatar").await;
        let after = &c.store().current_user().unwrap().avatar;
        assert_ne!(&before, after);
        assert!(after.starts_with("https://api.dicebear.com/7.x/avataaars/svg?seed="));
    }

    #[tokio::test]
    async fn test_chat_text_ignored_while_closed() {
        let llm = Arc::new(MockLlmClient::new(vec![CompletionResponse::text("hola")]));
        let assistant = Assistant::new(llm.clone(), PromptLoader::embedded_only());
        let mut c = Console::new(DomainStore::seeded(), assistant, Theme::Cyan);

        c.handle("¿Cuál es mi rango?").await;
        assert_eq!(llm.call_count(), 0);
        assert_eq!(c.session().transcript().len(), 1);
    }

    #[tokio::test]
    async fn test_chat_reopens_minimized() {
        let llm = Arc::new(MockLlmClient::new(vec![CompletionResponse::text("hola")]));
        let assistant = Assistant::new(llm.clone(), PromptLoader::embedded_only());
        let mut c = Console::new(DomainStore::seeded(), assistant, Theme::Cyan);

        c.handle("/chat").await;
        c.handle("/min").await;
        c.handle("/close").await;
        c.handle("/chat").await;
        assert_eq!(c.session().mode(), SessionMode::Minimized);

        c.handle("¿sigues ahí?").await;
        assert_eq!(llm.call_count(), 0);

        c.handle("/min").await;
        c.handle("¿sigues ahí?").await;
        assert_eq!(llm.call_count(), 1);
    }

    #[tokio::test]
    async fn test_chat_round_trip() {
        let mut c = console(MockLlmClient::new(vec![CompletionResponse::text("Rango #1, operador.")]));
        c.handle("/chat").await;
        let out = c.handle("¿Cuál es mi rango?").await;

        assert!(matches!(out, Outcome::Continue(ref s) if s.contains("Rango #1, operador.")));
        let transcript = c.session().transcript();
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[2].role, Speaker::Bot);
        assert!(!c.session().is_busy());
    }

    #[tokio::test]
    async fn test_chat_failure_shows_fallback() {
        let mut c = console(MockLlmClient::failing(500));
        c.handle("/chat").await;
        c.handle("hola").await;
        assert_eq!(c.session().transcript().last().unwrap().text, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_logout_and_quit() {
        let mut c = console(MockLlmClient::new(vec![]));
        assert_eq!(c.handle("/logout").await, Outcome::Logout);
        assert!(!c.ui().authenticated);
        assert_eq!(c.handle("/quit").await, Outcome::Quit);
    }

    #[tokio::test]
    async fn test_theme_and_view_switch() {
        let mut c = console(MockLlmClient::new(vec![]));
        c.handle("/theme rose").await;
        c.handle("/view awards").await;
        assert_eq!(c.ui().theme, Theme::Rose);
        assert_eq!(c.ui().view, View::Awards);
    }
}
