//! Console rendering
//!
//! Every function returns the text to print so the console loop decides
//! when output reaches the terminal.

use std::fmt::Write;

use colored::Colorize;

use super::state::{ConsoleState, Theme, View};
use crate::domain::mock;
use crate::session::{ConversationSession, SessionMode, Speaker};
use crate::state::DomainStore;

/// Navigation bar with the active view highlighted
pub fn render_header(ui: &ConsoleState) -> String {
    let accent = ui.theme.accent();
    let tabs: Vec<String> = View::ALL
        .iter()
        .map(|v| {
            if *v == ui.view {
                format!("[{}]", v.label()).color(accent).bold().to_string()
            } else {
                v.label().dimmed().to_string()
            }
        })
        .collect();
    format!("{} │ {}", "NEXUS GRID OS".color(accent).bold(), tabs.join(" "))
}

/// Body of the active view
pub fn render_view(ui: &ConsoleState, store: &DomainStore) -> String {
    match ui.view {
        View::Dashboard => render_dashboard(ui.theme, store),
        View::Teams => render_teams(ui.theme, store),
        View::Proposals => render_proposals(ui.theme, store),
        View::Awards => render_awards(ui.theme, store),
        View::Settings => render_settings(ui.theme, store),
    }
}

fn render_dashboard(theme: Theme, store: &DomainStore) -> String {
    let accent = theme.accent();
    let state = store.state();
    let mut out = String::new();

    match store.current_user() {
        Some(user) => {
            let _ = writeln!(out, "{}", "OPERADOR".color(accent).bold());
            let _ = writeln!(out, "  {}", user.name.bold());
            let _ = writeln!(out, "  Puntos: {}   Rango: #{}", user.points, user.rank);
            let _ = writeln!(out, "  Insignias: {}", user.badges.len());
        }
        None => {
            let _ = writeln!(out, "{}", "Sin usuario activo".dimmed());
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "CLASIFICACIÓN".color(accent).bold());
    for (i, row) in state.rankings.iter().enumerate() {
        let _ = writeln!(out, "  {:>2}. {:<8} {:>6} pts", i + 1, row.user_id, row.score);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "ESCUADRONES".color(accent).bold());
    for team in &state.teams {
        let _ = writeln!(out, "  #{} {} {} ({} pts)", team.rank, team.logo, team.name, team.points);
    }

    out
}

fn render_teams(theme: Theme, store: &DomainStore) -> String {
    let accent = theme.accent();
    let own_team = store.current_user().and_then(|u| u.team_id.as_deref());
    let mut out = String::new();

    for team in &store.state().teams {
        let marker = if own_team == Some(team.id.as_str()) { " (tu escuadrón)" } else { "" };
        let _ = writeln!(
            out,
            "{} {}{}",
            team.logo,
            team.name.color(accent).bold(),
            marker.dimmed()
        );
        let _ = writeln!(out, "  Rango #{} · {} pts · {} miembros", team.rank, team.points, team.members.len());
        let _ = writeln!(out, "  {}", team.description);
        if !team.members.is_empty() {
            let _ = writeln!(out, "  Miembros: {}", team.members.join(", "));
        }
        let _ = writeln!(out);
    }

    out
}

fn render_proposals(theme: Theme, store: &DomainStore) -> String {
    let accent = theme.accent();
    let mut out = String::new();

    let _ = writeln!(out, "{}", "PROPUESTAS".color(accent).bold());
    for p in &store.state().proposals {
        let _ = writeln!(
            out,
            "  [{}] {} {:>4} votos  {}  por {}",
            p.id.color(accent),
            p.title.bold(),
            p.votes,
            p.status.label().dimmed(),
            p.author_name
        );
    }
    let _ = writeln!(out, "  {}", "/up <id> · /down <id> · /propose <título>".dimmed());

    out
}

fn render_awards(theme: Theme, store: &DomainStore) -> String {
    let accent = theme.accent();
    let mut out = String::new();

    let _ = writeln!(out, "{}", "MÉRITOS".color(accent).bold());
    for badge in mock::badges() {
        let unlocked = store.current_user().is_some_and(|u| u.has_badge(&badge.id));
        let status = if unlocked {
            "DESBLOQUEADA".color(accent).to_string()
        } else {
            "bloqueada".dimmed().to_string()
        };
        let _ = writeln!(out, "  {} {:<22} {}  {}", badge.icon, badge.name, status, badge.description);
    }

    out
}

fn render_settings(theme: Theme, store: &DomainStore) -> String {
    let accent = theme.accent();
    let mut out = String::new();

    let _ = writeln!(out, "{}", "INTERFAZ".color(accent).bold());
    let themes: Vec<String> = Theme::ALL
        .iter()
        .map(|t| {
            if *t == theme {
                format!("[{}]", t).color(t.accent()).bold().to_string()
            } else {
                t.to_string().color(t.accent()).to_string()
            }
        })
        .collect();
    let _ = writeln!(out, "  Tema: {}", themes.join(" "));

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "FICHA DE IDENTIDAD".color(accent).bold());
    match store.current_user() {
        Some(user) => {
            let _ = writeln!(out, "  Codename: {}", user.name);
            let _ = writeln!(out, "  Enlace:   {}", user.email);
            let _ = writeln!(out, "  Avatar:   {}", user.avatar);
        }
        None => {
            let _ = writeln!(out, "  {}", "Sin usuario activo".dimmed());
        }
    }

    out
}

/// Chat widget: launcher when closed, title bar when minimized, transcript
/// when open. The newest message is always printed last.
pub fn render_chat(theme: Theme, session: &ConversationSession) -> String {
    let accent = theme.accent();
    match session.mode() {
        SessionMode::Closed => format!("{}", "[◉ Nexus Core] /chat para abrir".color(accent)),
        SessionMode::Minimized => format!("{} {}", "NEXUS_CORE_V4".color(accent).bold(), "(minimizado, /min)".dimmed()),
        SessionMode::Open => {
            let mut out = String::new();
            let _ = writeln!(out, "{}", "NEXUS_CORE_V4".color(accent).bold());
            for msg in session.transcript() {
                let who = match msg.role {
                    Speaker::User => "tú".color(accent).bold().to_string(),
                    Speaker::Bot => "nexus".bright_white().bold().to_string(),
                };
                let _ = writeln!(out, "{} {} {}", msg.time.dimmed(), who, msg.text);
            }
            out
        }
    }
}

/// Help text
pub fn render_help(theme: Theme) -> String {
    let accent = theme.accent();
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Comandos:".color(accent));
    for (cmd, desc) in [
        ("/view <vista>", "dashboard, teams, proposals, awards, settings"),
        ("/up <id>", "Votar a favor de una propuesta"),
        ("/down <id>", "Votar en contra de una propuesta"),
        ("/propose <título>", "Enviar una propuesta"),
        ("/name <codename>", "Cambiar tu codename"),
        ("/email <dirección>", "Cambiar tu enlace de comunicación"),
        ("/team-desc <texto>", "Describir tu escuadrón (solo admin)"),
        ("/avatar", "Regenerar avatar"),
        ("/theme <tema>", "cyan, purple, emerald, rose"),
        ("/chat · /min · /close", "Abrir, minimizar o cerrar Nexus Core"),
        ("/logout", "Cerrar sesión"),
        ("/quit", "Salir"),
    ] {
        let _ = writeln!(out, "  {:22} {}", cmd.yellow(), desc);
    }
    out
}
