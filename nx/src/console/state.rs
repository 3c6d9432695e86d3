//! Console application state
//!
//! Pure data: which view is shown, the accent theme and whether the
//! decorative login has been passed. No rendering here.

use clap::ValueEnum;
use colored::Color;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Status words shown while Nexus Core is thinking
pub const BUSY_WORDS: &[&str] = &[
    "Calculando",
    "Sincronizando",
    "Triangulando",
    "Descifrando",
    "Recalibrando",
    "Escaneando",
];

/// Pick a random status word for the busy indicator
pub fn busy_word() -> &'static str {
    BUSY_WORDS.choose(&mut rand::rng()).copied().unwrap_or("Procesando")
}

/// Which screen is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Teams,
    Proposals,
    Awards,
    Settings,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Dashboard,
        View::Teams,
        View::Proposals,
        View::Awards,
        View::Settings,
    ];

    /// Navigation label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Consola",
            Self::Teams => "Escuadrones",
            Self::Proposals => "Estrategia",
            Self::Awards => "Méritos",
            Self::Settings => "Núcleo",
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "dashboard"),
            Self::Teams => write!(f, "teams"),
            Self::Proposals => write!(f, "proposals"),
            Self::Awards => write!(f, "awards"),
            Self::Settings => write!(f, "settings"),
        }
    }
}

impl std::str::FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dashboard" | "dash" | "consola" => Ok(Self::Dashboard),
            "teams" | "escuadrones" => Ok(Self::Teams),
            "proposals" | "props" | "estrategia" => Ok(Self::Proposals),
            "awards" | "méritos" | "meritos" => Ok(Self::Awards),
            "settings" | "núcleo" | "nucleo" => Ok(Self::Settings),
            _ => Err(format!("Unknown view: {}", s)),
        }
    }
}

/// Accent color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Cyan,
    Purple,
    Emerald,
    Rose,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Cyan, Theme::Purple, Theme::Emerald, Theme::Rose];

    /// Terminal color used for accents
    pub fn accent(&self) -> Color {
        match self {
            Self::Cyan => Color::BrightCyan,
            Self::Purple => Color::BrightMagenta,
            Self::Emerald => Color::BrightGreen,
            Self::Rose => Color::BrightRed,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cyan => write!(f, "cyan"),
            Self::Purple => write!(f, "purple"),
            Self::Emerald => write!(f, "emerald"),
            Self::Rose => write!(f, "rose"),
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cyan" => Ok(Self::Cyan),
            "purple" => Ok(Self::Purple),
            "emerald" => Ok(Self::Emerald),
            "rose" => Ok(Self::Rose),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

/// Login form mode; purely cosmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }
}

/// UI state owned by the console
#[derive(Debug, Clone, Default)]
pub struct ConsoleState {
    pub view: View,
    pub theme: Theme,
    pub authenticated: bool,
    pub auth_mode: AuthMode,
}

impl ConsoleState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }

    /// Any credentials are accepted
    pub fn log_in(&mut self) {
        debug!(mode = ?self.auth_mode, "log_in: called");
        self.authenticated = true;
    }

    /// Back to the login screen; the view resets to the dashboard
    pub fn log_out(&mut self) {
        debug!("log_out: called");
        self.authenticated = false;
        self.view = View::Dashboard;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_parse() {
        assert_eq!("teams".parse::<View>().unwrap(), View::Teams);
        assert_eq!("Estrategia".parse::<View>().unwrap(), View::Proposals);
        assert_eq!("méritos".parse::<View>().unwrap(), View::Awards);
        assert!("leaderboard".parse::<View>().is_err());
    }

    #[test]
    fn test_view_display_round_trips_through_parse() {
        for view in View::ALL {
            assert_eq!(view.to_string().parse::<View>().unwrap(), view);
        }
    }

    #[test]
    fn test_theme_parse_and_serde() {
        assert_eq!("ROSE".parse::<Theme>().unwrap(), Theme::Rose);
        assert!("amber".parse::<Theme>().is_err());

        let json = serde_json::to_string(&Theme::Emerald).unwrap();
        assert_eq!(json, "\"emerald\"");
    }

    #[test]
    fn test_login_logout() {
        let mut state = ConsoleState::new(Theme::Purple);
        assert!(!state.authenticated);

        state.log_in();
        state.view = View::Settings;
        assert!(state.authenticated);

        state.log_out();
        assert!(!state.authenticated);
        assert_eq!(state.view, View::Dashboard);
        assert_eq!(state.theme, Theme::Purple);
    }

    #[test]
    fn test_auth_mode_toggle() {
        assert_eq!(AuthMode::Login.toggled(), AuthMode::Register);
        assert_eq!(AuthMode::Register.toggled(), AuthMode::Login);
    }

    #[test]
    fn test_busy_word() {
        assert!(BUSY_WORDS.contains(&busy_word()));
    }
}
