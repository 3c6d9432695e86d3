//! CLI definition

use clap::Parser;
use std::path::PathBuf;

use crate::console::Theme;

/// Neon Nexus - competition console with the Nexus Core assistant
#[derive(Debug, Parser)]
#[command(
    name = "nx",
    about = "Neon Nexus competition console with the Nexus Core assistant",
    version,
    after_help = "Logs are written to: ~/.local/share/nexus/logs/nexus.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Accent theme, overrides the config file
    #[arg(short, long, value_enum)]
    pub theme: Option<Theme>,
}
