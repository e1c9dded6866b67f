//! CLI Argument Parsing
//!
//! - Global flags (--json, --color, --verbose, --dry-run, host selection) are
//!   inherited by both subcommands
//! - Campaign fields omitted from `deploy-emergency-banner` are prompted for

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Deploy or remove the emergency banner on static and frontend
#[derive(Parser, Debug)]
#[command(name = "emergency-banner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./emergency-banner.toml, then the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Host role to target
    #[arg(long, global = true, default_value = "class-frontend")]
    pub role: String,

    /// Comma-separated hosts, bypassing the role table
    #[arg(long, global = true, env = "BANNER_HOSTS", value_name = "HOSTS")]
    pub hosts: Option<String>,

    /// Print the remote commands without running them
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deploy an emergency banner
    DeployEmergencyBanner(DeployArgs),

    /// Remove all banners
    RemoveEmergencyBanner,
}

/// Campaign fields; any left out are asked interactively
#[derive(Args, Debug, Default)]
pub struct DeployArgs {
    /// Banner heading
    #[arg(long)]
    pub heading: Option<String>,

    /// Short description shown under the heading
    #[arg(long)]
    pub extra_info: Option<String>,

    /// "More information" link; pass an empty string for none
    #[arg(long)]
    pub more_info_url: Option<String>,

    /// One of red, black, green
    #[arg(long)]
    pub campaign_class: Option<String>,
}
