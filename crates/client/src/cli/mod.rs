//! CLI command definitions.

pub mod activities;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS};

/// CLI client for the Strava API.
#[derive(Debug, Parser)]
#[command(name = "strava")]
#[command(version, about = "CLI client for the Strava API", long_about = None)]
pub struct Cli {
    /// API base URL.
    #[arg(long, global = true, env = "STRAVA_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Bearer access token from an external login flow.
    #[arg(long, global = true, env = "STRAVA_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, global = true, env = "STRAVA_TIMEOUT_SECONDS", default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout: u64,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Two-column key/value table.
    #[default]
    Table,
    /// The API response as received.
    Json,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show one or more activities.
    GetActivity(activities::GetActivityArgs),
    /// Create a manual activity.
    PostActivity(activities::PostActivityArgs),
}

impl Cli {
    /// Client configuration from the parsed flags and their env fallbacks.
    pub fn config(&self) -> ClientConfig {
        let config = ClientConfig::default()
            .with_base_url(&self.base_url)
            .with_timeout_seconds(self.timeout);
        match &self.access_token {
            Some(token) => config.with_access_token(token),
            None => config,
        }
    }

    /// Default log filter for the requested verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "strava_client=warn",
            1 => "strava_client=info",
            2 => "strava_client=debug",
            _ => "strava_client=trace,reqwest=debug",
        }
    }
}
