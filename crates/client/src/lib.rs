//! strava_client - CLI client for the Strava activities API.

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use client::StravaClient;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
