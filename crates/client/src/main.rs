//! strava CLI entry point.

use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use strava_client::cli::{Cli, Commands};
use strava_client::commands;
use strava_client::output::OutputCtx;
use strava_client::{Result, StravaClient};
use strava_core::activity::{parse_start_date, CreateActivityRequest};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so table and JSON output stay clean on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_filter().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.config();
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::GetActivity(args) => {
            let client = StravaClient::new(&config)?;
            let ctx = OutputCtx::new(args.output, args.imperial_units);
            commands::get_activities(&client, &args.activity_ids, &ctx, &mut stdout).await
        }
        Commands::PostActivity(args) => {
            let start_date_local = parse_start_date(&args.start_date_local, &Local::now())?;
            let req = CreateActivityRequest::new(
                args.name,
                args.sport_type,
                start_date_local.to_rfc3339(),
                args.elapsed_time,
            )
            .with_type(args.activity_type.into())
            .with_description(args.description)
            .with_distance(args.distance);

            let client = StravaClient::new(&config)?;
            let ctx = OutputCtx::new(args.output, false);
            commands::post_activity(&client, &req, &ctx, &mut stdout).await
        }
    }
}
