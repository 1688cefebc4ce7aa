//! Create the tournament schema in the hosted database.
//!
//! Usage: setup-database [--url URL] [--rpc NAME] [--print-sql | --manual]
//!
//! Requires SUPABASE_SERVICE_KEY unless --print-sql or --manual is given.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tournament_setup::config::Config;
use tournament_setup::db::SCHEMA_SQL;
use tournament_setup::error::ProvisionError;
use tournament_setup::services::instructions;
use tournament_setup::services::provision::provision;
use tournament_setup::services::sql_rpc::SqlRpcClient;

#[derive(Parser)]
#[command(name = "setup-database", about = "Create the tournament schema in a Supabase project")]
struct Args {
    /// Project base URL (overrides SUPABASE_URL)
    #[arg(long)]
    url: Option<String>,

    /// SQL execution RPC function (overrides SUPABASE_SQL_RPC)
    #[arg(long)]
    rpc: Option<String>,

    /// Print the schema SQL to stdout and exit
    #[arg(long, conflicts_with = "manual")]
    print_sql: bool,

    /// Print the SQL Editor steps and exit without contacting the database
    #[arg(long)]
    manual: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let _ = dotenvy::dotenv();

    // stdout is reserved for operator text and --print-sql output
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut config = Config::from_env();
    if let Some(url) = args.url {
        config.supabase_url = url.trim_end_matches('/').to_string();
    }
    if let Some(rpc) = args.rpc {
        config.sql_rpc = rpc;
    }
    tracing::debug!(?config, "loaded configuration");

    if args.print_sql {
        print!("{}", SCHEMA_SQL.trim_start());
        return Ok(ExitCode::SUCCESS);
    }

    if args.manual {
        println!("{}\n", instructions::startup_banner());
        println!("{}", instructions::manual_steps(&config));
        return Ok(ExitCode::SUCCESS);
    }

    if config.service_key.is_some() {
        println!("{}\n", instructions::startup_banner());
    }

    match provision(&config, |key| SqlRpcClient::new(&config, key)).await {
        Ok(result) => {
            println!("Schema applied.");
            if !result.is_null() {
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e @ ProvisionError::MissingCredential { .. }) => {
            println!("{}", instructions::missing_credential(&config));
            Ok(ExitCode::from(e.exit_code()))
        }
        Err(e) => {
            let detail = match &e {
                ProvisionError::RemoteExecutionFailed { body, .. } => body.clone(),
                other => other.to_string(),
            };
            println!("{}", instructions::remote_failure(&config, &detail));
            Ok(ExitCode::from(e.exit_code()))
        }
    }
}
