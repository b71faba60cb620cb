///
/// This module implements the full CLI interface for s3-sync: command
/// parsing, argument validation and the main entrypoint.
///
/// All core business logic (config validation, upload traversal, cleaning)
/// lives in [`crate::synchronise`]. This module is strictly CLI glue.
///
/// ## Features
/// - Entry struct [`Cli`] defines all user-facing options and subcommands.
/// - Subcommand routing (`s3-upload`, `s3-remove`) and argument validation.
/// - Async entrypoint ([`run`]) for programmatic invocation and integration
///   testing.
///
/// ## How To Use
/// - For command-line users: use the installed `s3-sync` binary with
///   `--help`.
/// - For programmatic/integration use: call [`run`] with a constructed
///   [`Cli`].
///
/// Host deployment tooling that triggers these commands from lifecycle
/// points (post-deploy, pre-remove) should pass `--hook`, so a config with
/// `ignoreHooks: true` can opt out of the implicit runs while keeping the
/// explicit ones.
use crate::client::S3StorageClient;
use crate::load_config::load_config;
use crate::synchronise::{Synchroniser, Trigger};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI for s3-sync: upload declared items to a bucket and clean it up again.
#[derive(Parser)]
#[clap(
    name = "s3-sync",
    version,
    about = "Synchronise local files and directories with an S3 bucket"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upload the configured items to the target bucket
    #[clap(name = "s3-upload")]
    S3Upload {
        /// Path to the YAML config file
        #[clap(long)]
        config: PathBuf,
        /// Mark this run as triggered by a host lifecycle hook
        #[clap(long)]
        hook: bool,
    },
    /// Clean the target bucket according to the configured clean flags
    #[clap(name = "s3-remove")]
    S3Remove {
        /// Path to the YAML config file
        #[clap(long)]
        config: PathBuf,
        /// Mark this run as triggered by a host lifecycle hook
        #[clap(long)]
        hook: bool,
    },
}

fn trigger_for(hook: bool) -> Trigger {
    if hook {
        Trigger::LifecycleHook
    } else {
        Trigger::DirectCommand
    }
}

/// Extracted async CLI logic entrypoint for integration tests and main()
pub async fn run(cli: Cli) -> Result<()> {
    tracing::info!("trace_initialised");

    let result = match cli.command {
        Commands::S3Upload { config, hook } => {
            let config = load_config(config)?.into_validated()?;
            config.trace_loaded();
            tracing::info!(command = "s3-upload", "Starting upload");
            let client = S3StorageClient::new_from_env().await;
            let engine = Synchroniser::new(config, client)?;
            match engine.run_upload(trigger_for(hook)).await {
                Ok(()) => {
                    tracing::info!(command = "s3-upload", "Upload complete");
                    Ok(())
                }
                Err(e) => {
                    tracing::error!(command = "s3-upload", error = %e, "Upload failed");
                    Err(e.into())
                }
            }
        }
        Commands::S3Remove { config, hook } => {
            let config = load_config(config)?.into_validated()?;
            config.trace_loaded();
            tracing::info!(command = "s3-remove", "Starting bucket clean");
            let client = S3StorageClient::new_from_env().await;
            let engine = Synchroniser::new(config, client)?;
            match engine.run_clean(trigger_for(hook)).await {
                Ok(()) => {
                    tracing::info!(command = "s3-remove", "Bucket clean complete");
                    Ok(())
                }
                Err(e) => {
                    tracing::error!(command = "s3-remove", error = %e, "Bucket clean failed");
                    Err(e.into())
                }
            }
        }
    };

    result
}
