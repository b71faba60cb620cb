#![doc = "s3-sync: declarative synchronisation of local files and directories with an S3 bucket."]

//! This crate contains the synchronisation engine (config validation, upload
//! traversal, destination-key sanitisation and bucket cleaning) behind a
//! mockable [`contract::StorageClient`] trait, plus the thin CLI glue that
//! wires it to the real S3 backend.
//!
//! # Usage
//! Library consumers construct a [`synchronise::Synchroniser`] with a
//! validated [`config::SyncConfig`] and any `StorageClient` implementation;
//! the `s3-sync` binary does exactly that with the AWS SDK client.

pub mod cli;
pub mod client;
pub mod config;
pub mod contract;
pub mod error;
pub mod load_config;
pub mod sanitise;
pub mod synchronise;

pub use cli::{run, Cli, Commands};
pub use error::SyncError;
