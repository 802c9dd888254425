//! # tks-cli
//!
//! TKS command-line interface.
//!
//! Provides commands for:
//! - Listing the clusters of a contract
//!
//! # Architecture
//!
//! The CLI talks to the TKS cluster-info service over gRPC using the stub in
//! `tks-proto`. Commands go through the [`client::ClusterInfoClient`] trait so
//! they can run against a fake in tests.
//!
//! ```text
//! ┌───────────┐        gRPC         ┌─────────────────────┐
//! │  tks-cli  │◄───────────────────►│ ClusterInfoService  │
//! └───────────┘                     └─────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, ClusterCommands, Commands, Format};
pub use client::{ClusterInfoClient, GrpcClusterInfoClient};
pub use config::Settings;
pub use error::CliError;
pub use output::OutputFormat;
