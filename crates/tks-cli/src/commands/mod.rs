//! CLI command implementations.
//!
//! Each submodule implements a specific CLI command:
//! - [`cluster`] - Cluster listing

pub mod cluster;

pub use cluster::ClusterCommand;
