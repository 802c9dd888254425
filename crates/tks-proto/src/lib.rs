//! # tks-proto
//!
//! Wire types of the TKS cluster-info service and a gRPC client stub for it.
//!
//! Only the slice of the `tks_pb` contract that the CLI consumes is bound here:
//! the `ClusterInfoService/GetClusters` RPC and the messages it carries.
//!
//! ```text
//! ┌──────────┐   GetClustersRequest    ┌─────────────────────┐
//! │ tks-cli  │────────────────────────►│ ClusterInfoService  │
//! │          │◄────────────────────────│                     │
//! └──────────┘   GetClustersResponse   └─────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cluster;
pub mod error;
pub mod service;

pub use cluster::{Cluster, ClusterStatus, GetClustersRequest, GetClustersResponse};
pub use error::ProtoError;
pub use service::ClusterInfoServiceClient;
