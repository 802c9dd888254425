//! Cluster messages of the `tks_pb` contract.
//!
//! Hand-written prost messages. Field tags must stay in step with the
//! service's `.proto`.

use std::fmt;

use serde::Serialize;

use crate::ProtoError;

/// Lifecycle state of a cluster as reported by the cluster-info service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ClusterStatus {
    /// No status reported.
    Unspecified = 0,
    /// Cluster is being provisioned.
    Installing = 1,
    /// Cluster is up.
    Running = 2,
    /// Cluster is being torn down.
    Deleting = 3,
    /// Cluster is logically deleted.
    Deleted = 4,
    /// Cluster is in a failed state.
    Error = 5,
}

impl ClusterStatus {
    /// Name of the value as it appears in the service definition.
    #[must_use]
    pub const fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "UNSPECIFIED",
            Self::Installing => "INSTALLING",
            Self::Running => "RUNNING",
            Self::Deleting => "DELETING",
            Self::Deleted => "DELETED",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for ClusterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str_name())
    }
}

/// A cluster provisioned under a contract.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Cluster {
    /// Cluster identifier.
    #[prost(string, tag = "1")]
    pub id: String,
    /// Display name.
    #[prost(string, tag = "2")]
    pub name: String,
    /// Creation time.
    #[prost(message, optional, tag = "3")]
    pub created_at: Option<::prost_types::Timestamp>,
    /// Last update time.
    #[prost(message, optional, tag = "4")]
    pub updated_at: Option<::prost_types::Timestamp>,
    /// Raw [`ClusterStatus`] value.
    #[prost(enumeration = "ClusterStatus", tag = "5")]
    pub status: i32,
    /// Free-form description of the current status.
    #[prost(string, tag = "6")]
    pub status_desc: String,
    /// Owning contract.
    #[prost(string, tag = "7")]
    pub contract_id: String,
    /// Cloud service provider the cluster runs on.
    #[prost(string, tag = "8")]
    pub csp_id: String,
}

impl Cluster {
    /// Status name for display, or the raw number when the value is not
    /// known to this client.
    #[must_use]
    pub fn status_label(&self) -> String {
        ClusterStatus::try_from(self.status)
            .map_or_else(|_| self.status.to_string(), |s| s.as_str_name().to_string())
    }
}

/// Request for the clusters of one contract.
#[derive(Clone, PartialEq, Serialize, ::prost::Message)]
pub struct GetClustersRequest {
    /// Contract whose clusters are listed.
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub contract_id: String,
}

impl GetClustersRequest {
    /// Create a request for the given contract.
    #[must_use]
    pub fn new(contract_id: impl Into<String>) -> Self {
        Self {
            contract_id: contract_id.into(),
        }
    }

    /// Render the request as indented JSON keyed by proto field names.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, ProtoError> {
        serde_json::to_string_pretty(self).map_err(|e| ProtoError::Encoding(e.to_string()))
    }
}

/// Clusters of a contract, in the order the service returned them.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetClustersResponse {
    /// Service result code.
    #[prost(int32, tag = "1")]
    pub code: i32,
    /// Service error payload, if any.
    #[prost(string, tag = "2")]
    pub error: String,
    /// Clusters of the contract.
    #[prost(message, repeated, tag = "3")]
    pub clusters: Vec<Cluster>,
}
