//! Cluster command implementation.
//!
//! `cluster list` asks the cluster-info service for the clusters of the
//! configured contract, drops deleted ones and prints the rest.

use std::io::Write;

use tracing::debug;

use tks_proto::{ClusterStatus, GetClustersRequest, GetClustersResponse};

use crate::cli::ClusterCommands;
use crate::client::{ClusterInfoClient, GrpcClusterInfoClient};
use crate::config::Settings;
use crate::error::CliError;
use crate::output::{ClusterTable, Message, OutputFormat};

/// Printed when the service returns no clusters at all.
pub const NO_CLUSTER_MESSAGE: &str = "No cluster exists for specified contract!";

/// Cluster command executor.
pub struct ClusterCommand<'a> {
    settings: &'a Settings,
    verbose: bool,
}

impl<'a> ClusterCommand<'a> {
    /// Create a new cluster command.
    #[must_use]
    pub const fn new(settings: &'a Settings, verbose: bool) -> Self {
        Self { settings, verbose }
    }

    /// Execute a cluster subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is incomplete, the service cannot
    /// be reached, the call fails, or output fails.
    pub async fn execute<W: Write>(
        &self,
        writer: &mut W,
        format: &OutputFormat,
        command: &ClusterCommands,
    ) -> Result<(), CliError> {
        match command {
            ClusterCommands::List { long } => self.list(writer, format, *long).await,
        }
    }

    /// List clusters over a fresh gRPC connection.
    ///
    /// Configuration is checked before any connection attempt. The channel
    /// is dropped when this returns.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is incomplete, the connection or
    /// call fails, or output fails.
    pub async fn list<W: Write>(
        &self,
        writer: &mut W,
        format: &OutputFormat,
        long: bool,
    ) -> Result<(), CliError> {
        let endpoint = self.settings.endpoint()?;
        self.settings.contract_id()?;

        let client = GrpcClusterInfoClient::connect(endpoint).await?;
        self.list_with(&client, writer, format, long).await
    }

    /// List clusters through the given client.
    ///
    /// Issues exactly one call.
    ///
    /// # Errors
    ///
    /// Returns an error if the contract is not configured, the call fails, or
    /// output fails.
    pub async fn list_with<C, W>(
        &self,
        client: &C,
        writer: &mut W,
        format: &OutputFormat,
        long: bool,
    ) -> Result<(), CliError>
    where
        C: ClusterInfoClient,
        W: Write,
    {
        let request = GetClustersRequest::new(self.settings.contract_id()?);

        if self.verbose {
            let json = request
                .to_json()
                .map_err(|e| CliError::Format(e.to_string()))?;
            writeln!(writer, "Proto Json data...")?;
            writeln!(writer, "{json}")?;
        }

        debug!(contract_id = %request.contract_id, "Listing clusters");
        let response = client.list_clusters(request).await?;

        if response.clusters.is_empty() {
            format.write(writer, &Message::info(NO_CLUSTER_MESSAGE))?;
            return Ok(());
        }

        let received = response.clusters.len();
        let response = filter_deleted(response);
        debug!(
            received,
            listed = response.clusters.len(),
            "Filtered deleted clusters"
        );

        format.write(writer, &ClusterTable::new(&response.clusters, long))
    }
}

/// Drop every cluster whose status is `DELETED`, keeping the order of the
/// rest.
#[must_use]
pub fn filter_deleted(mut response: GetClustersResponse) -> GetClustersResponse {
    response
        .clusters
        .retain(|cluster| cluster.status() != ClusterStatus::Deleted);
    response
}

/// Fake cluster-info client for testing.
#[cfg(test)]
pub struct FakeClusterInfoClient {
    result: Result<GetClustersResponse, String>,
    requests: std::sync::Mutex<Vec<GetClustersRequest>>,
}

#[cfg(test)]
impl FakeClusterInfoClient {
    /// Create a fake that answers with the given clusters.
    pub fn with_clusters(clusters: Vec<tks_proto::Cluster>) -> Self {
        Self {
            result: Ok(GetClustersResponse {
                clusters,
                ..Default::default()
            }),
            requests: std::sync::Mutex::new(vec![]),
        }
    }

    /// Create a fake whose call fails.
    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(message.to_string()),
            requests: std::sync::Mutex::new(vec![]),
        }
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<GetClustersRequest> {
        self.requests.lock().expect("lock").clone()
    }
}

#[cfg(test)]
impl ClusterInfoClient for FakeClusterInfoClient {
    async fn list_clusters(
        &self,
        request: GetClustersRequest,
    ) -> Result<GetClustersResponse, CliError> {
        self.requests.lock().expect("lock").push(request);
        self.result
            .clone()
            .map_err(|message| CliError::from(tonic::Status::unavailable(message)))
    }
}
