//! Cluster-info service client.
//!
//! [`ClusterInfoClient`] is the seam the commands talk to. The gRPC
//! implementation wraps the tonic stub from `tks-proto`; tests substitute a
//! fake.
//!
//! # Example
//!
//! ```rust,no_run
//! use tks_cli::client::{ClusterInfoClient, GrpcClusterInfoClient};
//! use tks_proto::GetClustersRequest;
//!
//! # async fn example() -> Result<(), tks_cli::CliError> {
//! let client = GrpcClusterInfoClient::connect("127.0.0.1:9111").await?;
//! let response = client.list_clusters(GetClustersRequest::new("P0123456")).await?;
//! println!("Clusters: {}", response.clusters.len());
//! # Ok(())
//! # }
//! ```

use std::future::Future;
use std::time::Duration;

use tokio::time::timeout;
use tonic::transport::{Channel, Endpoint};
use tracing::{debug, trace};

use tks_proto::{ClusterInfoServiceClient, GetClustersRequest, GetClustersResponse};

use crate::error::CliError;

/// Default connection timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default upper bound for a single remote call.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// Access to the cluster-info service.
pub trait ClusterInfoClient: Send + Sync {
    /// List the clusters of the contract named in `request`.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or times out.
    fn list_clusters(
        &self,
        request: GetClustersRequest,
    ) -> impl Future<Output = Result<GetClustersResponse, CliError>> + Send;
}

/// gRPC client for the cluster-info service.
#[derive(Debug, Clone)]
pub struct GrpcClusterInfoClient {
    inner: ClusterInfoServiceClient<Channel>,
    request_timeout: Duration,
}

impl GrpcClusterInfoClient {
    /// Connect to the service at `address`.
    ///
    /// `address` may be a full URI or a bare `host:port`, which is dialed
    /// over plain HTTP/2.
    ///
    /// # Errors
    ///
    /// Returns a connection error if the address is invalid or the channel
    /// cannot be established.
    pub async fn connect(address: &str) -> Result<Self, CliError> {
        Self::connect_with_timeout(address, DEFAULT_CONNECT_TIMEOUT).await
    }

    /// Connect with a custom timeout.
    ///
    /// # Errors
    ///
    /// Returns a connection error if the channel cannot be established.
    pub async fn connect_with_timeout(
        address: &str,
        connect_timeout: Duration,
    ) -> Result<Self, CliError> {
        let uri = endpoint_uri(address);
        debug!(uri = %uri, "Connecting to cluster-info service");

        let endpoint = Endpoint::from_shared(uri)
            .map_err(|e| CliError::Connection(format!("invalid address {address}: {e}")))?
            .connect_timeout(connect_timeout);

        let channel = endpoint
            .connect()
            .await
            .map_err(|e| CliError::Connection(format!("did not connect to {address}: {e}")))?;

        debug!("Channel established");
        Ok(Self {
            inner: ClusterInfoServiceClient::new(channel),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        })
    }

    /// Set the request timeout.
    pub fn set_request_timeout(&mut self, timeout: Duration) {
        self.request_timeout = timeout;
    }
}

impl ClusterInfoClient for GrpcClusterInfoClient {
    async fn list_clusters(
        &self,
        request: GetClustersRequest,
    ) -> Result<GetClustersResponse, CliError> {
        let mut client = self.inner.clone();
        let mut request = tonic::Request::new(request);
        request.set_timeout(self.request_timeout);

        trace!("Sending GetClusters");
        let response = timeout(self.request_timeout, client.get_clusters(request))
            .await
            .map_err(|_| CliError::RemoteCall("request 'GetClusters' timed out".into()))??;

        let response = response.into_inner();
        trace!(clusters = response.clusters.len(), "Received GetClusters response");
        Ok(response)
    }
}

/// Turn a configured address into a URI tonic accepts.
fn endpoint_uri(address: &str) -> String {
    if address.contains("://") {
        address.to_string()
    } else {
        format!("http://{address}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_bound_is_thirty_minutes() {
        assert_eq!(DEFAULT_REQUEST_TIMEOUT, Duration::from_secs(1800));
    }

    #[test]
    fn bare_address_gets_http_scheme() {
        assert_eq!(endpoint_uri("127.0.0.1:9111"), "http://127.0.0.1:9111");
    }

    #[test]
    fn full_uri_is_kept() {
        assert_eq!(endpoint_uri("https://info.example:443"), "https://info.example:443");
    }

    #[tokio::test]
    async fn invalid_address_is_connection_error() {
        let result = GrpcClusterInfoClient::connect("bad host:9111").await;
        assert!(matches!(result, Err(CliError::Connection(_))));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_connection_error() {
        let result =
            GrpcClusterInfoClient::connect_with_timeout("127.0.0.1:1", Duration::from_secs(2))
                .await;
        let err = result.expect_err("nothing listens on port 1");
        assert!(matches!(err, CliError::Connection(_)));
        assert!(err.to_string().contains("127.0.0.1:1"));
    }

    #[tokio::test]
    async fn silent_server_times_out_as_remote_call_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind listener");
        let address = listener.local_addr().expect("local addr").to_string();
        let server = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let mut client =
            GrpcClusterInfoClient::connect_with_timeout(&address, Duration::from_secs(2))
                .await
                .expect("tcp connect succeeds");
        client.set_request_timeout(Duration::from_millis(300));

        let result = client.list_clusters(GetClustersRequest::new("P0123456")).await;
        server.abort();

        assert!(matches!(result, Err(CliError::RemoteCall(_))), "got {result:?}");
    }
}
