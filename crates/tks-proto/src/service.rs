//! gRPC client stub for `tks_pb.ClusterInfoService`.
//!
//! Shaped like tonic's generated clients, limited to the unary
//! `GetClusters` call.

use tonic::codegen::http::uri::PathAndQuery;
use tonic::codegen::{Body, Bytes, StdError};

use crate::cluster::{GetClustersRequest, GetClustersResponse};

/// Fully qualified service name.
pub const SERVICE_NAME: &str = "tks_pb.ClusterInfoService";

/// Request path of the `GetClusters` method.
pub const GET_CLUSTERS_PATH: &str = "/tks_pb.ClusterInfoService/GetClusters";

/// Client for the cluster-info service.
#[derive(Debug, Clone)]
pub struct ClusterInfoServiceClient<T> {
    inner: tonic::client::Grpc<T>,
}

impl<T> ClusterInfoServiceClient<T>
where
    T: tonic::client::GrpcService<tonic::body::BoxBody>,
    T::Error: Into<StdError>,
    T::ResponseBody: Body<Data = Bytes> + Send + 'static,
    <T::ResponseBody as Body>::Error: Into<StdError> + Send,
{
    /// Wrap a transport (usually a `tonic::transport::Channel`).
    pub fn new(inner: T) -> Self {
        Self {
            inner: tonic::client::Grpc::new(inner),
        }
    }

    /// List the clusters of a contract.
    ///
    /// # Errors
    ///
    /// Returns the gRPC status when the transport is not ready or the call
    /// fails.
    pub async fn get_clusters(
        &mut self,
        request: impl tonic::IntoRequest<GetClustersRequest>,
    ) -> Result<tonic::Response<GetClustersResponse>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = PathAndQuery::from_static(GET_CLUSTERS_PATH);
        let mut req = request.into_request();
        req.extensions_mut()
            .insert(tonic::GrpcMethod::new(SERVICE_NAME, "GetClusters"));
        self.inner.unary(req, path, codec).await
    }
}
