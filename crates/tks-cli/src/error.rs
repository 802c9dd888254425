//! CLI error types.

use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Required configuration is missing or unreadable.
    #[error("configuration error: {0}")]
    Config(String),
    /// Channel to the cluster-info service could not be established.
    #[error("connection error: {0}")]
    Connection(String),
    /// The remote call failed or timed out.
    #[error("remote call failed: {0}")]
    RemoteCall(String),
    /// Output formatting error.
    #[error("format error: {0}")]
    Format(String),
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<tonic::Status> for CliError {
    fn from(status: tonic::Status) -> Self {
        Self::RemoteCall(format!("{:?}: {}", status.code(), status.message()))
    }
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_error_display_config() {
        let err = CliError::Config("You must specify tksInfoUrl at config file".into());
        assert_eq!(
            err.to_string(),
            "configuration error: You must specify tksInfoUrl at config file"
        );
    }

    #[test]
    fn cli_error_display_connection() {
        let err = CliError::Connection("timeout".into());
        assert_eq!(err.to_string(), "connection error: timeout");
    }

    #[test]
    fn cli_error_from_status() {
        let err = CliError::from(tonic::Status::unavailable("no route"));
        assert!(matches!(err, CliError::RemoteCall(_)));
        assert_eq!(err.to_string(), "remote call failed: Unavailable: no route");
    }

    #[test]
    fn cli_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let cli_err = CliError::from(io_err);
        assert!(matches!(cli_err, CliError::Io(_)));
    }
}
