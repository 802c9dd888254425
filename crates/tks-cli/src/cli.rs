//! Command-line argument parsing with clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// TKS command-line client.
#[derive(Parser, Debug, Clone)]
#[command(name = "tks")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file (default is $HOME/.tks.yaml).
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Address of the cluster-info service; overrides `tksInfoUrl`.
    #[arg(long, global = true, env = "TKS_INFO_URL")]
    pub tks_info_url: Option<String>,

    /// Contract to operate on; overrides `contractId`.
    #[arg(long, global = true, env = "TKS_CONTRACT_ID")]
    pub contract_id: Option<String>,

    /// Print outgoing requests before sending them.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format.
    #[arg(short, long, global = true, value_enum, default_value_t = Format::Table)]
    pub format: Format,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum Format {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON output for scripting.
    Json,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Operate on clusters.
    Cluster {
        /// Cluster subcommand to execute.
        #[command(subcommand)]
        command: ClusterCommands,
    },
}

/// Cluster subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum ClusterCommands {
    /// Show list of clusters.
    #[command(long_about = "Show list of clusters.\n\nExample:\ntks cluster list (--long)")]
    List {
        /// Print detail information.
        #[arg(short, long)]
        long: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_cluster_list() {
        let cli = Cli::parse_from(["tks", "cluster", "list"]);
        let Commands::Cluster { command } = cli.command;
        assert!(matches!(command, ClusterCommands::List { long: false }));
        assert!(!cli.verbose);
        assert_eq!(cli.format, Format::Table);
    }

    #[test]
    fn parses_long_flag() {
        let cli = Cli::parse_from(["tks", "cluster", "list", "-l"]);
        let Commands::Cluster { command } = cli.command;
        assert!(matches!(command, ClusterCommands::List { long: true }));

        let cli = Cli::parse_from(["tks", "cluster", "list", "--long"]);
        let Commands::Cluster { command } = cli.command;
        assert!(matches!(command, ClusterCommands::List { long: true }));
    }

    #[test]
    fn verbose_is_global() {
        let before = Cli::parse_from(["tks", "-v", "cluster", "list"]);
        assert!(before.verbose);

        let after = Cli::parse_from(["tks", "cluster", "list", "--verbose"]);
        assert!(after.verbose);
    }

    #[test]
    fn respects_endpoint_and_contract_flags() {
        let cli = Cli::parse_from([
            "tks",
            "--tks-info-url",
            "127.0.0.1:9111",
            "--contract-id",
            "P0123456",
            "cluster",
            "list",
        ]);
        assert_eq!(cli.tks_info_url.as_deref(), Some("127.0.0.1:9111"));
        assert_eq!(cli.contract_id.as_deref(), Some("P0123456"));
    }

    #[test]
    fn respects_format_and_config_flags() {
        let cli = Cli::parse_from([
            "tks",
            "--format",
            "json",
            "--config",
            "/tmp/tks.yaml",
            "cluster",
            "list",
        ]);
        assert_eq!(cli.format, Format::Json);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/tks.yaml")));
    }
}
