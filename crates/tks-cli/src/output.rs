//! Output formatting for CLI commands.
//!
//! Supports table (human-readable) and JSON output formats.

use std::fmt;
use std::io::Write;

use chrono::{DateTime, Datelike, Local, TimeZone, Utc};
use prost_types::Timestamp;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use tks_proto::Cluster;

use crate::cli::Format;
use crate::error::CliError;

/// Layout of rendered timestamps.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Earliest second representable by a protobuf `Timestamp` (0001-01-01T00:00:00Z).
const MIN_TIMESTAMP_SECONDS: i64 = -62_135_596_800;

/// Latest second representable by a protobuf `Timestamp` (9999-12-31T23:59:59Z).
const MAX_TIMESTAMP_SECONDS: i64 = 253_402_300_799;

/// Output formatter that handles both table and JSON output.
#[derive(Debug, Clone)]
pub struct OutputFormat {
    format: Format,
}

impl OutputFormat {
    /// Create a new output formatter.
    #[must_use]
    pub const fn new(format: Format) -> Self {
        Self { format }
    }

    /// Write a serializable value to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write<W, T>(&self, writer: &mut W, value: &T) -> Result<(), CliError>
    where
        W: Write,
        T: Serialize + TableDisplay,
    {
        match self.format {
            Format::Json => {
                serde_json::to_writer_pretty(&mut *writer, value)
                    .map_err(|e| CliError::Format(format!("JSON serialization failed: {e}")))?;
                writeln!(writer)?;
            }
            Format::Table => {
                value.write_table(writer)?;
            }
        }
        Ok(())
    }

    /// Write a serializable value to a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_string<T>(&self, value: &T) -> Result<String, CliError>
    where
        T: Serialize + TableDisplay,
    {
        let mut buf = Vec::new();
        self.write(&mut buf, value)?;
        String::from_utf8(buf).map_err(|e| CliError::Format(format!("UTF-8 error: {e}")))
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::new(Format::Table)
    }
}

/// Trait for types that can be displayed as a table.
pub trait TableDisplay {
    /// Write the value as a human-readable table.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError>;
}

/// Format a wire timestamp as `YYYY-MM-DD HH:MM:SS`.
///
/// The result is in the local timezone of the running process (`TZ` is
/// honoured). A missing timestamp, one outside the protobuf range, one with
/// invalid nanos, or one whose local year leaves `0000..=9999` renders as the
/// Unix epoch. Sub-second precision is dropped.
#[must_use]
pub fn format_timestamp(timestamp: Option<&Timestamp>) -> String {
    format_timestamp_in(timestamp, &Local)
}

fn format_timestamp_in<Tz>(timestamp: Option<&Timestamp>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let utc = timestamp
        .filter(|ts| {
            (MIN_TIMESTAMP_SECONDS..=MAX_TIMESTAMP_SECONDS).contains(&ts.seconds)
                && (0..1_000_000_000).contains(&ts.nanos)
        })
        .and_then(|ts| DateTime::from_timestamp(ts.seconds, ts.nanos as u32))
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);

    let local = utc.with_timezone(tz);
    let local = if (0..=9999).contains(&local.year()) {
        local
    } else {
        DateTime::<Utc>::UNIX_EPOCH.with_timezone(tz)
    };

    local.format(TIME_FORMAT).to_string()
}

/// One cluster in the short listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct ClusterRow {
    /// Cluster name.
    #[tabled(rename = "NAME")]
    pub name: String,
    /// Cluster ID.
    #[tabled(rename = "ID")]
    pub id: String,
    /// Status name.
    #[tabled(rename = "STATUS")]
    pub status: String,
    /// Creation time, local.
    #[tabled(rename = "CREATED_AT")]
    pub created_at: String,
    /// Last update time, local.
    #[tabled(rename = "UPDATED_AT")]
    pub updated_at: String,
}

impl From<&Cluster> for ClusterRow {
    fn from(cluster: &Cluster) -> Self {
        Self {
            name: cluster.name.clone(),
            id: cluster.id.clone(),
            status: cluster.status_label(),
            created_at: format_timestamp(cluster.created_at.as_ref()),
            updated_at: format_timestamp(cluster.updated_at.as_ref()),
        }
    }
}

/// One cluster in the long listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct ClusterDetailRow {
    /// Cluster name.
    #[tabled(rename = "NAME")]
    pub name: String,
    /// Cluster ID.
    #[tabled(rename = "ID")]
    pub id: String,
    /// Status name.
    #[tabled(rename = "STATUS")]
    pub status: String,
    /// Creation time, local.
    #[tabled(rename = "CREATED_AT")]
    pub created_at: String,
    /// Last update time, local.
    #[tabled(rename = "UPDATED_AT")]
    pub updated_at: String,
    /// Cloud service provider ID.
    #[tabled(rename = "CSP_ID")]
    pub csp_id: String,
    /// Owning contract ID.
    #[tabled(rename = "CONTRACT_ID")]
    pub contract_id: String,
    /// Status description.
    #[tabled(rename = "STATUS_DESC")]
    pub status_desc: String,
}

impl From<&Cluster> for ClusterDetailRow {
    fn from(cluster: &Cluster) -> Self {
        Self {
            name: cluster.name.clone(),
            id: cluster.id.clone(),
            status: cluster.status_label(),
            created_at: format_timestamp(cluster.created_at.as_ref()),
            updated_at: format_timestamp(cluster.updated_at.as_ref()),
            csp_id: cluster.csp_id.clone(),
            contract_id: cluster.contract_id.clone(),
            status_desc: cluster.status_desc.clone(),
        }
    }
}

/// Rows of a cluster listing in either column set.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ClusterRows {
    /// Five columns.
    Short(Vec<ClusterRow>),
    /// Eight columns.
    Long(Vec<ClusterDetailRow>),
}

/// Cluster listing for display.
#[derive(Debug, Clone, Serialize)]
pub struct ClusterTable {
    /// Listed clusters, in input order.
    pub clusters: ClusterRows,
}

impl ClusterTable {
    /// Project clusters into the short or long column set.
    #[must_use]
    pub fn new(clusters: &[Cluster], long: bool) -> Self {
        let clusters = if long {
            ClusterRows::Long(clusters.iter().map(ClusterDetailRow::from).collect())
        } else {
            ClusterRows::Short(clusters.iter().map(ClusterRow::from).collect())
        };
        Self { clusters }
    }

    /// Render as a borderless table: header row, then one row per cluster.
    #[must_use]
    pub fn render(&self) -> String {
        let mut table = match &self.clusters {
            ClusterRows::Short(rows) => Table::new(rows),
            ClusterRows::Long(rows) => Table::new(rows),
        };
        table.with(Style::blank());
        table.to_string()
    }
}

impl TableDisplay for ClusterTable {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        writeln!(writer, "{}", self.render())?;
        Ok(())
    }
}

/// Simple message output.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    /// Message text.
    pub message: String,
}

impl Message {
    /// Create an informational message.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl TableDisplay for Message {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        writeln!(writer, "{}", self.message)?;
        Ok(())
    }
}
