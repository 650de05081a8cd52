//! JSON snapshots of the road graph and configuration.
//!
//! A snapshot carries nodes, edges, the time slot, the one-way toggle and a
//! small metadata block. On import only `nodes` and `edges` are required;
//! the rest falls back to whatever the workspace already has.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Edge, GraphError, Node, TimeSlot};

/// Format version written into exported metadata.
pub const SNAPSHOT_VERSION: &str = "2.0";

/// Errors from reading or writing a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// Not valid JSON, or a field has the wrong shape
    #[error("invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading or writing the snapshot file failed
    #[error("snapshot file error: {0}")]
    Io(#[from] std::io::Error),

    /// A required top-level field is absent
    #[error("invalid snapshot: missing {0}")]
    MissingField(&'static str),

    /// The nodes and edges do not form a valid graph
    #[error("invalid snapshot graph: {0}")]
    InvalidGraph(#[from] GraphError),
}

/// Provenance of an exported snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    pub exported: DateTime<Utc>,
    pub version: String,
    pub scenario: String,
}

impl SnapshotMetadata {
    /// Metadata stamped with the current time.
    pub fn now(scenario: impl Into<String>) -> Self {
        Self {
            exported: Utc::now(),
            version: SNAPSHOT_VERSION.to_string(),
            scenario: scenario.into(),
        }
    }
}

/// A serialized graph plus configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_slot: Option<TimeSlot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_way_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<SnapshotMetadata>,
}

/// Wire shape accepted on import, before required fields are checked.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSnapshot {
    nodes: Option<Vec<Node>>,
    edges: Option<Vec<Edge>>,
    time_slot: Option<TimeSlot>,
    one_way_enabled: Option<bool>,
    metadata: Option<serde_json::Value>,
}

impl Snapshot {
    /// Parse a snapshot from JSON bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use rush_planner::snapshot::{Snapshot, SnapshotError};
    ///
    /// let snapshot = Snapshot::from_json(br#"{"nodes": [], "edges": []}"#).unwrap();
    /// assert!(snapshot.nodes.is_empty());
    /// assert_eq!(snapshot.time_slot, None);
    ///
    /// let err = Snapshot::from_json(br#"{"nodes": []}"#).unwrap_err();
    /// assert!(matches!(err, SnapshotError::MissingField("edges")));
    /// ```
    pub fn from_json(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let raw: RawSnapshot = serde_json::from_slice(bytes)?;
        Ok(Self {
            nodes: raw.nodes.ok_or(SnapshotError::MissingField("nodes"))?,
            edges: raw.edges.ok_or(SnapshotError::MissingField("edges"))?,
            time_slot: raw.time_slot,
            one_way_enabled: raw.one_way_enabled,
            // Metadata is informational; a malformed block is dropped.
            metadata: raw
                .metadata
                .and_then(|value| serde_json::from_value(value).ok()),
        })
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read and parse a snapshot file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let bytes = fs::read(path)?;
        Self::from_json(&bytes)
    }

    /// Write the snapshot as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
