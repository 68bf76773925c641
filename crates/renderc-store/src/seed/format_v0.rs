//! Snapshot Format v0 schema
//!
//! Defines the YAML structure describing a loaded schema graph

use renderc_core::errors::{RenderError, Result as RenderResult};
use renderc_core::{FieldType, MessageKind, PrimitiveKind};
use serde::{Deserialize, Serialize};

/// Top-level snapshot document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotV0 {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    /// Package the schema was declared in
    pub package: String,

    #[serde(default)]
    pub apps: Vec<SnapshotApp>,

    #[serde(default)]
    pub metrics: Vec<SnapshotMetric>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotApp {
    pub name: String,

    #[serde(default)]
    pub spans: Vec<SnapshotSpan>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotSpan {
    pub name: String,

    #[serde(default)]
    pub singleton: bool,

    /// Explicit connection hashing request
    #[serde(default)]
    pub conn_hash: bool,

    /// Pool size override; absent or <= 0 means the default
    #[serde(default)]
    pub pool_size: Option<i64>,

    /// Remote span satisfying this span's lifecycle; marks the span a proxy
    #[serde(default)]
    pub proxy: Option<SnapshotRemote>,

    #[serde(default)]
    pub messages: Vec<SnapshotMessage>,
}

/// Qualified reference to a span of (possibly) another app
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotRemote {
    pub app: String,
    pub span: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotMessage {
    pub name: String,

    pub kind: MessageKind,

    #[serde(default)]
    pub rpc_id: u32,

    /// Name of the reference field, if any
    #[serde(default)]
    pub reference: Option<String>,

    #[serde(default)]
    pub reference_embedded: bool,

    #[serde(default)]
    pub fields: Vec<SnapshotField>,
}

/// Field declaration; exactly one of `type` and `short_string` must be set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotField {
    pub id: u32,

    pub name: String,

    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    #[serde(default)]
    pub short_string: Option<u32>,

    #[serde(default)]
    pub array: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotMetric {
    pub name: String,

    #[serde(default)]
    pub fields: Vec<SnapshotMetricField>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotMetricField {
    pub name: String,

    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    #[serde(default)]
    pub short_string: Option<u32>,
}

/// Resolve a declared type into the closed `FieldType` union
///
/// # Errors
///
/// Returns `UnresolvedFieldType` when neither or both of the kind and the
/// short string length are declared, or when the kind is unknown.
pub fn resolve_field_type(
    field: &str,
    kind: Option<&str>,
    short_string: Option<u32>,
) -> RenderResult<FieldType> {
    let unresolved = |reason: String| RenderError::UnresolvedFieldType {
        field: field.to_string(),
        reason,
    };
    match (kind, short_string) {
        (Some(kind), None) => PrimitiveKind::from_literal(kind)
            .map(FieldType::Primitive)
            .ok_or_else(|| unresolved(format!("unknown primitive kind '{}'", kind))),
        (None, Some(len)) => Ok(FieldType::short_string(len)),
        (Some(_), Some(_)) => Err(unresolved(
            "declares both a primitive kind and a short string length".to_string(),
        )),
        (None, None) => Err(unresolved("declares no type".to_string())),
    }
}
