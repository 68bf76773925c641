use serde::{Deserialize, Serialize};

use super::field_type::FieldType;

/// A document-level metric: an aggregated value struct
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub name: String,

    /// Fields in declaration order
    pub fields: Vec<MetricField>,
}

/// A metric field; metric storage always uses the parsed representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricField {
    pub name: String,
    pub field_type: FieldType,
}

impl Metric {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }
}
