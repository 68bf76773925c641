use serde::{Deserialize, Serialize};

use super::ids::{FieldId, SpanId};

/// Lifecycle role of a message within its span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Allocates a span instance keyed by the reference field
    Start,
    /// Releases the span instance
    End,
    /// Updates an existing span instance
    Log,
    /// Plain message routed to an existing span instance
    Msg,
}

impl MessageKind {
    pub fn is_start(&self) -> bool {
        matches!(self, MessageKind::Start)
    }

    pub fn is_end(&self) -> bool {
        matches!(self, MessageKind::End)
    }

    /// Log and Msg messages both act on an already-live instance
    pub fn is_log(&self) -> bool {
        matches!(self, MessageKind::Log | MessageKind::Msg)
    }
}

/// A message of a span
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Owning span
    pub span: SpanId,

    pub name: String,

    pub kind: MessageKind,

    /// Numeric identifier of the message on the wire
    pub rpc_id: u32,

    /// Fields in declaration order
    pub fields: Vec<FieldId>,

    /// Correlation key linking this message to its span instance
    pub reference_field: Option<FieldId>,

    /// Whether the reference value travels inline in the payload
    pub reference_embedded: bool,
}

impl Message {
    pub fn new(span: SpanId, name: impl Into<String>, kind: MessageKind, rpc_id: u32) -> Self {
        Self {
            span,
            name: name.into(),
            kind,
            rpc_id,
            fields: Vec::new(),
            reference_field: None,
            reference_embedded: false,
        }
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn is_reference(&self, field: FieldId) -> bool {
        self.reference_field == Some(field)
    }
}
