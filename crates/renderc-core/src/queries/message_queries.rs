use std::collections::BTreeSet;

use serde::Serialize;

use crate::errors::Result;
use crate::model::{MessageId, MessageKind, SpanId};
use crate::ops::Schema;

/// Failure condition the generated runtime may report for a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanError {
    /// Allocating a span instance failed
    SpanAllocFailed,
    /// Inserting the new instance into the index failed
    SpanInsertFailed,
    /// The span pool has no free slot
    SpanPoolFull,
    /// An instance with the same reference already exists
    DuplicateRef,
    /// No live instance matches the reference
    SpanFindFailed,
    /// Removing the instance from the index failed
    SpanEraseFailed,
}

impl SpanError {
    /// Stable name used by the generated code
    pub fn code(&self) -> &'static str {
        match self {
            SpanError::SpanAllocFailed => "span_alloc_failed",
            SpanError::SpanInsertFailed => "span_insert_failed",
            SpanError::SpanPoolFull => "span_pool_full",
            SpanError::DuplicateRef => "duplicate_ref",
            SpanError::SpanFindFailed => "span_find_failed",
            SpanError::SpanEraseFailed => "span_erase_failed",
        }
    }

    /// Conditions for a message kind on a span with the given cardinality
    ///
    /// A singleton span has at most one live instance, so log messages never
    /// need a lookup that could fail.
    pub fn for_kind(kind: MessageKind, singleton: bool) -> BTreeSet<SpanError> {
        match kind {
            MessageKind::Start => BTreeSet::from([
                SpanError::SpanAllocFailed,
                SpanError::SpanInsertFailed,
                SpanError::SpanPoolFull,
                SpanError::DuplicateRef,
            ]),
            MessageKind::End => {
                BTreeSet::from([SpanError::SpanFindFailed, SpanError::SpanEraseFailed])
            }
            MessageKind::Log | MessageKind::Msg if singleton => BTreeSet::new(),
            MessageKind::Log | MessageKind::Msg => BTreeSet::from([SpanError::SpanFindFailed]),
        }
    }
}

impl std::fmt::Display for SpanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Span owning a message
///
/// # Errors
///
/// Returns `MessageNotFound` for a foreign id.
pub fn message_span(schema: &Schema, message: MessageId) -> Result<SpanId> {
    Ok(schema.message(message)?.span)
}

/// Failure conditions applicable to a message
///
/// Keyed by the message kind and, for log messages, the owning span's
/// singleton flag.
///
/// # Errors
///
/// Returns a lookup error for a foreign id.
pub fn errors(schema: &Schema, message: MessageId) -> Result<BTreeSet<SpanError>> {
    let msg = schema.message(message)?;
    let span = schema.span(msg.span)?;
    Ok(SpanError::for_kind(msg.kind, span.is_singleton))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        let all = [
            SpanError::SpanAllocFailed,
            SpanError::SpanInsertFailed,
            SpanError::SpanPoolFull,
            SpanError::DuplicateRef,
            SpanError::SpanFindFailed,
            SpanError::SpanEraseFailed,
        ];
        let codes: BTreeSet<_> = all.iter().map(SpanError::code).collect();
        assert_eq!(codes.len(), all.len());
    }

    #[test]
    fn test_start_ignores_singleton_flag() {
        assert_eq!(
            SpanError::for_kind(MessageKind::Start, true),
            SpanError::for_kind(MessageKind::Start, false)
        );
    }
}
