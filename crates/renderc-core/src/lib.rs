//! renderc Core - layout and prototype synthesis for the render compiler
//!
//! This crate provides the type-layout and code-synthesis core of the
//! schema compiler, including:
//! - An arena-backed schema graph (apps, spans, messages, fields, metrics)
//! - Wire (packed) and parsed byte size, alignment and C type resolution
//! - Message prototype strings for the code templates
//! - The per-message failure-condition taxonomy
//! - Proxy-span linkage resolution
//!
//! All queries are pure reads over an immutable [`Schema`].

pub mod errors;
pub mod layout;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod queries;
pub mod render;

#[doc(hidden)]
pub use renderc_core_types;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, RenderError, Result};
pub use model::{
    App, AppId, Field, FieldId, FieldType, Message, MessageId, MessageKind, Metric, MetricField,
    MetricId, PrimitiveKind, Span, SpanId,
};
pub use ops::{FieldSpec, Schema, SchemaBuilder, SpanOptions};
pub use queries::SpanError;
