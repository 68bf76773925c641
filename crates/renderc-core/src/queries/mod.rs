//! Read-only queries over a built [`Schema`](crate::ops::Schema)
//!
//! Key principles:
//! - Pure and idempotent: no caching, no mutation
//! - Linkage lookups preserve the loader's declaration order
//! - Unresolvable linkage is a fatal `RenderError`, never a default value

pub mod app_queries;
pub mod message_queries;
pub mod span_queries;

pub use app_queries::{app_messages, app_metrics, remote_apps};
pub use message_queries::{errors, message_span, SpanError};
pub use span_queries::{
    proxy_end_message, proxy_log_messages, proxy_start_message, reference_type, remote_app,
    span_app,
};
