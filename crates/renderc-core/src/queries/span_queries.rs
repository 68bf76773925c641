//! Proxy-span linkage and correlation-key resolution
//!
//! A proxy span's lifecycle is satisfied by messages of its remote span. The
//! lookups below scan the remote span's messages in declaration order and
//! the first structurally matching message wins.

use crate::errors::{RenderError, Result};
use crate::model::{AppId, FieldType, Message, MessageId, Span, SpanId};
use crate::ops::Schema;

/// The proxy span and the id of its remote span
fn remote_of(schema: &Schema, span: SpanId) -> Result<(&Span, SpanId)> {
    let proxy = schema.span(span)?;
    match (proxy.is_proxy, proxy.remote_span) {
        (true, Some(remote)) => Ok((proxy, remote)),
        _ => Err(RenderError::NotAProxy {
            span: proxy.name.clone(),
        }),
    }
}

/// First remote message accepted by `predicate`, or the error built by `missing`
fn first_remote_match<P, E>(
    schema: &Schema,
    span: SpanId,
    predicate: P,
    missing: E,
) -> Result<MessageId>
where
    P: Fn(&Message) -> bool,
    E: FnOnce(String, String) -> RenderError,
{
    let (proxy, remote) = remote_of(schema, span)?;
    let found = schema
        .span_messages(remote)?
        .find(|(_, message)| predicate(message))
        .map(|(id, _)| id);

    match found {
        Some(id) => Ok(id),
        None => {
            let remote_name = schema.span(remote)?.name.clone();
            tracing::debug!(
                span = %proxy.name,
                remote_span = %remote_name,
                "no viable proxy message"
            );
            Err(missing(proxy.name.clone(), remote_name))
        }
    }
}

/// Remote start message carrying an embedded reference
///
/// # Errors
///
/// - `NotAProxy` if the span has no remote span
/// - `NoViableStartMessage` if no remote message qualifies
pub fn proxy_start_message(schema: &Schema, span: SpanId) -> Result<MessageId> {
    first_remote_match(
        schema,
        span,
        |m| m.kind.is_start() && m.reference_embedded,
        |span, remote_span| RenderError::NoViableStartMessage { span, remote_span },
    )
}

/// Remote end message with exactly one field and an embedded reference
///
/// # Errors
///
/// - `NotAProxy` if the span has no remote span
/// - `NoViableEndMessage` if no remote message qualifies
pub fn proxy_end_message(schema: &Schema, span: SpanId) -> Result<MessageId> {
    first_remote_match(
        schema,
        span,
        |m| m.kind.is_end() && m.field_count() == 1 && m.reference_embedded,
        |span, remote_span| RenderError::NoViableEndMessage { span, remote_span },
    )
}

/// Remote log/msg messages carrying an embedded reference
///
/// Lazily filtered in declaration order; an empty result is valid.
///
/// # Errors
///
/// Returns `NotAProxy` if the span has no remote span.
pub fn proxy_log_messages(
    schema: &Schema,
    span: SpanId,
) -> Result<impl Iterator<Item = MessageId> + '_> {
    let (_, remote) = remote_of(schema, span)?;
    Ok(schema
        .span_messages(remote)?
        .filter(|(_, message)| message.kind.is_log() && message.reference_embedded)
        .map(|(id, _)| id))
}

/// App owning the remote span of a proxy
///
/// # Errors
///
/// Returns `NotAProxy` if the span has no remote span.
pub fn remote_app(schema: &Schema, span: SpanId) -> Result<AppId> {
    let (_, remote) = remote_of(schema, span)?;
    span_app(schema, remote)
}

/// Type of the span's correlation key
///
/// Taken from the reference field of the first own message (declaration
/// order) that embeds its reference.
///
/// # Errors
///
/// Returns `NoReferenceMessage` if no message embeds a reference.
pub fn reference_type(schema: &Schema, span: SpanId) -> Result<FieldType> {
    let reference = schema
        .span_messages(span)?
        .find(|(_, message)| message.reference_embedded)
        .and_then(|(_, message)| message.reference_field);

    match reference {
        Some(field) => Ok(schema.field(field)?.field_type),
        None => Err(RenderError::NoReferenceMessage {
            span: schema.span(span)?.name.clone(),
        }),
    }
}

/// App owning a span
///
/// # Errors
///
/// Returns `SpanNotFound` for a foreign id.
pub fn span_app(schema: &Schema, span: SpanId) -> Result<AppId> {
    Ok(schema.span(span)?.app)
}
