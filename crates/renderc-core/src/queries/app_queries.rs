use std::collections::HashSet;

use crate::errors::Result;
use crate::model::{AppId, MessageId, MetricId};
use crate::ops::Schema;

/// Distinct apps owning the remote spans of this app's proxy spans
///
/// Ordered by first appearance among the app's spans.
///
/// # Errors
///
/// Returns a lookup error for a foreign id.
pub fn remote_apps(schema: &Schema, app: AppId) -> Result<Vec<AppId>> {
    let mut seen = HashSet::new();
    let mut remotes = Vec::new();
    for span_id in &schema.app(app)?.spans {
        let span = schema.span(*span_id)?;
        let Some(remote) = span.remote_span.filter(|_| span.is_proxy) else {
            continue;
        };
        let remote_app = schema.span(remote)?.app;
        if seen.insert(remote_app) {
            remotes.push(remote_app);
        }
    }
    Ok(remotes)
}

/// All messages of all spans of an app, span order then message order
///
/// # Errors
///
/// Returns a lookup error for a foreign id.
pub fn app_messages(schema: &Schema, app: AppId) -> Result<Vec<MessageId>> {
    let mut messages = Vec::new();
    for span in &schema.app(app)?.spans {
        messages.extend(schema.span(*span)?.messages.iter().copied());
    }
    Ok(messages)
}

/// Metrics of the document owning the app
///
/// # Errors
///
/// Returns `AppNotFound` for a foreign id.
pub fn app_metrics(schema: &Schema, app: AppId) -> Result<Vec<MetricId>> {
    schema.app(app)?;
    Ok(schema.metrics().map(|(id, _)| id).collect())
}
