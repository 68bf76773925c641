use serde::{Deserialize, Serialize};

use super::ids::{AppId, MessageId, SpanId};

/// Pool size used when a span does not declare one
pub const DEFAULT_POOL_SIZE: u64 = 4096;

/// A span: a set of lifecycle messages sharing one correlation key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Owning app
    pub app: AppId,

    pub name: String,

    /// Messages in declaration order
    pub messages: Vec<MessageId>,

    pub is_proxy: bool,

    /// At most one live instance at a time
    pub is_singleton: bool,

    /// Explicit request for connection hashing
    pub conn_hash: bool,

    /// Span whose messages satisfy this proxy span's lifecycle
    pub remote_span: Option<SpanId>,

    /// Explicit pool size; values <= 0 mean "use the default"
    pub pool_size: Option<i64>,
}

impl Span {
    pub fn new(app: AppId, name: impl Into<String>) -> Self {
        Self {
            app,
            name: name.into(),
            messages: Vec::new(),
            is_proxy: false,
            is_singleton: false,
            conn_hash: false,
            remote_span: None,
            pool_size: None,
        }
    }

    /// Effective pool size: the explicit override when positive, else 4096
    pub fn pool_size(&self) -> u64 {
        match self.pool_size {
            Some(size) if size > 0 => size.unsigned_abs(),
            _ => DEFAULT_POOL_SIZE,
        }
    }

    /// Whether instances are hashed by connection
    ///
    /// An explicit request wins; otherwise any non-singleton span with at
    /// least one message is hashed.
    pub fn conn_hash(&self) -> bool {
        if self.conn_hash {
            return true;
        }
        !self.messages.is_empty() && !self.is_singleton
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_size_default() {
        let mut span = Span::new(AppId(0), "flow");
        assert_eq!(span.pool_size(), DEFAULT_POOL_SIZE);

        span.pool_size = Some(0);
        assert_eq!(span.pool_size(), 4096);

        span.pool_size = Some(-12);
        assert_eq!(span.pool_size(), 4096);

        span.pool_size = Some(128);
        assert_eq!(span.pool_size(), 128);

        span.pool_size = Some(i64::MAX);
        assert_eq!(span.pool_size(), 9_223_372_036_854_775_807);
    }

    #[test]
    fn test_conn_hash_policy() {
        let mut span = Span::new(AppId(0), "flow");
        // no messages
        assert!(!span.conn_hash());

        span.messages.push(MessageId(0));
        assert!(span.conn_hash());

        span.is_singleton = true;
        assert!(!span.conn_hash());

        span.conn_hash = true;
        assert!(span.conn_hash());
    }
}
