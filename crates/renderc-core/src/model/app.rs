use serde::{Deserialize, Serialize};

use super::ids::SpanId;

/// An application: the unit that owns spans and emits one generated index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
    pub name: String,

    /// Spans in declaration order
    pub spans: Vec<SpanId>,
}

impl App {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            spans: Vec::new(),
        }
    }
}
