//! Typed arena indices
//!
//! Entities reference their parents and children through these indices into
//! the [`Schema`](crate::ops::Schema) arena, never through references.

use serde::{Deserialize, Serialize};

macro_rules! arena_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        pub struct $name(pub(crate) usize);

        impl $name {
            /// Position of the entity in its arena
            pub fn index(self) -> usize {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}#{}", stringify!($name), self.0)
            }
        }
    };
}

arena_id!(
    /// Index of an [`App`](super::App)
    AppId
);
arena_id!(
    /// Index of a [`Span`](super::Span)
    SpanId
);
arena_id!(
    /// Index of a [`Message`](super::Message)
    MessageId
);
arena_id!(
    /// Index of a [`Field`](super::Field)
    FieldId
);
arena_id!(
    /// Index of a [`Metric`](super::Metric)
    MetricId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_kind() {
        assert_eq!(SpanId(3).to_string(), "SpanId#3");
        assert_eq!(FieldId(0).index(), 0);
    }
}
