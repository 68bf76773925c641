use serde::{Deserialize, Serialize};

use super::field_type::FieldType;
use super::ids::MessageId;

/// A typed field of a message
///
/// `id` is the deterministic ordering key used by every rendering; it is not
/// necessarily equal to the declaration position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Owning message
    pub message: MessageId,

    /// Ordering key, unique within the message
    pub id: u32,

    pub name: String,

    pub field_type: FieldType,

    /// Fixed array length; `None` for scalar fields
    pub array_size: Option<u32>,
}

impl Field {
    pub fn new(
        message: MessageId,
        id: u32,
        name: impl Into<String>,
        field_type: FieldType,
    ) -> Self {
        Self {
            message,
            id,
            name: name.into(),
            field_type,
            array_size: None,
        }
    }

    /// Turn the field into a fixed-length array field
    pub fn with_array(mut self, len: u32) -> Self {
        self.array_size = Some(len);
        self
    }

    pub fn is_array(&self) -> bool {
        self.array_size.is_some()
    }
}
