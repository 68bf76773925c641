use serde::{Deserialize, Serialize};

/// Closed set of primitive field kinds
///
/// `String` is the dynamic string: a 16-bit index into a side table on the
/// wire, a full blob descriptor once parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    U8,
    U16,
    U32,
    U64,
    U128,
    S8,
    S16,
    S32,
    S64,
    S128,
    String,
}

impl PrimitiveKind {
    /// Every kind, in declaration order
    pub const ALL: [PrimitiveKind; 11] = [
        PrimitiveKind::U8,
        PrimitiveKind::U16,
        PrimitiveKind::U32,
        PrimitiveKind::U64,
        PrimitiveKind::U128,
        PrimitiveKind::S8,
        PrimitiveKind::S16,
        PrimitiveKind::S32,
        PrimitiveKind::S64,
        PrimitiveKind::S128,
        PrimitiveKind::String,
    ];

    /// The kind's spelling in schema sources
    pub fn literal(&self) -> &'static str {
        match self {
            PrimitiveKind::U8 => "u8",
            PrimitiveKind::U16 => "u16",
            PrimitiveKind::U32 => "u32",
            PrimitiveKind::U64 => "u64",
            PrimitiveKind::U128 => "u128",
            PrimitiveKind::S8 => "s8",
            PrimitiveKind::S16 => "s16",
            PrimitiveKind::S32 => "s32",
            PrimitiveKind::S64 => "s64",
            PrimitiveKind::S128 => "s128",
            PrimitiveKind::String => "string",
        }
    }

    /// Parse a schema spelling back into a kind
    pub fn from_literal(literal: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.literal() == literal)
    }
}

impl std::fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.literal())
    }
}

/// Type of a message or metric field
///
/// Exactly one of short string or primitive kind, enforced by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Fixed-capacity string laid out identically on the wire and parsed
    ShortString { len: u32 },
    Primitive(PrimitiveKind),
}

impl FieldType {
    pub fn short_string(len: u32) -> Self {
        FieldType::ShortString { len }
    }

    pub fn is_short_string(&self) -> bool {
        matches!(self, FieldType::ShortString { .. })
    }

    /// True for the integer kinds: not a short string and not a dynamic string
    pub fn is_int(&self) -> bool {
        !matches!(
            self,
            FieldType::ShortString { .. } | FieldType::Primitive(PrimitiveKind::String)
        )
    }
}

impl From<PrimitiveKind> for FieldType {
    fn from(kind: PrimitiveKind) -> Self {
        FieldType::Primitive(kind)
    }
}
