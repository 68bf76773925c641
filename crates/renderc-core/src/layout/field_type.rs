use std::borrow::Cow;

use crate::model::{FieldType, PrimitiveKind};

/// Size of a dynamic string on the wire: a `u16` index into the side table
pub const WIRE_STRING_SIZE: u32 = 2;

/// Size of the parsed dynamic string descriptor
///
/// The emission layer declares `struct jb_blob { const char *buf; unsigned
/// short len; }`, which is 16 bytes with 8-byte alignment on LP64 targets.
pub const PARSED_BLOB_SIZE: u32 = 16;

/// Alignment of the parsed dynamic string descriptor
pub const PARSED_BLOB_ALIGN: u32 = 8;

const PARSED_BLOB_C_TYPE: &str = "struct jb_blob";
const WIRE_STRING_C_TYPE: &str = "uint16_t";

impl PrimitiveKind {
    /// Byte width of an integer kind; `None` for the dynamic string
    fn int_width(&self) -> Option<u32> {
        match self {
            PrimitiveKind::U8 | PrimitiveKind::S8 => Some(1),
            PrimitiveKind::U16 | PrimitiveKind::S16 => Some(2),
            PrimitiveKind::U32 | PrimitiveKind::S32 => Some(4),
            PrimitiveKind::U64 | PrimitiveKind::S64 => Some(8),
            PrimitiveKind::U128 | PrimitiveKind::S128 => Some(16),
            PrimitiveKind::String => None,
        }
    }

    fn c_type(&self, packed: bool) -> &'static str {
        match self {
            PrimitiveKind::U8 => "uint8_t",
            PrimitiveKind::U16 => "uint16_t",
            PrimitiveKind::U32 => "uint32_t",
            PrimitiveKind::U64 => "uint64_t",
            PrimitiveKind::U128 => "unsigned __int128",
            PrimitiveKind::S8 => "int8_t",
            PrimitiveKind::S16 => "int16_t",
            PrimitiveKind::S32 => "int32_t",
            PrimitiveKind::S64 => "int64_t",
            PrimitiveKind::S128 => "__int128",
            PrimitiveKind::String if packed => WIRE_STRING_C_TYPE,
            PrimitiveKind::String => PARSED_BLOB_C_TYPE,
        }
    }
}

impl FieldType {
    /// Byte size in the packed (`packed == true`) or parsed representation
    pub fn size(&self, packed: bool) -> u32 {
        match self {
            FieldType::ShortString { len } => *len,
            FieldType::Primitive(kind) => match kind.int_width() {
                Some(width) => width,
                None if packed => WIRE_STRING_SIZE,
                None => PARSED_BLOB_SIZE,
            },
        }
    }

    /// Alignment in the packed or parsed representation
    pub fn alignment(&self, packed: bool) -> u32 {
        match self {
            FieldType::ShortString { .. } => 1,
            FieldType::Primitive(kind) => match kind.int_width() {
                Some(width) => width,
                None if packed => WIRE_STRING_SIZE,
                None => PARSED_BLOB_ALIGN,
            },
        }
    }

    /// Canonical C/C++ type name, without any array wrapper
    pub fn c_type(&self, packed: bool) -> Cow<'static, str> {
        match self {
            FieldType::ShortString { len } => Cow::Owned(format!("short_string<{}>", len)),
            FieldType::Primitive(kind) => Cow::Borrowed(kind.c_type(packed)),
        }
    }

    /// Type name wrapped in `std::array<T,N>` when `array_size` is set
    ///
    /// `Some(0)` still wraps; only `None` yields the bare name.
    pub fn type_name(&self, packed: bool, array_size: Option<u32>) -> String {
        let base = self.c_type(packed);
        match array_size {
            Some(len) => format!("std::array<{},{}>", base, len),
            None => base.into_owned(),
        }
    }

    pub fn wire_size(&self) -> u32 {
        self.size(true)
    }

    pub fn parsed_size(&self) -> u32 {
        self.size(false)
    }

    pub fn wire_alignment(&self) -> u32 {
        self.alignment(true)
    }

    pub fn parsed_alignment(&self) -> u32 {
        self.alignment(false)
    }

    pub fn wire_c_type(&self) -> Cow<'static, str> {
        self.c_type(true)
    }

    pub fn parsed_c_type(&self) -> Cow<'static, str> {
        self.c_type(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dynamic_string_layout() {
        let string = FieldType::from(PrimitiveKind::String);
        assert_eq!(string.wire_size(), 2);
        assert_eq!(string.wire_alignment(), 2);
        assert_eq!(string.parsed_size(), 16);
        assert_eq!(string.parsed_alignment(), 8);
        assert_eq!(string.wire_c_type(), "uint16_t");
        assert_eq!(string.parsed_c_type(), "struct jb_blob");
    }

    #[test]
    fn test_short_string_layout() {
        let short = FieldType::short_string(40);
        assert_eq!(short.size(true), 40);
        assert_eq!(short.size(false), 40);
        assert_eq!(short.alignment(true), 1);
        assert_eq!(short.c_type(false), "short_string<40>");
    }

    #[test]
    fn test_int128_names() {
        assert_eq!(
            FieldType::from(PrimitiveKind::U128).parsed_c_type(),
            "unsigned __int128"
        );
        assert_eq!(FieldType::from(PrimitiveKind::S128).wire_c_type(), "__int128");
    }

    #[test]
    fn test_type_name_array_wrapper() {
        let ty = FieldType::from(PrimitiveKind::U32);
        assert_eq!(ty.type_name(false, None), "uint32_t");
        assert_eq!(ty.type_name(false, Some(4)), "std::array<uint32_t,4>");
        assert_eq!(ty.type_name(false, Some(0)), "std::array<uint32_t,0>");
    }
}
