use std::borrow::Cow;

use crate::model::Field;

impl Field {
    /// Total footprint: element size times array length (1 for scalars)
    ///
    /// The product of two `u32` values always fits in `u64`.
    pub fn size(&self, packed: bool) -> u64 {
        u64::from(self.field_type.size(packed)) * u64::from(self.array_size.unwrap_or(1))
    }

    /// Alignment of the field; arrays align like their element
    pub fn alignment(&self, packed: bool) -> u32 {
        self.field_type.alignment(packed)
    }

    /// Declarator suffix: `""` for scalars, `"[N]"` for arrays
    pub fn array_suffix(&self) -> Cow<'static, str> {
        match self.array_size {
            Some(len) => Cow::Owned(format!("[{}]", len)),
            None => Cow::Borrowed(""),
        }
    }

    /// Type name of the field, array-wrapped when the field is an array
    pub fn type_name(&self, packed: bool) -> String {
        self.field_type.type_name(packed, self.array_size)
    }

    pub fn wire_size(&self) -> u64 {
        self.size(true)
    }

    pub fn parsed_size(&self) -> u64 {
        self.size(false)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{Field, FieldType, MessageId, PrimitiveKind};

    #[test]
    fn test_array_field_footprint() {
        let field = Field::new(
            MessageId(0),
            1,
            "addrs",
            FieldType::from(PrimitiveKind::U32),
        )
        .with_array(4);

        assert_eq!(field.size(true), 16);
        assert_eq!(field.array_suffix(), "[4]");
        assert_eq!(field.type_name(false), "std::array<uint32_t,4>");
    }

    #[test]
    fn test_scalar_string_field() {
        let field = Field::new(MessageId(0), 2, "comm", FieldType::from(PrimitiveKind::String));

        assert_eq!(field.wire_size(), 2);
        assert_eq!(field.parsed_size(), 16);
        assert_eq!(field.array_suffix(), "");
        assert_eq!(field.type_name(true), "uint16_t");
    }

    #[test]
    fn test_huge_array_footprint_is_exact() {
        let field = Field::new(MessageId(0), 1, "buf", FieldType::short_string(1 << 20))
            .with_array(1 << 13);

        assert_eq!(field.size(true), 1 << 33);
        assert_eq!(field.parsed_size(), 8_589_934_592);
    }
}
