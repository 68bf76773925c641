//! Struct layout for metric value structs and externally-packed messages

use serde::Serialize;

use crate::errors::{RenderError, Result};
use crate::model::{MessageId, MetricId};
use crate::ops::Schema;
use crate::render::prototype::fields_by_id;

/// Struct memory layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructLayout {
    pub name: String,
    pub size: u64,
    pub align: u32,
    pub fields: Vec<FieldLayout>,
}

/// Field placement within a struct
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldLayout {
    pub name: String,
    pub offset: u64,
    pub size: u64,
    pub align: u32,
}

impl StructLayout {
    /// Look up a field placement by name
    pub fn field(&self, name: &str) -> Option<&FieldLayout> {
        self.fields.iter().find(|f| f.name == name)
    }
}

fn align_up(offset: u64, align: u32) -> Option<u64> {
    offset.checked_next_multiple_of(u64::from(align))
}

/// Lay fields out in the given order
///
/// With `byte_packed` every field sits directly after the previous one, as in
/// an `__attribute__((packed))` wire struct; otherwise natural C alignment
/// applies and the total size is padded to the struct alignment.
///
/// # Errors
///
/// Returns `LayoutOverflow` when an offset or the total size leaves the
/// `u64` range.
fn lay_out<'a, I>(name: &str, fields: I, byte_packed: bool) -> Result<StructLayout>
where
    I: IntoIterator<Item = (&'a str, u64, u32)>,
{
    let overflow = || RenderError::LayoutOverflow {
        name: name.to_string(),
    };
    let mut offset = 0u64;
    let mut max_align = 1u32;
    let mut placed = Vec::new();

    for (field_name, size, natural_align) in fields {
        let align = if byte_packed { 1 } else { natural_align.max(1) };
        offset = align_up(offset, align).ok_or_else(overflow)?;
        placed.push(FieldLayout {
            name: field_name.to_string(),
            offset,
            size,
            align,
        });
        offset = offset.checked_add(size).ok_or_else(overflow)?;
        max_align = max_align.max(align);
    }

    Ok(StructLayout {
        name: name.to_string(),
        size: align_up(offset, max_align).ok_or_else(overflow)?,
        align: max_align,
        fields: placed,
    })
}

/// Layout of a metric's value struct, always in the parsed representation
///
/// # Errors
///
/// Returns `MetricNotFound` for a foreign id.
pub fn metric_layout(schema: &Schema, metric: MetricId) -> Result<StructLayout> {
    let metric = schema.metric(metric)?;
    let fields = metric.fields.iter().map(|f| {
        (
            f.name.as_str(),
            u64::from(f.field_type.parsed_size()),
            f.field_type.parsed_alignment(),
        )
    });
    lay_out(&metric.name, fields, false)
}

/// Layout of a message whose packing mode is supplied by the caller
///
/// Fields are placed in ascending `id` order. `packed == true` produces the
/// byte-packed wire struct; `false` the naturally aligned parsed struct.
///
/// # Errors
///
/// Returns `MessageNotFound` for a foreign id and `LayoutOverflow` when the
/// fields do not fit in a `u64` byte range.
pub fn xpacked_layout(schema: &Schema, message: MessageId, packed: bool) -> Result<StructLayout> {
    let name = &schema.message(message)?.name;
    let fields = fields_by_id(schema, message, false)?;
    let placements = fields
        .iter()
        .map(|f| (f.name.as_str(), f.size(packed), f.alignment(packed)));
    lay_out(name, placements, packed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_up() {
        assert_eq!(align_up(0, 8), Some(0));
        assert_eq!(align_up(1, 8), Some(8));
        assert_eq!(align_up(9, 4), Some(12));
        assert_eq!(align_up(3, 1), Some(3));
        assert_eq!(align_up(u64::MAX, 8), None);
    }

    #[test]
    fn test_natural_layout_pads_between_fields() {
        let layout = lay_out("m", [("a", 1, 1), ("b", 8, 8), ("c", 2, 2)], false).unwrap();

        assert_eq!(layout.field("b").map(|f| f.offset), Some(8));
        assert_eq!(layout.field("c").map(|f| f.offset), Some(16));
        assert_eq!(layout.size, 24);
        assert_eq!(layout.align, 8);
    }

    #[test]
    fn test_byte_packed_layout_has_no_padding() {
        let layout = lay_out("m", [("a", 1, 1), ("b", 8, 8), ("c", 2, 2)], true).unwrap();

        assert_eq!(layout.field("b").map(|f| f.offset), Some(1));
        assert_eq!(layout.field("c").map(|f| f.offset), Some(9));
        assert_eq!(layout.size, 11);
        assert_eq!(layout.align, 1);
    }

    #[test]
    fn test_offset_overflow_is_reported() {
        let err = lay_out("huge", [("a", u64::MAX, 1), ("b", 1, 1)], true).unwrap_err();
        assert_eq!(
            err,
            RenderError::LayoutOverflow {
                name: "huge".to_string()
            }
        );
    }

    #[test]
    fn test_empty_struct() {
        let layout = lay_out("empty", std::iter::empty(), false).unwrap();
        assert_eq!(layout.size, 0);
        assert_eq!(layout.align, 1);
    }
}
