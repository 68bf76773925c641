//! Message prototype synthesis
//!
//! Every variant renders the message's fields sorted ascending by field `id`,
//! independent of declaration order. The `comma_*` variants prefix a
//! non-empty list with `", "` so it can be spliced after fixed arguments;
//! an empty list stays empty.

use crate::errors::Result;
use crate::model::{Field, FieldType, MessageId};
use crate::ops::Schema;

/// Fields of a message sorted by `id`, optionally without the reference field
///
/// # Errors
///
/// Returns `MessageNotFound` for a foreign id.
pub(crate) fn fields_by_id(
    schema: &Schema,
    message: MessageId,
    exclude_reference: bool,
) -> Result<Vec<&Field>> {
    let reference = schema.message(message)?.reference_field;
    let mut fields: Vec<&Field> = schema
        .message_fields(message)?
        .filter(|(id, _)| !(exclude_reference && reference == Some(*id)))
        .map(|(_, field)| field)
        .collect();
    fields.sort_by_key(|field| field.id);
    Ok(fields)
}

fn prepend_comma_if_not_empty(list: String) -> String {
    if list.is_empty() {
        list
    } else {
        format!(", {}", list)
    }
}

/// `const <parsed type> <name><suffix>`
fn declaration(field: &Field) -> String {
    format!(
        "const {} {}{}",
        field.field_type.parsed_c_type(),
        field.name,
        field.array_suffix()
    )
}

/// Short strings become `const char <name>[<len>]<suffix>`
fn buffer_declaration(field: &Field) -> String {
    match field.field_type {
        FieldType::ShortString { len } => {
            format!("const char {}[{}]{}", field.name, len, field.array_suffix())
        }
        FieldType::Primitive(_) => declaration(field),
    }
}

/// Short strings are passed as a pointer to their bytes
fn raw_argument(field: &Field) -> String {
    if field.field_type.is_short_string() {
        format!("{}.data()", field.name)
    } else {
        field.name.clone()
    }
}

fn join(fields: &[&Field], render: fn(&Field) -> String) -> String {
    fields
        .iter()
        .map(|field| render(field))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Typed parameter list, short strings as char buffers
///
/// # Errors
///
/// Returns `MessageNotFound` for a foreign id.
pub fn prototype(schema: &Schema, message: MessageId) -> Result<String> {
    Ok(join(&fields_by_id(schema, message, false)?, buffer_declaration))
}

/// [`prototype`] with a leading `", "` when non-empty
///
/// # Errors
///
/// Returns `MessageNotFound` for a foreign id.
pub fn comma_prototype(schema: &Schema, message: MessageId) -> Result<String> {
    prototype(schema, message).map(prepend_comma_if_not_empty)
}

/// Field names only
///
/// # Errors
///
/// Returns `MessageNotFound` for a foreign id.
pub fn call_prototype(schema: &Schema, message: MessageId) -> Result<String> {
    Ok(join(&fields_by_id(schema, message, false)?, |field| {
        field.name.clone()
    }))
}

/// [`call_prototype`] with a leading `", "` when non-empty
///
/// # Errors
///
/// Returns `MessageNotFound` for a foreign id.
pub fn comma_call_prototype(schema: &Schema, message: MessageId) -> Result<String> {
    call_prototype(schema, message).map(prepend_comma_if_not_empty)
}

/// Typed parameter list without the reference field
///
/// Every remaining field uses the general `const <type> <name>` form,
/// short strings included.
///
/// # Errors
///
/// Returns `MessageNotFound` for a foreign id.
pub fn noref_prototype(schema: &Schema, message: MessageId) -> Result<String> {
    Ok(join(&fields_by_id(schema, message, true)?, declaration))
}

/// [`noref_prototype`] with a leading `", "` when non-empty
///
/// # Errors
///
/// Returns `MessageNotFound` for a foreign id.
pub fn noref_comma_prototype(schema: &Schema, message: MessageId) -> Result<String> {
    noref_prototype(schema, message).map(prepend_comma_if_not_empty)
}

/// Call-site arguments without the reference field, short strings as
/// `<name>.data()`, with a leading `", "` when non-empty
///
/// # Errors
///
/// Returns `MessageNotFound` for a foreign id.
pub fn noref_comma_call_prototype(schema: &Schema, message: MessageId) -> Result<String> {
    let fields = fields_by_id(schema, message, true)?;
    Ok(prepend_comma_if_not_empty(join(&fields, raw_argument)))
}
