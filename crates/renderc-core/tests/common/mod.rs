use renderc_core::{
    FieldSpec, FieldType, MessageId, MessageKind, PrimitiveKind, Schema, SchemaBuilder, SpanId,
    SpanOptions,
};

/// Shorthand for a primitive field type
#[allow(dead_code)]
pub fn prim(kind: PrimitiveKind) -> FieldType {
    FieldType::Primitive(kind)
}

/// Build a schema holding a single message with the given fields
///
/// The message lives in span `s` of app `a`. When `reference` names one of
/// the fields it becomes the embedded reference field.
#[allow(dead_code)]
pub fn single_message(
    kind: MessageKind,
    fields: Vec<FieldSpec>,
    reference: Option<&str>,
) -> (Schema, MessageId) {
    let mut builder = SchemaBuilder::new("test");
    let app = builder.add_app("a").unwrap();
    let span = builder.add_span(app, "s", SpanOptions::default()).unwrap();
    let message = builder.add_message(span, "m", kind, 1).unwrap();
    for spec in fields {
        let is_reference = reference == Some(spec.name.as_str());
        let field = builder.add_field(message, spec).unwrap();
        if is_reference {
            builder.set_reference(message, field, true).unwrap();
        }
    }
    (builder.build().unwrap(), message)
}

/// Remote message declaration used by [`proxy_schema`]
#[allow(dead_code)]
pub struct RemoteMessage {
    pub name: &'static str,
    pub kind: MessageKind,
    pub field_count: u32,
    pub embedded: bool,
}

#[allow(dead_code)]
pub fn remote(
    name: &'static str,
    kind: MessageKind,
    field_count: u32,
    embedded: bool,
) -> RemoteMessage {
    RemoteMessage {
        name,
        kind,
        field_count,
        embedded,
    }
}

/// Build a proxy span `matching.flow` whose remote span `ingest.socket`
/// carries the given messages in order
///
/// Every remote message gets `field_count` u64 fields `f1..fN`; when
/// `embedded` is set and the message has fields, `f1` is its embedded
/// reference.
#[allow(dead_code)]
pub fn proxy_schema(messages: &[RemoteMessage]) -> (Schema, SpanId, Vec<MessageId>) {
    let mut builder = SchemaBuilder::new("test");
    let ingest = builder.add_app("ingest").unwrap();
    let matching = builder.add_app("matching").unwrap();
    let socket = builder
        .add_span(ingest, "socket", SpanOptions::default())
        .unwrap();
    let flow = builder
        .add_span(matching, "flow", SpanOptions::default())
        .unwrap();
    builder.link_proxy(flow, socket).unwrap();

    let mut ids = Vec::new();
    for (rpc_id, remote) in (1u32..).zip(messages) {
        let message = builder
            .add_message(socket, remote.name, remote.kind, rpc_id)
            .unwrap();
        for id in 1..=remote.field_count {
            let spec = FieldSpec::new(id, format!("f{}", id), prim(PrimitiveKind::U64));
            let field = builder.add_field(message, spec).unwrap();
            if id == 1 && remote.embedded {
                builder.set_reference(message, field, true).unwrap();
            }
        }
        ids.push(message);
    }

    (builder.build().unwrap(), flow, ids)
}
