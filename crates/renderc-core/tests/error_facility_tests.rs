use renderc_core::errors::{ExError, ExErrorKind, RenderError};

#[test]
fn test_not_found_carries_entity() {
    let err = RenderError::SpanNotFound {
        span: "ingest.socket".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::NotFound);
    assert_eq!(ex_err.code(), "ERR_NOT_FOUND");
    assert_eq!(ex_err.span(), Some("ingest.socket"));
}

#[test]
fn test_unresolved_field_type_structured_fields() {
    let err = RenderError::UnresolvedFieldType {
        field: "socket_start.sk".to_string(),
        reason: "declares no type".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidFieldType);
    assert!(ex_err.message().contains("socket_start.sk"));
    assert!(ex_err.message().contains("declares no type"));
}

#[test]
fn test_proxy_errors_distinct_from_not_a_proxy() {
    let missing: ExError = RenderError::NoViableEndMessage {
        span: "flow".to_string(),
        remote_span: "socket".to_string(),
    }
    .into();
    let plain: ExError = RenderError::NotAProxy {
        span: "flow".to_string(),
    }
    .into();

    assert_eq!(missing.kind(), ExErrorKind::NoViableEndMessage);
    assert_eq!(missing.op(), Some("proxy_end_message"));
    assert_eq!(plain.kind(), ExErrorKind::NotAProxy);
    assert_ne!(missing.kind(), plain.kind());
}

#[test]
fn test_reference_errors_name_the_message() {
    let ex_err: ExError = RenderError::ReferenceFieldNotMember {
        message: "socket_close".to_string(),
        field: "sk".to_string(),
    }
    .into();

    assert_eq!(ex_err.kind(), ExErrorKind::ReferenceNotMember);
    assert_eq!(ex_err.message_name(), Some("socket_close"));
}

#[test]
fn test_layout_overflow_converts_to_its_own_kind() {
    let ex_err: ExError = RenderError::LayoutOverflow {
        name: "socket_stats".to_string(),
    }
    .into();

    assert_eq!(ex_err.kind(), ExErrorKind::LayoutOverflow);
    assert_eq!(ex_err.code(), "ERR_LAYOUT_OVERFLOW");
    assert!(ex_err.message().contains("socket_stats"));
}

#[test]
fn test_error_kind_code_mapping() {
    // Each kind has a stable, unique code
    let kinds = vec![
        (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
        (ExErrorKind::InvalidFieldType, "ERR_INVALID_FIELD_TYPE"),
        (ExErrorKind::InvalidArraySize, "ERR_INVALID_ARRAY_SIZE"),
        (ExErrorKind::LayoutOverflow, "ERR_LAYOUT_OVERFLOW"),
        (ExErrorKind::DuplicateId, "ERR_DUPLICATE_ID"),
        (ExErrorKind::DuplicateName, "ERR_DUPLICATE_NAME"),
        (ExErrorKind::ReferenceNotMember, "ERR_REFERENCE_NOT_MEMBER"),
        (ExErrorKind::MissingReference, "ERR_MISSING_REFERENCE"),
        (ExErrorKind::NotAProxy, "ERR_NOT_A_PROXY"),
        (ExErrorKind::SelfReferentialProxy, "ERR_SELF_REFERENTIAL_PROXY"),
        (ExErrorKind::NoViableStartMessage, "ERR_NO_VIABLE_START_MESSAGE"),
        (ExErrorKind::NoViableEndMessage, "ERR_NO_VIABLE_END_MESSAGE"),
        (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        (ExErrorKind::UnsupportedVersion, "ERR_UNSUPPORTED_VERSION"),
        (ExErrorKind::Io, "ERR_IO"),
        (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
        (ExErrorKind::Internal, "ERR_INTERNAL"),
    ];

    let mut seen = std::collections::HashSet::new();
    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
        assert!(seen.insert(expected_code));
    }
}
