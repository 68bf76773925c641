#![allow(clippy::unwrap_used, clippy::expect_used)]

// Integration tests for snapshot parsing: version checks and structural
// validation before any schema is built

use renderc_core::{ExErrorKind, MessageKind};
use renderc_store::seed::{parse_snapshot_file, parse_snapshot_str};
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

#[test]
fn test_parse_minimal_snapshot() {
    let path = fixtures_dir().join("snapshot_minimal.yaml");

    let result = parse_snapshot_file(&path);

    assert!(
        result.is_ok(),
        "Should parse minimal snapshot: {:?}",
        result.err()
    );
    let snapshot = result.unwrap();
    assert_eq!(snapshot.schema_version, 0);
    assert_eq!(snapshot.package, "minimal");
    assert_eq!(snapshot.apps.len(), 1);
    assert_eq!(snapshot.apps[0].spans[0].messages[0].kind, MessageKind::Start);
}

#[test]
fn test_parse_full_snapshot() {
    let path = fixtures_dir().join("snapshot_full.yaml");

    let snapshot = parse_snapshot_file(&path).unwrap();

    assert_eq!(snapshot.apps.len(), 2);
    let flow = &snapshot.apps[0].spans[0];
    let proxy = flow.proxy.as_ref().expect("flow is a proxy");
    assert_eq!(proxy.app, "ingest");
    assert_eq!(proxy.span, "socket");
    assert!(flow.messages.is_empty());

    let socket = &snapshot.apps[1].spans[0];
    assert_eq!(socket.pool_size, Some(8192));
    assert_eq!(socket.messages[0].fields[0].short_string, Some(16));
    assert_eq!(socket.messages[2].fields[2].array, Some(4));

    assert_eq!(snapshot.metrics.len(), 1);
    assert_eq!(snapshot.metrics[0].fields.len(), 4);
}

#[test]
fn test_parse_rejects_unsupported_version() {
    let path = fixtures_dir().join("snapshot_bad_version.yaml");

    let err = parse_snapshot_file(&path).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::UnsupportedVersion);
    assert_eq!(err.code(), "ERR_UNSUPPORTED_VERSION");
    assert!(err.message().contains("schema_version: 2"));
}

#[test]
fn test_parse_missing_file_is_io_error() {
    let path = fixtures_dir().join("does_not_exist.yaml");

    let err = parse_snapshot_file(&path).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Io);
    assert_eq!(err.op(), Some("snapshot_read"));
}

#[test]
fn test_parse_rejects_unknown_message_kind() {
    let yaml = r#"
schema_version: 0
package: p
apps:
  - name: a
    spans:
      - name: s
        messages:
          - { name: m, kind: update, rpc_id: 1 }
"#;

    let err = parse_snapshot_str(yaml).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Serialization);
}

#[test]
fn test_parse_rejects_self_referential_proxy() {
    let yaml = r#"
schema_version: 0
package: p
apps:
  - name: a
    spans:
      - name: s
        proxy: { app: a, span: s }
"#;

    let err = parse_snapshot_str(yaml).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    assert!(err.message().contains("a.s"));
}

#[test]
fn test_parse_rejects_empty_package() {
    let err = parse_snapshot_str("schema_version: 0\npackage: \"  \"\n").unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
}
