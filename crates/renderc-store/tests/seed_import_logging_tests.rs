#![allow(clippy::unwrap_used, clippy::expect_used)]

// Lifecycle logging of the importer. Kept in its own test binary so no other
// import shares the captured "import_snapshot" events.

use renderc_core::logging_facility::init_test_capture;
use renderc_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_APP_COUNT, FIELD_ERR_CODE, FIELD_MESSAGE_COUNT,
    FIELD_METRIC_COUNT, FIELD_SPAN_COUNT,
};
use renderc_store::seed::import_snapshot_str;

const OP: &str = "import_snapshot";

#[test]
fn test_import_emits_lifecycle_events() {
    let capture = init_test_capture();

    let yaml = r#"
schema_version: 0
package: logged
apps:
  - name: a
    spans:
      - name: s
        messages:
          - { name: m, kind: log, rpc_id: 1 }
"#;
    import_snapshot_str(yaml).unwrap();

    capture.assert_event_exists(OP, EVENT_START);
    capture.assert_event_exists(OP, EVENT_END);
    let end = capture
        .events_for_op(OP)
        .into_iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END))
        .unwrap();
    assert_eq!(end.field(FIELD_APP_COUNT), Some("1"));
    assert_eq!(end.field(FIELD_SPAN_COUNT), Some("1"));
    assert_eq!(end.field(FIELD_MESSAGE_COUNT), Some("1"));
    assert_eq!(end.field(FIELD_METRIC_COUNT), Some("0"));

    let broken = r#"
schema_version: 0
package: broken
apps:
  - name: a
    spans:
      - { name: s, proxy: { app: b, span: t } }
"#;
    assert!(import_snapshot_str(broken).is_err());

    let failure = capture
        .events_for_op(OP)
        .into_iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .expect("import failure is logged");
    assert_eq!(failure.field(FIELD_ERR_CODE), Some("ERR_NOT_FOUND"));
}
