use super::*;

#[test]
fn reset_serializes_with_flag_and_zero_time() {
    assert_eq!(SessionMessage::Reset.to_json(), serde_json::json!({ "flag": true, "time": 0.0 }));
}

#[test]
fn time_update_serializes_duration() {
    assert_eq!(SessionMessage::TimeUpdate(42.0).to_json(), serde_json::json!({ "flag": false, "time": 42.0 }));
}

#[test]
fn reset_ignores_time_on_receipt() {
    let msg = SessionMessage::from_json(&serde_json::json!({ "flag": true, "time": 999 })).expect("parse");
    assert_eq!(msg, SessionMessage::Reset);
}

#[test]
fn out_of_range_time_is_accepted_unvalidated() {
    let msg = SessionMessage::from_json(&serde_json::json!({ "flag": false, "time": 5000.5 })).expect("parse");
    assert_eq!(msg, SessionMessage::TimeUpdate(5000.5));
}

#[test]
fn reset_without_time_decodes_as_reset() {
    let msg = SessionMessage::from_json(&serde_json::json!({ "flag": true })).expect("parse");
    assert_eq!(msg, SessionMessage::Reset);
}

#[test]
fn missing_fields_take_defaults() {
    let msg = SessionMessage::from_json(&serde_json::json!({ "time": 12 })).expect("parse");
    assert_eq!(msg, SessionMessage::TimeUpdate(12.0));
    let msg = SessionMessage::from_json(&serde_json::json!({})).expect("parse");
    assert_eq!(msg, SessionMessage::TimeUpdate(0.0));
}

#[test]
fn mistyped_fields_are_rejected() {
    let err = SessionMessage::from_json(&serde_json::json!({ "flag": "yes", "time": 12 })).expect_err("bool required");
    assert!(matches!(err, MessageError::Json(_)));
}

#[test]
fn frame_carries_group_sender_and_payload() {
    let frame = SessionMessage::TimeUpdate(42.0).to_frame("group-1", "peer-1");
    assert_eq!(frame.syscall, SESSION_RESTART_SYSCALL);
    assert_eq!(frame.group_id, "group-1");
    assert_eq!(frame.from.as_deref(), Some("peer-1"));
    assert_eq!(SessionMessage::from_frame(&frame).expect("parse"), SessionMessage::TimeUpdate(42.0));
}

#[test]
fn frame_for_other_widget_is_rejected() {
    let frame = Frame::new("board:join", "group-1", None, serde_json::json!({}));
    let err = SessionMessage::from_frame(&frame).expect_err("wrong syscall");
    assert!(matches!(err, MessageError::UnexpectedSyscall(s) if s == "board:join"));
}
