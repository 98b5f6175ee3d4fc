use super::*;

/// Tests that a new message replaces the current one.
///
/// Verifies the slot holds a single message and ids keep increasing.
///
/// Expected: only the second message is shown
#[test]
fn notify_replaces_current_message() {
    let mut state = NotificationState::default();

    let first = state.notify("Loan created successfully", NotificationKind::Ok);
    let second = state.notify("An error has occurred", NotificationKind::Error);

    assert!(second > first);
    let current = state.current().unwrap();
    assert_eq!(current.id, second);
    assert_eq!(current.text, "An error has occurred");
    assert_eq!(current.kind, NotificationKind::Error);
}

/// Tests dismissing a replaced message.
///
/// Verifies the timer of an earlier message cannot hide the one that
/// replaced it.
///
/// Expected: stale dismiss is ignored, current dismiss clears
#[test]
fn dismiss_only_clears_current_message() {
    let mut state = NotificationState::default();
    let first = state.notify("Client deleted successfully", NotificationKind::Ok);
    let second = state.notify("Client updated successfully", NotificationKind::Ok);

    assert!(!state.dismiss(first));
    assert_eq!(state.current().map(|n| n.id), Some(second));

    assert!(state.dismiss(second));
    assert!(state.current().is_none());
}

/// Tests the text of a successful mutation.
///
/// Expected: "Client deleted successfully" as a success
#[test]
fn outcome_of_success_names_entity() {
    let (text, kind) = outcome_message(Operation::Delete, "client", &Ok(()));

    assert_eq!(text, "Client deleted successfully");
    assert_eq!(kind, NotificationKind::Ok);
}

/// Tests the text of a rejected mutation with a backend message.
///
/// Verifies the `msg` field of the error body is shown verbatim.
///
/// Expected: the backend message as an error
#[test]
fn outcome_of_failure_prefers_backend_message() {
    let err = ApiError::from_status(409, r#"{"msg":"Client has active loans"}"#);

    let (text, kind) = outcome_message(Operation::Delete, "client", &Err(err));

    assert_eq!(text, "Client has active loans");
    assert_eq!(kind, NotificationKind::Error);
}

/// Tests the text of a failed mutation without a usable body.
///
/// Expected: the per-operation failure text as an error
#[test]
fn outcome_of_failure_without_body_uses_fallback() {
    let err = ApiError::from_status(500, "");

    let (text, kind) = outcome_message(Operation::Delete, "client", &Err(err));

    assert_eq!(text, Operation::Delete.failure("client"));
    assert_eq!(kind, NotificationKind::Error);
}
