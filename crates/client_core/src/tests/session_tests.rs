use super::*;

#[test]
fn starts_idle_with_no_error_and_no_processed_document() {
    let lifecycle = RequestLifecycle::new();
    assert!(!lifecycle.is_busy());
    assert!(lifecycle.last_error().is_none());
    assert!(!lifecycle.has_processed_document());
}

#[test]
fn begin_then_complete_returns_to_idle() {
    let mut lifecycle = RequestLifecycle::new();
    lifecycle.begin();
    assert!(lifecycle.is_busy());
    lifecycle.complete();
    assert!(!lifecycle.is_busy());
    assert!(lifecycle.last_error().is_none());
}

#[test]
fn fail_stores_the_message_and_leaves_busy() {
    let mut lifecycle = RequestLifecycle::new();
    lifecycle.begin();
    lifecycle.fail("file too large");
    assert!(!lifecycle.is_busy());
    assert_eq!(lifecycle.last_error(), Some("file too large"));
}

#[test]
fn dismiss_clears_only_the_error() {
    let mut lifecycle = RequestLifecycle::new();
    lifecycle.mark_document_processed();
    lifecycle.begin();
    lifecycle.fail("boom");

    lifecycle.dismiss_error();
    assert!(lifecycle.last_error().is_none());
    assert!(!lifecycle.is_busy());
    assert!(lifecycle.has_processed_document());
}

#[test]
fn dismiss_while_busy_does_not_interrupt_the_operation() {
    let mut lifecycle = RequestLifecycle::new();
    lifecycle.begin();
    lifecycle.dismiss_error();
    assert!(lifecycle.is_busy());
}

#[test]
fn starting_a_new_operation_drops_the_previous_banner() {
    let mut lifecycle = RequestLifecycle::new();
    lifecycle.begin();
    lifecycle.fail("boom");
    lifecycle.begin();
    assert!(lifecycle.is_busy());
    assert!(lifecycle.last_error().is_none());
}

#[test]
fn snapshot_mirrors_the_current_state() {
    let mut lifecycle = RequestLifecycle::new();
    lifecycle.mark_document_processed();
    lifecycle.begin();
    lifecycle.fail("boom");

    let snapshot = lifecycle.snapshot();
    assert_eq!(
        snapshot,
        SessionSnapshot {
            is_busy: false,
            last_error: Some("boom".to_string()),
            has_processed_document: true,
        }
    );
}
