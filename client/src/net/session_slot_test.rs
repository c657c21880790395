use super::*;

fn session(email: &str) -> PersistedSession {
    PersistedSession {
        uid: format!("uid-{email}"),
        email: email.to_owned(),
        id_token: "id".to_owned(),
        refresh_token: "refresh".to_owned(),
    }
}

// =============================================================
// Restore claim
// =============================================================

#[test]
fn first_subscriber_claims_restore_once() {
    let mut slot = SessionSlot::default();
    assert!(slot.claim_restore());
    assert!(!slot.claim_restore());
    assert!(!slot.is_checked());
}

#[test]
fn settled_slot_needs_no_restore() {
    let mut slot = SessionSlot::default();
    slot.settle(None);
    assert!(!slot.claim_restore());
}

// =============================================================
// Restore racing explicit auth calls
// =============================================================

#[test]
fn restore_applies_when_nothing_settled() {
    let mut slot = SessionSlot::default();
    slot.claim_restore();
    assert!(slot.settle_restored(Some(session("old@example.com"))));
    assert!(slot.is_checked());
    assert_eq!(slot.identity().map(|i| i.email), Some("old@example.com".to_owned()));
}

#[test]
fn failed_restore_does_not_clear_fresh_sign_in() {
    let mut slot = SessionSlot::default();
    slot.claim_restore();
    slot.settle(Some(session("new@example.com")));

    assert!(!slot.settle_restored(None));
    assert_eq!(slot.identity().map(|i| i.email), Some("new@example.com".to_owned()));
}

#[test]
fn successful_restore_does_not_replace_fresh_sign_in() {
    let mut slot = SessionSlot::default();
    slot.claim_restore();
    slot.settle(Some(session("new@example.com")));

    assert!(!slot.settle_restored(Some(session("old@example.com"))));
    assert_eq!(slot.identity().map(|i| i.email), Some("new@example.com".to_owned()));
}

#[test]
fn restore_after_sign_out_keeps_signed_out() {
    let mut slot = SessionSlot::default();
    slot.claim_restore();
    slot.settle(None);

    assert!(!slot.settle_restored(Some(session("old@example.com"))));
    assert_eq!(slot.identity(), None);
}
