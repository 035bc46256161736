//! Tests for the order edit permission rule.
//!
//! The rule is a pure function, so these run without a database. They cover
//! the full decision table: unclaimed orders, ownership, and authentication.

use gigmarket_core::UserId;
use gigmarket_web::services::orders::{DenyReason, EditDecision, can_edit_order};

const ALICE: UserId = UserId::new(101);
const BOB: UserId = UserId::new(202);

// =============================================================================
// Decision Table
// =============================================================================

#[test]
fn test_unclaimed_order_is_not_editable() {
    // An order with no customer attached denies everyone, even signed-in users.
    assert_eq!(
        can_edit_order(true, ALICE, None),
        EditDecision::Deny(DenyReason::Unclaimed)
    );
}

#[test]
fn test_signed_in_owner_may_edit() {
    assert_eq!(can_edit_order(true, ALICE, Some(ALICE)), EditDecision::Allow);
}

#[test]
fn test_non_owner_is_denied() {
    assert_eq!(
        can_edit_order(true, BOB, Some(ALICE)),
        EditDecision::Deny(DenyReason::NotOwner)
    );
}

#[test]
fn test_signed_out_owner_is_denied() {
    assert_eq!(
        can_edit_order(false, ALICE, Some(ALICE)),
        EditDecision::Deny(DenyReason::Unauthenticated)
    );
}

#[test]
fn test_signed_out_non_owner_denied_for_ownership_first() {
    // Ownership is checked before authentication, so a signed-out stranger
    // is reported as a non-owner rather than as unauthenticated.
    assert_eq!(
        can_edit_order(false, BOB, Some(ALICE)),
        EditDecision::Deny(DenyReason::NotOwner)
    );
}

#[test]
fn test_decision_does_not_depend_on_actor_for_unclaimed_orders() {
    for actor in [ALICE, BOB] {
        for authenticated in [true, false] {
            assert_eq!(
                can_edit_order(authenticated, actor, None),
                EditDecision::Deny(DenyReason::Unclaimed)
            );
        }
    }
}
