//! Order service: edit authorization and ownership binding.
//!
//! Two responsibilities, deliberately separated from the HTTP layer:
//!
//! - the **access gate** ([`can_edit_order`]) decides whether an actor may
//!   edit a given order. It is a pure function over explicit inputs; the
//!   actor identity and authentication flag are parameters, never read from
//!   ambient request state.
//! - the **ownership binder** attaches the submitting actor's customer
//!   profile to every order saved through [`OrderService::create_order`] or
//!   [`OrderService::update_order`], resolving the profile with atomic
//!   get-or-create semantics.

use sqlx::PgPool;
use thiserror::Error;

use gigmarket_core::{OrderId, UserId};

use crate::db::orders::OrderWithOwner;
use crate::db::{CustomerRepository, OrderRepository, RepositoryError};
use crate::models::{Order, OrderDraft};

/// Why an edit was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// The order has no customer attached.
    Unclaimed,
    /// The order belongs to a different user.
    NotOwner,
    /// The actor is not authenticated.
    Unauthenticated,
}

impl std::fmt::Display for DenyReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unclaimed => write!(f, "the order has no customer attached"),
            Self::NotOwner => write!(f, "the order belongs to a different user"),
            Self::Unauthenticated => write!(f, "the actor is not authenticated"),
        }
    }
}

/// Outcome of the edit-permission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditDecision {
    Allow,
    Deny(DenyReason),
}

/// Errors from order authorization and persistence.
#[derive(Debug, Error)]
pub enum AccessError {
    /// The order does not exist. Surfaces as 404: order pages are public,
    /// so existence is not a secret worth hiding behind a 403.
    #[error("order {0} does not exist")]
    OrderNotFound(OrderId),

    /// The edit rule failed.
    #[error("editing order {order} denied: {reason}")]
    Denied { order: OrderId, reason: DenyReason },

    /// Underlying repository failure.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Decide whether an actor may edit an order.
///
/// All three conditions must hold for `Allow`; any one failing denies:
///
/// 1. the order has an owner (its `customer` is non-null),
/// 2. that owner is the actor,
/// 3. the actor is authenticated.
#[must_use]
pub fn can_edit_order(
    actor_is_authenticated: bool,
    actor: UserId,
    owner: Option<UserId>,
) -> EditDecision {
    let Some(owner) = owner else {
        return EditDecision::Deny(DenyReason::Unclaimed);
    };
    if owner != actor {
        return EditDecision::Deny(DenyReason::NotOwner);
    }
    if !actor_is_authenticated {
        return EditDecision::Deny(DenyReason::Unauthenticated);
    }
    EditDecision::Allow
}

/// Order create/edit flows.
pub struct OrderService<'a> {
    orders: OrderRepository<'a>,
    customers: CustomerRepository<'a>,
}

impl<'a> OrderService<'a> {
    /// Create a new order service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            orders: OrderRepository::new(pool),
            customers: CustomerRepository::new(pool),
        }
    }

    /// Check that `actor` may edit `order_id`, returning the order on success.
    ///
    /// One lookup fetches the order and its owning user together.
    ///
    /// # Errors
    ///
    /// Returns `AccessError::OrderNotFound` if the order does not exist,
    /// `AccessError::Denied` if the edit rule fails, and
    /// `AccessError::Repository` on database failure.
    pub async fn authorize_edit(
        &self,
        actor_is_authenticated: bool,
        actor: UserId,
        order_id: OrderId,
    ) -> Result<Order, AccessError> {
        let OrderWithOwner {
            order,
            owner_user_id,
        } = self
            .orders
            .get_with_owner(order_id)
            .await?
            .ok_or(AccessError::OrderNotFound(order_id))?;

        match can_edit_order(actor_is_authenticated, actor, owner_user_id) {
            EditDecision::Allow => Ok(order),
            EditDecision::Deny(reason) => Err(AccessError::Denied {
                order: order_id,
                reason,
            }),
        }
    }

    /// Create an order for `actor`, binding their customer profile.
    ///
    /// Every order saved through this path has a non-null customer pointing
    /// to the submitting actor, by construction.
    ///
    /// # Errors
    ///
    /// Returns `AccessError::Repository` on database failure.
    pub async fn create_order(
        &self,
        actor: UserId,
        draft: &OrderDraft,
    ) -> Result<Order, AccessError> {
        let customer = self.customers.get_or_create(actor).await?;
        let order = self.orders.create(draft, customer.id).await?;

        tracing::info!(order_id = %order.id, customer_id = %customer.id, "order created");
        Ok(order)
    }

    /// Update an order for `actor`: gate first, then re-bind and save.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::authorize_edit`], plus repository failures
    /// from the save itself.
    pub async fn update_order(
        &self,
        actor_is_authenticated: bool,
        actor: UserId,
        order_id: OrderId,
        draft: &OrderDraft,
    ) -> Result<Order, AccessError> {
        self.authorize_edit(actor_is_authenticated, actor, order_id)
            .await?;

        let customer = self.customers.get_or_create(actor).await?;
        let order = self.orders.update(order_id, draft, customer.id).await?;

        tracing::info!(order_id = %order.id, "order updated");
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: UserId = UserId::new(1);
    const BOB: UserId = UserId::new(2);

    #[test]
    fn test_unclaimed_order_denies_everyone() {
        // Scenario A: order has no customer; authenticated actor is denied.
        assert_eq!(
            can_edit_order(true, ALICE, None),
            EditDecision::Deny(DenyReason::Unclaimed)
        );
        assert_eq!(
            can_edit_order(true, BOB, None),
            EditDecision::Deny(DenyReason::Unclaimed)
        );
    }

    #[test]
    fn test_owner_may_edit_while_authenticated() {
        // Scenario B: alice owns the order and is signed in.
        assert_eq!(can_edit_order(true, ALICE, Some(ALICE)), EditDecision::Allow);
    }

    #[test]
    fn test_non_owner_is_denied() {
        // Scenario C: bob tries to edit alice's order.
        assert_eq!(
            can_edit_order(true, BOB, Some(ALICE)),
            EditDecision::Deny(DenyReason::NotOwner)
        );
    }

    #[test]
    fn test_owner_is_denied_when_unauthenticated() {
        assert_eq!(
            can_edit_order(false, ALICE, Some(ALICE)),
            EditDecision::Deny(DenyReason::Unauthenticated)
        );
    }

    #[test]
    fn test_deny_reasons_render() {
        assert_eq!(
            DenyReason::NotOwner.to_string(),
            "the order belongs to a different user"
        );
    }
}
