//! Conditional-order bookkeeping against a proposal's quota.
//!
//! Nothing here mutates stored records. The functions derive booked quota
//! from an order list and answer whether a placement or modification fits,
//! leaving the actual write to the order service.

use tracing::{debug, warn};

use crate::error::{Result, TierError};
use crate::types::{Order, ProposalQuota};

/// Total quantity across orders that have not been cancelled.
///
/// The total saturates at `u64::MAX`.
pub fn booked_quota(orders: &[Order]) -> u64 {
    orders
        .iter()
        .filter(|o| o.is_active())
        .fold(0u64, |acc, o| acc.saturating_add(o.quantity))
}

/// Check that `quantity` more units can be booked.
///
/// # Errors
///
/// * [`TierError::InvalidQuantity`] for a zero quantity.
/// * [`TierError::CapacityExceeded`] if the quota's cap would be passed.
pub fn check_placement(quota: &ProposalQuota, quantity: u64) -> Result<()> {
    if quantity == 0 {
        return Err(TierError::InvalidQuantity);
    }
    if let Some(remaining) = quota.remaining() {
        if quantity > remaining {
            warn!(requested = quantity, remaining, "placement exceeds capacity");
            return Err(TierError::CapacityExceeded {
                requested: quantity,
                remaining,
            });
        }
    }
    Ok(())
}

/// Check that order `order_id` can change to `new_quantity`.
///
/// The order's current quantity is released before the capacity check, so
/// shrinking an order always fits.
pub fn check_modification(
    quota: &ProposalQuota,
    orders: &[Order],
    order_id: &str,
    new_quantity: u64,
) -> Result<()> {
    let order = find_active(orders, order_id)?;
    let released = quota.with_booked(quota.booked_quota.saturating_sub(order.quantity));
    debug!(order = %order.id, old = order.quantity, new = new_quantity, "checking modification");
    check_placement(&released, new_quantity)
}

/// Quota after cancelling `order_id`, for previewing the effect.
pub fn preview_cancellation(
    quota: &ProposalQuota,
    orders: &[Order],
    order_id: &str,
) -> Result<ProposalQuota> {
    let order = find_active(orders, order_id)?;
    Ok(quota.with_booked(quota.booked_quota.saturating_sub(order.quantity)))
}

fn find_active<'a>(orders: &'a [Order], order_id: &str) -> Result<&'a Order> {
    let order = orders
        .iter()
        .find(|o| o.id == order_id)
        .ok_or_else(|| TierError::OrderNotFound(order_id.to_string()))?;
    if !order.is_active() {
        return Err(TierError::OrderCancelled(order.id.clone()));
    }
    Ok(order)
}
