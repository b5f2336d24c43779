//! Derived figures shown next to a campaign.

use super::status::{DerivedStatus, StatusView};
use crate::ids::WalletAddress;

/// Case-insensitive marker identifying a flagged campaign.
pub const FLAG_MARKER: &str = "emergency";

const SECONDS_PER_DAY: i128 = 24 * 60 * 60;

/// Whether a campaign name carries the priority marker.
pub fn is_flagged(name: &str) -> bool {
    name.to_lowercase().contains(FLAG_MARKER)
}

/// Funded share of the goal in percent, capped at 100.
pub fn funding_percentage(balance: u128, goal: u128) -> u8 {
    if goal == 0 {
        return 0;
    }
    let pct = balance.saturating_mul(100) / goal;
    pct.min(100) as u8
}

/// Whole days until the deadline, rounded up. Negative once expired.
pub fn days_left(deadline: u64, now: u64) -> i64 {
    let diff = i128::from(deadline) - i128::from(now);
    let days = if diff >= 0 {
        (diff + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY
    } else {
        diff / SECONDS_PER_DAY
    };
    i64::try_from(days).unwrap_or(if days < 0 { i64::MIN } else { i64::MAX })
}

/// The owner may withdraw a successful campaign that still holds funds.
pub fn can_withdraw(
    viewer: Option<&WalletAddress>,
    owner: &WalletAddress,
    status: StatusView,
    balance: u128,
) -> bool {
    let Some(viewer) = viewer else {
        return false;
    };
    viewer.matches(owner) && status == StatusView::Resolved(DerivedStatus::Successful) && balance > 0
}

/// A successful campaign with an empty balance has been paid out.
pub fn funds_withdrawn(status: StatusView, balance: u128) -> bool {
    status == StatusView::Resolved(DerivedStatus::Successful) && balance == 0
}
