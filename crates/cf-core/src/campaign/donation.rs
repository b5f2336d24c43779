//! Donation amount parsing and clamping.

use crate::errors::ValidationError;

/// What to send after comparing the requested amount with the remaining goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DonationPlan {
    Send(u128),
    /// The request exceeded what the campaign still needs.
    Adjusted { requested: u128, amount: u128 },
    GoalReached,
}

impl DonationPlan {
    pub fn amount(&self) -> Option<u128> {
        match self {
            Self::Send(amount) | Self::Adjusted { amount, .. } => Some(*amount),
            Self::GoalReached => None,
        }
    }
}

/// Parse a donation amount entered as text. Integers of at least 1 only.
pub fn parse_amount(input: &str) -> Result<u128, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidAmount(input.to_string()));
    }
    let value: u128 = trimmed
        .parse()
        .map_err(|_| ValidationError::InvalidAmount(input.to_string()))?;
    if value < 1 {
        return Err(ValidationError::InvalidAmount(input.to_string()));
    }
    Ok(value)
}

/// Clamp a donation to the remaining amount when goal and balance are known.
pub fn plan_donation(requested: u128, goal: Option<u128>, balance: Option<u128>) -> DonationPlan {
    let (Some(goal), Some(balance)) = (goal, balance) else {
        return DonationPlan::Send(requested);
    };

    let remaining = goal.saturating_sub(balance);
    if remaining == 0 {
        return DonationPlan::GoalReached;
    }
    if requested > remaining {
        return DonationPlan::Adjusted {
            requested,
            amount: remaining,
        };
    }
    DonationPlan::Send(requested)
}
