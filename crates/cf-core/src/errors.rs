//! Error taxonomy shared by the use cases.

use thiserror::Error;

use crate::ids::{RequestId, WalletAddress};
use crate::request::RequestStatus;

/// Malformed or out-of-range user input. Raised before any external call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("rejection reason must not be empty")]
    EmptyReason,

    #[error("invalid amount {0:?}: integers only")]
    InvalidAmount(String),

    #[error("goal must be at least {min}")]
    GoalTooLow { min: u128 },

    #[error("age must be between {min} and {max}")]
    AgeOutOfRange { min: u32, max: u32 },

    #[error("duration must be at least {min} day(s)")]
    DurationTooShort { min: u32 },

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("wallet not connected")]
    WalletRequired,

    #[error("insufficient funds: need {required}, have {available}")]
    InsufficientFunds { required: u128, available: u128 },

    #[error("campaign goal already reached")]
    GoalReached,

    #[error("withdrawal not allowed for this campaign")]
    WithdrawNotAllowed,

    #[error("address {0} is not an administrator")]
    NotAdmin(WalletAddress),
}

/// Failure of an external read or write.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// The user dismissed the wallet prompt. Not an alarming state.
    #[error("request cancelled by the user")]
    Cancelled,

    #[error("external call failed: {0}")]
    Failed(String),
}

impl NetworkError {
    /// Classify an adapter error. Wallets report a dismissed prompt with a
    /// message mentioning "rejected".
    pub fn from_call_error(err: &anyhow::Error) -> Self {
        let message = format!("{:#}", err);
        if message.to_ascii_lowercase().contains("rejected") {
            Self::Cancelled
        } else {
            Self::Failed(message)
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Post-deployment linkage could not identify a single campaign.
///
/// Recoverable: the request is stored with an empty linkage for manual
/// reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InconsistencyError {
    #[error("no deployed campaign matches owner {owner} and name {name:?}")]
    NoMatch { owner: WalletAddress, name: String },

    #[error("{count} deployed campaigns match owner {owner} and name {name:?}")]
    Ambiguous {
        owner: WalletAddress,
        name: String,
        count: usize,
    },
}

/// Transition attempted from a state that does not allow it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error("request {id} is {status}, only pending requests can be reviewed")]
    NotPending { id: RequestId, status: RequestStatus },
}

/// Error returned by the use cases.
#[derive(Debug, Error)]
pub enum CrowdfundError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),

    #[error("request not found: {0}")]
    RequestNotFound(RequestId),

    #[error("storage error: {0}")]
    Storage(String),
}

impl CrowdfundError {
    /// Wrap an adapter failure from an external call.
    pub fn network(err: anyhow::Error) -> Self {
        Self::Network(NetworkError::from_call_error(&err))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Network(NetworkError::Cancelled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_prompt_is_classified_as_cancelled() {
        let err = anyhow::anyhow!("User rejected the request.");
        assert_eq!(NetworkError::from_call_error(&err), NetworkError::Cancelled);
    }

    #[test]
    fn context_chain_is_inspected() {
        let err = anyhow::anyhow!("user Rejected transaction").context("send donate()");
        assert!(NetworkError::from_call_error(&err).is_cancelled());
    }

    #[test]
    fn other_failures_keep_their_message() {
        let err = anyhow::anyhow!("execution reverted");
        assert_eq!(
            NetworkError::from_call_error(&err),
            NetworkError::Failed("execution reverted".to_string())
        );
    }
}
