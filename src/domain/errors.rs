use thiserror::Error;

// ============ CONTRACT ERROR TYPES ============

/// Errors surfaced by the tournament contract client.
#[derive(Debug, Error)]
pub enum ContractError {
    #[error("No wallet provider available")]
    ProviderUnavailable,

    #[error("Wallet provider declined the account request: {reason}")]
    UserRejected { reason: String },

    #[error("No active session: connect a wallet first")]
    NoSession,

    #[error("Contract interface mismatch on {method}: {reason}")]
    InterfaceMismatch { method: String, reason: String },

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("RPC error: {0}")]
    RpcError(String),

    #[error("Contract call failed: {0}")]
    ContractCallError(String),

    #[error("Transaction failed: {0}")]
    TransactionError(String),
}

impl From<ethers::contract::AbiError> for ContractError {
    fn from(err: ethers::contract::AbiError) -> Self {
        ContractError::ContractCallError(err.to_string())
    }
}
