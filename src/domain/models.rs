use serde::{Deserialize, Serialize};

// ============ CONTRACT STATE TYPES ============

/// One entry of the fixed-size winner set reported by the contract.
/// Amounts are human-readable decimal strings, already converted from
/// base units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WinnerRecord {
    pub address: String,
    pub amount: String,
}

// ============ OPERATION RESPONSE TYPES ============

#[derive(Debug, Serialize, Deserialize)]
pub struct DepositPrizeResponse {
    pub amount: String,
    pub amount_base_units: String,
    pub transaction_hash: String,
    pub block_number: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DistributePrizesResponse {
    pub winners: Vec<String>,
    pub transaction_hash: String,
    pub block_number: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WithdrawFundsResponse {
    pub transaction_hash: String,
    pub block_number: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResetTournamentResponse {
    pub transaction_hash: String,
    pub block_number: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CancelTournamentResponse {
    pub transaction_hash: String,
    pub block_number: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EmergencyWithdrawResponse {
    pub transaction_hash: String,
    pub block_number: u64,
}
