use ethers::types::U256;
use ethers::utils::{format_units, parse_units};

use crate::domain::errors::ContractError;

/// Convert a human-readable decimal amount to base units.
pub fn to_base_units(amount: &str, decimals: u8) -> Result<U256, ContractError> {
    let amount = amount.trim();
    if amount.starts_with('-') {
        return Err(ContractError::InvalidAmount(format!("{}: amounts cannot be negative", amount)));
    }

    let parsed = parse_units(amount, u32::from(decimals))
        .map_err(|e| ContractError::InvalidAmount(format!("{}: {}", amount, e)))?;
    Ok(parsed.into())
}

/// Convert a base-unit value to a human-readable decimal string.
/// Trailing zeros are trimmed so that formatting a parsed amount returns
/// the original string.
pub fn from_base_units(value: U256, decimals: u8) -> Result<String, ContractError> {
    let formatted = format_units(value, u32::from(decimals))
        .map_err(|e| ContractError::InvalidAmount(e.to_string()))?;
    Ok(trim_trailing_zeros(&formatted))
}

fn trim_trailing_zeros(formatted: &str) -> String {
    match formatted.split_once('.') {
        Some((integer, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            if fraction.is_empty() {
                integer.to_string()
            } else {
                format!("{}.{}", integer, fraction)
            }
        }
        None => formatted.to_string(),
    }
}
