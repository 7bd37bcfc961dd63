use std::collections::HashMap;
use std::env;
use std::fs;

use ethers::types::Address;

use crate::domain::errors::ContractError;

/// Environment override for the deployed escrow address. Takes priority
/// over any deployment file.
pub const ESCROW_ADDRESS_ENV: &str = "TOURNAMENT_ESCROW_ADDRESS";

/// Key under which deployment files record the escrow address.
const ESCROW_ADDRESS_KEY: &str = "TournamentEscrow";

/// Resolve the deployed escrow address for a network: environment variable
/// first, then the per-network deployment file produced by the deploy
/// scripts. There is deliberately no hardcoded fallback.
pub fn resolve_escrow_address(network_slug: &str) -> Result<Address, ContractError> {
    if let Ok(raw) = env::var(ESCROW_ADDRESS_ENV) {
        return parse_escrow_address(&raw);
    }

    let path = format!("abis/deployed_addresses_{}.json", network_slug);
    let addresses = load_addresses_from_file(&path)?;
    escrow_address_from_map(&addresses)
}

pub fn parse_escrow_address(raw: &str) -> Result<Address, ContractError> {
    raw.trim()
        .parse::<Address>()
        .map_err(|e| ContractError::InvalidAddress(format!("{}: {}", raw, e)))
}

// Load addresses from JSON file
fn load_addresses_from_file(file_path: &str) -> Result<HashMap<String, String>, ContractError> {
    let content = fs::read_to_string(file_path).map_err(|e| {
        ContractError::InvalidAddress(format!(
            "No escrow address configured: set {} or provide {} ({})",
            ESCROW_ADDRESS_ENV, file_path, e
        ))
    })?;

    let addresses: HashMap<String, String> = serde_json::from_str(&content)
        .map_err(|e| ContractError::InvalidAddress(format!("Failed to parse addresses JSON from {}: {}", file_path, e)))?;

    Ok(addresses)
}

fn escrow_address_from_map(addresses: &HashMap<String, String>) -> Result<Address, ContractError> {
    addresses
        .get(ESCROW_ADDRESS_KEY)
        .ok_or_else(|| {
            ContractError::InvalidAddress(format!("Address not found for contract: {}", ESCROW_ADDRESS_KEY))
        })
        .and_then(|raw| parse_escrow_address(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_checksummed_address() {
        let address = parse_escrow_address("0x21573f626191124241900E0ce743c3CE4b889f62").unwrap();
        assert_eq!(
            format!("{:?}", address),
            "0x21573f626191124241900e0ce743c3ce4b889f62"
        );
    }

    #[test]
    fn rejects_malformed_address() {
        assert!(matches!(
            parse_escrow_address("YOUR_CONTRACT_ADDRESS_HERE"),
            Err(ContractError::InvalidAddress(_))
        ));
        assert!(matches!(
            parse_escrow_address("0x1234"),
            Err(ContractError::InvalidAddress(_))
        ));
    }

    #[test]
    fn reads_escrow_entry_from_deployment_map() {
        let mut map = HashMap::new();
        map.insert(
            ESCROW_ADDRESS_KEY.to_string(),
            "0x21573f626191124241900E0ce743c3CE4b889f62".to_string(),
        );
        assert!(escrow_address_from_map(&map).is_ok());

        let empty = HashMap::new();
        assert!(matches!(
            escrow_address_from_map(&empty),
            Err(ContractError::InvalidAddress(_))
        ));
    }
}
