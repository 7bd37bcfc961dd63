use crate::domain::errors::ContractError;
use crate::infrastructure::contracts::types::{NativeCurrency, NetworkConfig};

// Get network configuration for local development (Anvil)
pub fn get_anvil_network_config() -> NetworkConfig {
    NetworkConfig {
        chain_id: 31337,
        name: "Anvil Local".to_string(),
        rpc_url: std::env::var("RPC_URL").unwrap_or_else(|_| "http://localhost:8545".to_string()),
        explorer_url: "".to_string(),
        native_currency: NativeCurrency {
            name: "Ether".to_string(),
            symbol: "ETH".to_string(),
            decimals: 18,
        },
    }
}

// Get network configuration for Base Sepolia testnet
pub fn get_base_sepolia_network_config() -> NetworkConfig {
    NetworkConfig {
        chain_id: 84532,
        name: "Base Sepolia".to_string(),
        rpc_url: std::env::var("BASE_SEPOLIA_RPC_URL")
            .unwrap_or_else(|_| "https://sepolia.base.org".to_string()),
        explorer_url: "https://sepolia.basescan.org".to_string(),
        native_currency: NativeCurrency {
            name: "Ether".to_string(),
            symbol: "ETH".to_string(),
            decimals: 18,
        },
    }
}

// Get network configuration by chain ID
pub fn get_network_config_by_chain_id(chain_id: u64) -> Result<NetworkConfig, ContractError> {
    match chain_id {
        31337 => Ok(get_anvil_network_config()),
        84532 => Ok(get_base_sepolia_network_config()),
        _ => Err(ContractError::RpcError(format!("Unsupported chain ID: {}", chain_id))),
    }
}

/// Deployment-file slug for a supported network.
pub fn network_slug(chain_id: u64) -> &'static str {
    match chain_id {
        84532 => "base_sepolia",
        _ => "anvil",
    }
}

/// Get the current network configuration from environment variables,
/// defaulting to the local Anvil chain.
pub fn get_current_network_config() -> Result<NetworkConfig, ContractError> {
    let chain_id = std::env::var("DEFAULT_CHAIN_ID")
        .unwrap_or_else(|_| "31337".to_string())
        .parse::<u64>()
        .unwrap_or(31337);

    get_network_config_by_chain_id(chain_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_chain_ids_resolve() {
        let anvil = get_network_config_by_chain_id(31337).unwrap();
        assert_eq!(anvil.chain_id, 31337);
        assert_eq!(anvil.native_currency.decimals, 18);

        let base = get_network_config_by_chain_id(84532).unwrap();
        assert_eq!(base.name, "Base Sepolia");
    }

    #[test]
    fn unknown_chain_id_is_an_error() {
        assert!(get_network_config_by_chain_id(1).is_err());
    }

    #[test]
    fn slugs_match_deployment_files() {
        assert_eq!(network_slug(31337), "anvil");
        assert_eq!(network_slug(84532), "base_sepolia");
    }
}
