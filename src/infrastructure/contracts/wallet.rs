use std::env;

use ethers::signers::LocalWallet;

use crate::domain::errors::ContractError;

/// Default Anvil private key for local development (account #0).
const ANVIL_DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// The account-request boundary. A provider either produces a signing
/// account, has nothing to offer (`ProviderUnavailable`), or declines
/// (`UserRejected`). All key custody stays behind this trait.
pub trait WalletProvider: Send + Sync {
    fn request_account(&self) -> Result<LocalWallet, ContractError>;
}

/// Wallet provider backed by the `PRIVATE_KEY` environment variable, with
/// the usual Anvil account #0 fallback for local development. Non-local
/// chains get no fallback: a missing key means no provider.
pub struct EnvKeyProvider {
    chain_id: u64,
    key: Option<String>,
}

impl EnvKeyProvider {
    pub fn from_env(chain_id: u64) -> Self {
        Self {
            chain_id,
            key: env::var("PRIVATE_KEY").ok(),
        }
    }

    pub fn with_key(chain_id: u64, key: Option<String>) -> Self {
        Self { chain_id, key }
    }
}

impl WalletProvider for EnvKeyProvider {
    fn request_account(&self) -> Result<LocalWallet, ContractError> {
        match &self.key {
            Some(key) => parse_key(key),
            None if self.chain_id == 31337 => parse_key(ANVIL_DEV_KEY),
            None => Err(ContractError::ProviderUnavailable),
        }
    }
}

fn parse_key(key: &str) -> Result<LocalWallet, ContractError> {
    key.trim_start_matches("0x")
        .parse::<LocalWallet>()
        .map_err(|e| ContractError::UserRejected {
            reason: format!("malformed signing key: {}", e),
        })
}

/// Scriptable wallet provider for tests: absent, declining, or handing out
/// the Anvil dev key.
#[cfg(test)]
pub struct StubWalletProvider {
    key: Option<&'static str>,
    decline: bool,
}

#[cfg(test)]
impl StubWalletProvider {
    pub fn with_dev_key() -> Self {
        Self {
            key: Some(ANVIL_DEV_KEY),
            decline: false,
        }
    }

    pub fn absent() -> Self {
        Self {
            key: None,
            decline: false,
        }
    }

    pub fn declining() -> Self {
        Self {
            key: None,
            decline: true,
        }
    }
}

#[cfg(test)]
impl WalletProvider for StubWalletProvider {
    fn request_account(&self) -> Result<LocalWallet, ContractError> {
        if self.decline {
            return Err(ContractError::UserRejected {
                reason: "account request denied".to_string(),
            });
        }
        match self.key {
            Some(key) => parse_key(key),
            None => Err(ContractError::ProviderUnavailable),
        }
    }
}
