use std::sync::Arc;

use ethers::{
    contract::Contract,
    middleware::SignerMiddleware,
    providers::{Http, PendingTransaction, Provider},
    signers::{LocalWallet, Signer},
    types::{Address, TransactionReceipt, U256},
};
use tracing::info;

use crate::domain::errors::ContractError;
use crate::domain::models::{
    CancelTournamentResponse, DepositPrizeResponse, DistributePrizesResponse,
    EmergencyWithdrawResponse, ResetTournamentResponse, WinnerRecord, WithdrawFundsResponse,
};
use crate::infrastructure::contracts::abis;
use crate::infrastructure::contracts::types::NetworkConfig;
use crate::infrastructure::contracts::utils::amounts;
use crate::infrastructure::contracts::wallet::WalletProvider;

type EscrowMiddleware = SignerMiddleware<Provider<Http>, LocalWallet>;

/// An established session against the tournament escrow contract: RPC
/// provider, signing identity, and the bound contract proxy. Created by
/// [`TournamentClient::connect`]; every operation is a stateless
/// request/confirm cycle against the remote contract.
#[derive(Clone)]
pub struct TournamentClient {
    signer_address: Address,
    network_config: NetworkConfig,
    contract: Contract<EscrowMiddleware>,
}

impl TournamentClient {
    /// Establish a session: request a signing account from the wallet
    /// provider, load and validate the escrow ABI, and bind the contract
    /// proxy at the deployed address. Interface drift fails here, not on
    /// the first call.
    pub async fn connect(
        wallet_provider: &dyn WalletProvider,
        network_config: NetworkConfig,
        escrow_address: Address,
    ) -> Result<Self, ContractError> {
        let provider = Provider::<Http>::try_from(network_config.rpc_url.as_str())
            .map_err(|e| ContractError::RpcError(e.to_string()))?;

        let wallet = wallet_provider
            .request_account()?
            .with_chain_id(network_config.chain_id);
        let signer_address = wallet.address();

        let abi = abis::load_tournament_escrow_abi()?;
        abis::validate_interface(&abi)?;

        let middleware = Arc::new(SignerMiddleware::new(provider, wallet));
        let contract = Contract::new(escrow_address, abi, middleware);

        info!("Wallet connected: {:?}", signer_address);
        Ok(Self {
            signer_address,
            network_config,
            contract,
        })
    }

    // ============ STATE-CHANGING OPERATIONS ============

    /// Deposit into the prize pool. The human-readable amount is converted
    /// to base units and attached as the transaction value.
    pub async fn deposit_prize(&self, amount: &str) -> Result<DepositPrizeResponse, ContractError> {
        let decimals = self.network_config.native_currency.decimals;
        let amount_wei = amounts::to_base_units(amount, decimals)?;

        let call = self
            .contract
            .method::<_, ()>("depositPrize", ())
            .map_err(|e| ContractError::ContractCallError(e.to_string()))?
            .value(amount_wei);

        let pending_tx = call
            .send()
            .await
            .map_err(|e| ContractError::TransactionError(e.to_string()))?;
        let receipt = wait_for_receipt(pending_tx, "depositPrize").await?;

        info!(
            "Prize of {} {} deposited in tx {:?}",
            amount, self.network_config.native_currency.symbol, receipt.transaction_hash
        );
        Ok(DepositPrizeResponse {
            amount: amount.to_string(),
            amount_base_units: amount_wei.to_string(),
            transaction_hash: format!("{:?}", receipt.transaction_hash),
            block_number: receipt.block_number.unwrap_or_default().as_u64(),
        })
    }

    /// Distribute prizes to exactly three winners. The fixed-length
    /// parameters mirror the contract's `address[3]`/`uint256[3]` arity.
    pub async fn distribute_prizes(
        &self,
        winners: &[String; 3],
        amounts_to_pay: &[String; 3],
    ) -> Result<DistributePrizesResponse, ContractError> {
        let decimals = self.network_config.native_currency.decimals;

        let mut winner_addresses = [Address::zero(); 3];
        for (slot, winner) in winner_addresses.iter_mut().zip(winners.iter()) {
            *slot = winner
                .parse::<Address>()
                .map_err(|e| ContractError::InvalidAddress(format!("{}: {}", winner, e)))?;
        }

        let mut amounts_wei = [U256::zero(); 3];
        for (slot, amount) in amounts_wei.iter_mut().zip(amounts_to_pay.iter()) {
            *slot = amounts::to_base_units(amount, decimals)?;
        }

        let call = self
            .contract
            .method::<_, ()>("distributePrizes", (winner_addresses, amounts_wei))
            .map_err(|e| ContractError::ContractCallError(e.to_string()))?;

        let pending_tx = call
            .send()
            .await
            .map_err(|e| ContractError::TransactionError(e.to_string()))?;
        let receipt = wait_for_receipt(pending_tx, "distributePrizes").await?;

        info!("Prizes distributed in tx {:?}", receipt.transaction_hash);
        Ok(DistributePrizesResponse {
            winners: winners.to_vec(),
            transaction_hash: format!("{:?}", receipt.transaction_hash),
            block_number: receipt.block_number.unwrap_or_default().as_u64(),
        })
    }

    pub async fn withdraw_remaining_funds(&self) -> Result<WithdrawFundsResponse, ContractError> {
        let receipt = self.invoke_admin("withdrawRemainingFunds").await?;
        info!("Remaining funds withdrawn in tx {:?}", receipt.transaction_hash);
        Ok(WithdrawFundsResponse {
            transaction_hash: format!("{:?}", receipt.transaction_hash),
            block_number: receipt.block_number.unwrap_or_default().as_u64(),
        })
    }

    pub async fn reset_tournament(&self) -> Result<ResetTournamentResponse, ContractError> {
        let receipt = self.invoke_admin("resetTournament").await?;
        info!("Tournament reset in tx {:?}", receipt.transaction_hash);
        Ok(ResetTournamentResponse {
            transaction_hash: format!("{:?}", receipt.transaction_hash),
            block_number: receipt.block_number.unwrap_or_default().as_u64(),
        })
    }

    pub async fn cancel_tournament_and_refund(&self) -> Result<CancelTournamentResponse, ContractError> {
        let receipt = self.invoke_admin("cancelTournamentAndRefund").await?;
        info!("Tournament canceled and funds refunded in tx {:?}", receipt.transaction_hash);
        Ok(CancelTournamentResponse {
            transaction_hash: format!("{:?}", receipt.transaction_hash),
            block_number: receipt.block_number.unwrap_or_default().as_u64(),
        })
    }

    pub async fn emergency_withdraw(&self) -> Result<EmergencyWithdrawResponse, ContractError> {
        let receipt = self.invoke_admin("emergencyWithdraw").await?;
        info!("Emergency withdrawal completed in tx {:?}", receipt.transaction_hash);
        Ok(EmergencyWithdrawResponse {
            transaction_hash: format!("{:?}", receipt.transaction_hash),
            block_number: receipt.block_number.unwrap_or_default().as_u64(),
        })
    }

    // Shared path for the argument-less admin methods: build, send, wait
    // for inclusion. Authorization and state validity are the contract's
    // concern; reverts come back as TransactionError with the reason.
    async fn invoke_admin(&self, method: &str) -> Result<TransactionReceipt, ContractError> {
        let call = self
            .contract
            .method::<_, ()>(method, ())
            .map_err(|e| ContractError::ContractCallError(e.to_string()))?;

        let pending_tx = call
            .send()
            .await
            .map_err(|e| ContractError::TransactionError(e.to_string()))?;
        wait_for_receipt(pending_tx, method).await
    }

    // ============ READ-ONLY OPERATIONS ============

    /// Fetch the three winner records. Single round trip, no state change,
    /// no confirmation wait; amounts come back human-readable.
    pub async fn get_all_winners(&self) -> Result<Vec<WinnerRecord>, ContractError> {
        let call = self
            .contract
            .method::<_, ([Address; 3], [U256; 3])>("getAllWinners", ())
            .map_err(|e| ContractError::ContractCallError(e.to_string()))?;

        let (addresses, prize_amounts) = call
            .call()
            .await
            .map_err(|e| ContractError::ContractCallError(e.to_string()))?;

        let decimals = self.network_config.native_currency.decimals;
        addresses
            .iter()
            .zip(prize_amounts.iter())
            .map(|(address, amount)| {
                Ok(WinnerRecord {
                    address: format!("{:?}", address),
                    amount: amounts::from_base_units(*amount, decimals)?,
                })
            })
            .collect()
    }

    /// Fetch the escrow's balance as a human-readable amount.
    pub async fn get_contract_balance(&self) -> Result<String, ContractError> {
        let call = self
            .contract
            .method::<_, U256>("getContractBalance", ())
            .map_err(|e| ContractError::ContractCallError(e.to_string()))?;

        let balance = call
            .call()
            .await
            .map_err(|e| ContractError::ContractCallError(e.to_string()))?;

        amounts::from_base_units(balance, self.network_config.native_currency.decimals)
    }

    // ============ SESSION ACCESSORS ============

    pub fn signer_address(&self) -> Address {
        self.signer_address
    }

    pub fn contract_address(&self) -> Address {
        self.contract.address()
    }

    pub fn network_config(&self) -> &NetworkConfig {
        &self.network_config
    }
}

async fn wait_for_receipt(
    pending_tx: PendingTransaction<'_, Http>,
    operation: &str,
) -> Result<TransactionReceipt, ContractError> {
    let receipt = pending_tx
        .await
        .map_err(|e| ContractError::TransactionError(e.to_string()))?
        .ok_or_else(|| {
            ContractError::TransactionError(format!("{}: transaction dropped without a receipt", operation))
        })?;

    if let Some(status) = receipt.status {
        if status == 0.into() {
            return Err(ContractError::TransactionError(format!("{}: transaction reverted", operation)));
        }
    }

    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::contracts::config::get_anvil_network_config;
    use crate::infrastructure::contracts::wallet::StubWalletProvider;

    fn escrow_address() -> Address {
        "0x21573f626191124241900E0ce743c3CE4b889f62".parse().unwrap()
    }

    #[tokio::test]
    async fn connect_binds_session_with_signer_address() {
        let client = TournamentClient::connect(
            &StubWalletProvider::with_dev_key(),
            get_anvil_network_config(),
            escrow_address(),
        )
        .await
        .expect("connect with a willing provider should succeed");

        assert_eq!(
            format!("{:?}", client.signer_address()),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
        assert_eq!(client.contract_address(), escrow_address());
    }

    #[tokio::test]
    async fn connect_without_provider_fails() {
        let result = TournamentClient::connect(
            &StubWalletProvider::absent(),
            get_anvil_network_config(),
            escrow_address(),
        )
        .await;

        assert!(matches!(result, Err(ContractError::ProviderUnavailable)));
    }

    #[tokio::test]
    async fn connect_with_declining_provider_fails() {
        let result = TournamentClient::connect(
            &StubWalletProvider::declining(),
            get_anvil_network_config(),
            escrow_address(),
        )
        .await;

        assert!(matches!(result, Err(ContractError::UserRejected { .. })));
    }
}
