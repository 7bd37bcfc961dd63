use std::sync::Arc;

use ethers::types::Address;
use tokio::sync::RwLock;

use crate::domain::errors::ContractError;
use crate::domain::models::{
    CancelTournamentResponse, DepositPrizeResponse, DistributePrizesResponse,
    EmergencyWithdrawResponse, ResetTournamentResponse, WinnerRecord, WithdrawFundsResponse,
};
use crate::infrastructure::contracts::addresses::resolve_escrow_address;
use crate::infrastructure::contracts::client::TournamentClient;
use crate::infrastructure::contracts::config::{get_current_network_config, network_slug};
use crate::infrastructure::contracts::types::NetworkConfig;
use crate::infrastructure::contracts::wallet::WalletProvider;

/// Service layer over the tournament escrow contract.
///
/// Holds at most one active session. Every operation is gated on a session
/// being established; callers get `NoSession` back (and no I/O happens)
/// until `connect` has succeeded. Independent service instances hold
/// independent sessions.
pub struct TournamentService {
    network_config: NetworkConfig,
    escrow_address: Address,
    client: Arc<RwLock<Option<TournamentClient>>>,
}

impl TournamentService {
    pub fn new(network_config: NetworkConfig, escrow_address: Address) -> Self {
        Self {
            network_config,
            escrow_address,
            client: Arc::new(RwLock::new(None)),
        }
    }

    /// Build a service from environment configuration: chain selection via
    /// `DEFAULT_CHAIN_ID`, escrow address via env var or deployment file.
    pub fn from_env() -> Result<Self, ContractError> {
        let network_config = get_current_network_config()?;
        let escrow_address = resolve_escrow_address(network_slug(network_config.chain_id))?;
        Ok(Self::new(network_config, escrow_address))
    }

    /// Establish the session through the wallet provider and return the
    /// active signer address.
    pub async fn connect(&self, wallet_provider: &dyn WalletProvider) -> Result<String, ContractError> {
        let client = TournamentClient::connect(
            wallet_provider,
            self.network_config.clone(),
            self.escrow_address,
        )
        .await?;
        let address = format!("{:?}", client.signer_address());

        *self.client.write().await = Some(client);
        Ok(address)
    }

    pub async fn is_connected(&self) -> bool {
        self.client.read().await.is_some()
    }

    pub fn network_config(&self) -> &NetworkConfig {
        &self.network_config
    }

    pub fn escrow_address(&self) -> Address {
        self.escrow_address
    }

    // ============ CONTRACT OPERATIONS ============
    // Each takes a read lock, clones the session handle, and delegates;
    // concurrent operations never hold the lock across the remote call.

    pub async fn deposit_prize(&self, amount: &str) -> Result<DepositPrizeResponse, ContractError> {
        let client = self.session().await?;
        client.deposit_prize(amount).await
    }

    pub async fn distribute_prizes(
        &self,
        winners: &[String; 3],
        amounts: &[String; 3],
    ) -> Result<DistributePrizesResponse, ContractError> {
        let client = self.session().await?;
        client.distribute_prizes(winners, amounts).await
    }

    pub async fn get_all_winners(&self) -> Result<Vec<WinnerRecord>, ContractError> {
        let client = self.session().await?;
        client.get_all_winners().await
    }

    pub async fn get_contract_balance(&self) -> Result<String, ContractError> {
        let client = self.session().await?;
        client.get_contract_balance().await
    }

    pub async fn withdraw_remaining_funds(&self) -> Result<WithdrawFundsResponse, ContractError> {
        let client = self.session().await?;
        client.withdraw_remaining_funds().await
    }

    pub async fn reset_tournament(&self) -> Result<ResetTournamentResponse, ContractError> {
        let client = self.session().await?;
        client.reset_tournament().await
    }

    pub async fn cancel_tournament_and_refund(&self) -> Result<CancelTournamentResponse, ContractError> {
        let client = self.session().await?;
        client.cancel_tournament_and_refund().await
    }

    pub async fn emergency_withdraw(&self) -> Result<EmergencyWithdrawResponse, ContractError> {
        let client = self.session().await?;
        client.emergency_withdraw().await
    }

    async fn session(&self) -> Result<TournamentClient, ContractError> {
        self.client
            .read()
            .await
            .as_ref()
            .cloned()
            .ok_or(ContractError::NoSession)
    }
}
