use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber;

use tournament_backend::infrastructure::contracts::wallet::EnvKeyProvider;
use tournament_backend::TournamentService;

/// UI-boundary adapter: connect a wallet session and drive the tournament
/// contract, logging outcomes instead of propagating failures.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let service = TournamentService::from_env().map_err(|e| {
        error!("Failed to load tournament configuration: {}", e);
        e
    })?;
    let network = service.network_config().clone();
    info!(
        "Tournament escrow {:?} on {} (chain {})",
        service.escrow_address(),
        network.name,
        network.chain_id
    );

    let wallet_provider = EnvKeyProvider::from_env(network.chain_id);
    match service.connect(&wallet_provider).await {
        Ok(address) => info!("Connected as {}", address),
        Err(e) => {
            error!("Wallet connection failed: {}", e);
            return Ok(());
        }
    }

    // Every call below reports its failure and moves on.
    match service.get_contract_balance().await {
        Ok(balance) => info!("Contract balance: {} {}", balance, network.native_currency.symbol),
        Err(e) => error!("Error fetching balance: {}", e),
    }

    match service.get_all_winners().await {
        Ok(winners) => {
            for (i, winner) in winners.iter().enumerate() {
                info!(
                    "Winner {}: {} ({} {})",
                    i + 1,
                    winner.address,
                    winner.amount,
                    network.native_currency.symbol
                );
            }
        }
        Err(e) => error!("Error fetching winners: {}", e),
    }

    // Optional deposit, driven by the environment so the binary stays
    // side-effect free by default.
    if let Ok(amount) = std::env::var("DEPOSIT_AMOUNT") {
        match service.deposit_prize(&amount).await {
            Ok(response) => info!(
                "Prize deposited successfully: tx {} (block {})",
                response.transaction_hash, response.block_number
            ),
            Err(e) => error!("Error depositing prize: {}", e),
        }
    }

    Ok(())
}
