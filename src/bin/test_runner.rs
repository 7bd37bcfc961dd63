use tournament_backend::tests::contract_tests::{
    test_admin_operations, test_connection, test_deposit_and_balance, test_distribute_and_winners,
    test_no_session_guard,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Tournament Backend Contract Test Runner");
    println!("=======================================\n");

    // Get command line arguments
    let args: Vec<String> = std::env::args().collect();
    let test_name = args.get(1).map(|s| s.as_str()).unwrap_or("all");

    match test_name {
        "connection" => {
            println!("Running connection test...");
            test_connection().await?;
        }
        "no_session" => {
            println!("Running session gating test...");
            test_no_session_guard().await?;
        }
        "deposit" => {
            println!("Running deposit test...");
            test_deposit_and_balance().await?;
        }
        "distribute" => {
            println!("Running distribution test...");
            test_distribute_and_winners().await?;
        }
        "admin" => {
            println!("Running admin operations test...");
            test_admin_operations().await?;
        }
        "all" => {
            println!("Running all tests...\n");
            test_no_session_guard().await?;
            println!();
            test_connection().await?;
            println!();
            test_deposit_and_balance().await?;
            println!();
            test_distribute_and_winners().await?;
            println!();
            test_admin_operations().await?;
        }
        _ => {
            println!("Unknown test: {}", test_name);
            println!("Available tests: connection, no_session, deposit, distribute, admin, all");
        }
    }

    println!("\nTest runner finished!");
    Ok(())
}
