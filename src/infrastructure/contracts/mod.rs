// Contract integration module
// This module handles all tournament escrow contract interactions

pub mod abis;
pub mod addresses;
pub mod client;
pub mod config;
pub mod types;
pub mod utils;
pub mod wallet;

// Re-export main components for easy access
pub use client::TournamentClient;
pub use types::*;
