pub mod application;
pub mod domain;
pub mod infrastructure;

// Main exports for external use
pub use application::services::TournamentService;
pub use infrastructure::contracts::TournamentClient;
