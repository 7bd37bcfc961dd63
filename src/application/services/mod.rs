pub mod tournament_service;

pub use tournament_service::TournamentService;
