pub mod errors;
pub mod models;

pub use errors::ContractError;
pub use models::*;
