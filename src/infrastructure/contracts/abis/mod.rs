use std::fs;

use ethers::abi::{Abi, ParamType, StateMutability};

use crate::domain::errors::ContractError;

pub fn load_tournament_escrow_abi() -> Result<Abi, ContractError> {
    load_abi("tournamentescrow_abi.json")
}

fn load_abi(filename: &str) -> Result<Abi, ContractError> {
    let abi_path = format!("abis/{}", filename);
    let abi_content = fs::read_to_string(&abi_path)
        .map_err(|e| ContractError::ContractCallError(format!("Failed to read ABI file {}: {}", filename, e)))?;

    serde_json::from_str(&abi_content)
        .map_err(|e| ContractError::ContractCallError(format!("Failed to parse ABI file {}: {}", filename, e)))
}

/// The method set the deployed escrow contract is expected to expose.
/// Name, parameter types, and mutability must all line up; anything the
/// contract adds beyond these is ignored.
fn expected_methods() -> Vec<(&'static str, Vec<ParamType>, StateMutability)> {
    let winners = ParamType::FixedArray(Box::new(ParamType::Address), 3);
    let amounts = ParamType::FixedArray(Box::new(ParamType::Uint(256)), 3);

    vec![
        ("depositPrize", vec![], StateMutability::Payable),
        ("distributePrizes", vec![winners, amounts], StateMutability::NonPayable),
        ("getAllWinners", vec![], StateMutability::View),
        ("getContractBalance", vec![], StateMutability::View),
        ("withdrawRemainingFunds", vec![], StateMutability::NonPayable),
        ("resetTournament", vec![], StateMutability::NonPayable),
        ("cancelTournamentAndRefund", vec![], StateMutability::NonPayable),
        ("emergencyWithdraw", vec![], StateMutability::NonPayable),
    ]
}

/// Validate a loaded ABI against the method set this client binds to.
/// Runs once when a session is created, so interface drift surfaces as a
/// connect-time error instead of a failure on the first call.
pub fn validate_interface(abi: &Abi) -> Result<(), ContractError> {
    for (name, inputs, mutability) in expected_methods() {
        let function = abi.function(name).map_err(|_| ContractError::InterfaceMismatch {
            method: name.to_string(),
            reason: "method missing from ABI".to_string(),
        })?;

        let actual: Vec<ParamType> = function.inputs.iter().map(|param| param.kind.clone()).collect();
        if actual != inputs {
            return Err(ContractError::InterfaceMismatch {
                method: name.to_string(),
                reason: format!("parameter mismatch: expected {:?}, found {:?}", inputs, actual),
            });
        }

        if function.state_mutability != mutability {
            return Err(ContractError::InterfaceMismatch {
                method: name.to_string(),
                reason: format!(
                    "mutability mismatch: expected {:?}, found {:?}",
                    mutability, function.state_mutability
                ),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethers::abi::Token;
    use ethers::types::{Address, U256};

    #[test]
    fn shipped_abi_passes_validation() {
        let abi = load_tournament_escrow_abi().expect("shipped ABI should load");
        assert!(validate_interface(&abi).is_ok());
    }

    #[test]
    fn missing_method_is_reported_by_name() {
        // Everything except distributePrizes.
        let abi: Abi = serde_json::from_str(
            r#"[
                {"type":"function","name":"depositPrize","inputs":[],"outputs":[],"stateMutability":"payable"},
                {"type":"function","name":"getAllWinners","inputs":[],"outputs":[
                    {"name":"","type":"address[3]"},{"name":"","type":"uint256[3]"}],"stateMutability":"view"},
                {"type":"function","name":"getContractBalance","inputs":[],"outputs":[
                    {"name":"","type":"uint256"}],"stateMutability":"view"},
                {"type":"function","name":"withdrawRemainingFunds","inputs":[],"outputs":[],"stateMutability":"nonpayable"},
                {"type":"function","name":"resetTournament","inputs":[],"outputs":[],"stateMutability":"nonpayable"},
                {"type":"function","name":"cancelTournamentAndRefund","inputs":[],"outputs":[],"stateMutability":"nonpayable"},
                {"type":"function","name":"emergencyWithdraw","inputs":[],"outputs":[],"stateMutability":"nonpayable"}
            ]"#,
        )
        .unwrap();

        match validate_interface(&abi) {
            Err(ContractError::InterfaceMismatch { method, .. }) => {
                assert_eq!(method, "distributePrizes");
            }
            other => panic!("expected InterfaceMismatch, got {:?}", other),
        }
    }

    #[test]
    fn wrong_mutability_is_rejected() {
        let mut drifted = load_tournament_escrow_abi().unwrap();
        for function in drifted.functions.get_mut("getAllWinners").unwrap() {
            function.state_mutability = StateMutability::NonPayable;
        }

        match validate_interface(&drifted) {
            Err(ContractError::InterfaceMismatch { method, reason }) => {
                assert_eq!(method, "getAllWinners");
                assert!(reason.contains("mutability"));
            }
            other => panic!("expected InterfaceMismatch, got {:?}", other),
        }
    }

    #[test]
    fn encoder_rejects_wrong_distribute_arity() {
        let abi = load_tournament_escrow_abi().unwrap();
        let function = abi.function("distributePrizes").unwrap();

        // Two winners instead of three: the remote interface, not the
        // client, is the arity enforcer, and it refuses to encode this.
        let winners = Token::FixedArray(vec![
            Token::Address(Address::zero()),
            Token::Address(Address::zero()),
        ]);
        let amounts = Token::FixedArray(vec![
            Token::Uint(U256::one()),
            Token::Uint(U256::one()),
        ]);

        assert!(function.encode_input(&[winners, amounts]).is_err());

        // The well-formed shape still encodes.
        let winners = Token::FixedArray(vec![Token::Address(Address::zero()); 3]);
        let amounts = Token::FixedArray(vec![Token::Uint(U256::one()); 3]);
        assert!(function.encode_input(&[winners, amounts]).is_ok());
    }
}
