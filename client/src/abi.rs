//   Copyright 2026 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

//! Bindings for the deployed `RetroGamingPlatformV2` contract.
//!
//! Everything here is generated from `abi/RetroGamingPlatform.json`: the `RetroGamingPlatform` contract type, one
//! struct per call, event and error, and the raw structs returned by the getters (`GameConfig`, `RoundBasicInfo`,
//! `Score`).

use ethers::{
    abi::{ethabi::AbiError as ErrorDef, Abi},
    contract::abigen,
    utils::id,
};

abigen!(RetroGamingPlatform, "./abi/RetroGamingPlatform.json");

/// The contract interface: functions, events and errors.
pub fn contract_abi() -> &'static Abi {
    &RETROGAMINGPLATFORM_ABI
}

/// The 4-byte selector the contract prefixes revert data with when it raises `error`.
pub fn error_selector(error: &ErrorDef) -> [u8; 4] {
    let params = error
        .inputs
        .iter()
        .map(|param| param.kind.to_string())
        .collect::<Vec<_>>()
        .join(",");
    id(format!("{}({})", error.name, params))
}

/// Returns the name of the contract error encoded in `data`, if the selector belongs to this contract.
pub fn revert_name(data: &[u8]) -> Option<&'static str> {
    let selector = data.get(..4)?;
    contract_abi()
        .errors()
        .find(|error| error_selector(error) == selector)
        .map(|error| error.name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interface_lists_the_platform_surface() {
        let abi = contract_abi();
        for function in [
            "submitScore",
            "verifyScoresBatch",
            "distributeRewards",
            "withdraw",
            "setGameConfig",
            "updateGameConfig",
            "currentGlobalRoundId",
            "getGameConfig",
            "getGameRound",
            "getGameScores",
            "getScoresByRound",
            "getPlayerScores",
            "getPlayerGameStake",
            "getGamePrizePool",
            "getVerifierStats",
            "owner",
            "paused",
            "UPGRADE_INTERFACE_VERSION",
        ] {
            assert!(abi.function(function).is_ok(), "missing function {function}");
        }
        for event in [
            "GameConfigured",
            "GameRoundStarted",
            "ScoreSubmitted",
            "ScoreVerified",
            "RewardsDistributed",
            "WithdrawalProcessed",
            "VerifierUpdated",
        ] {
            assert!(abi.event(event).is_ok(), "missing event {event}");
        }
        for error in [
            "InsufficientStake",
            "RoundNotEnded",
            "AlreadyDistributed",
            "UnauthorizedAccess",
            "MaxScoresReached",
        ] {
            assert!(abi.errors.contains_key(error), "missing error {error}");
        }
    }

    #[test]
    fn revert_data_maps_to_error_name() {
        let data = id("InsufficientStake()");
        assert_eq!(revert_name(&data), Some("InsufficientStake"));

        // Errors with arguments carry their ABI-encoded arguments after the selector
        let mut data = id("OwnableUnauthorizedAccount(address)").to_vec();
        data.extend_from_slice(&[0u8; 32]);
        assert_eq!(revert_name(&data), Some("OwnableUnauthorizedAccount"));
    }

    #[test]
    fn selectors_are_computed_from_error_signatures() {
        let abi = contract_abi();
        let stake = &abi.errors["InsufficientStake"][0];
        assert_eq!(error_selector(stake), id("InsufficientStake()"));
        let owner = &abi.errors["OwnableUnauthorizedAccount"][0];
        assert_eq!(error_selector(owner), id("OwnableUnauthorizedAccount(address)"));
    }

    #[test]
    fn unknown_or_short_revert_data_has_no_name() {
        assert_eq!(revert_name(&id("Panic(uint256)")), None);
        assert_eq!(revert_name(&[0x01, 0x02]), None);
    }
}
