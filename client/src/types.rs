//   Copyright 2026 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

use std::{fmt, str::FromStr};

use ethers::types::{Address, H256, U256};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::abi;

/// A game hosted on the platform. The contract keys games by their lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameId {
    Snake,
    Tetris,
}

impl GameId {
    pub const ALL: [GameId; 2] = [GameId::Snake, GameId::Tetris];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameId::Snake => "snake",
            GameId::Tetris => "tetris",
        }
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown game: {0}")]
pub struct ParseGameIdError(pub String);

impl FromStr for GameId {
    type Err = ParseGameIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "snake" => Ok(GameId::Snake),
            "tetris" => Ok(GameId::Tetris),
            _ => Err(ParseGameIdError(s.to_string())),
        }
    }
}

/// Per-game configuration as stored by the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Round length in seconds
    pub round_duration: u64,
    /// Minimum stake in wei
    pub min_stake: u64,
    /// Platform fee in percent
    pub platform_fee: u8,
    /// Verifier fee in percent
    pub verifier_fee: u8,
    pub max_score_per_game: u64,
    pub active: bool,
    pub salt_key: H256,
    pub current_round: U256,
    pub last_round_start_time: u64,
}

impl From<abi::GameConfig> for GameConfig {
    fn from(raw: abi::GameConfig) -> Self {
        Self {
            round_duration: raw.round_duration,
            min_stake: raw.min_stake,
            platform_fee: raw.platform_fee,
            verifier_fee: raw.verifier_fee,
            max_score_per_game: raw.max_score_per_game,
            active: raw.active,
            salt_key: H256::from(raw.salt_key),
            current_round: raw.current_round,
            last_round_start_time: raw.last_round_start_time,
        }
    }
}

/// A round of one game, keyed on-chain by (round id, game).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundInfo {
    pub start_time: u64,
    pub end_time: u64,
    pub total_prize_pool: U256,
    pub rewards_distributed: bool,
    pub verifiers_count: U256,
}

impl RoundInfo {
    pub(crate) fn from_parts(basic: abi::RoundBasicInfo, verifiers_count: U256) -> Self {
        Self {
            start_time: basic.start_time,
            end_time: basic.end_time,
            total_prize_pool: basic.total_prize_pool,
            rewards_distributed: basic.rewards_distributed,
            verifiers_count,
        }
    }
}

/// A submitted score. Scores are append-only per round and game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player: Address,
    pub score: u128,
    pub block_number: U256,
    pub verified: bool,
    /// Stake paid with the submission, in wei
    pub stake: u64,
    pub score_hash: H256,
    /// The verifier that attested the score, zero until verified
    pub verifier: Address,
}

impl From<abi::Score> for Score {
    fn from(raw: abi::Score) -> Self {
        Self {
            player: raw.player,
            score: raw.score,
            block_number: raw.block_number,
            verified: raw.verified,
            stake: raw.stake,
            score_hash: H256::from(raw.score_hash),
            verifier: raw.verifier,
        }
    }
}

/// Activity of one verifier for a round of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifierStats {
    pub actions: U256,
    pub rewards: U256,
    pub is_active: bool,
}

impl From<(U256, U256, bool)> for VerifierStats {
    fn from((actions, rewards, is_active): (U256, U256, bool)) -> Self {
        Self {
            actions,
            rewards,
            is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_ids_parse_case_insensitively() {
        assert_eq!("Snake".parse::<GameId>(), Ok(GameId::Snake));
        assert_eq!(" tetris ".parse::<GameId>(), Ok(GameId::Tetris));
        assert_eq!(
            "pong".parse::<GameId>(),
            Err(ParseGameIdError("pong".to_string()))
        );
    }

    #[test]
    fn game_ids_render_as_contract_keys() {
        for game in GameId::ALL {
            assert_eq!(game.to_string().parse::<GameId>(), Ok(game));
        }
        assert_eq!(serde_json::to_string(&GameId::Tetris).unwrap(), "\"tetris\"");
    }
}
