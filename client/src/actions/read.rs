//   Copyright 2026 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

use std::sync::Arc;

use ethers::{
    providers::Middleware,
    types::{Address, U256},
};
use log::debug;

use super::LogFailure;
use crate::{
    abi::{RetroGamingPlatform, RetroGamingPlatformEvents},
    error::ActionError,
    types::{GameConfig, GameId, RoundInfo, Score, VerifierStats},
};

/// Read-only queries against the platform contract.
#[derive(Debug, Clone)]
pub struct ReadActions<M> {
    contract: RetroGamingPlatform<M>,
}

impl<M: Middleware + 'static> ReadActions<M> {
    pub fn new(address: Address, client: Arc<M>) -> Self {
        Self {
            contract: RetroGamingPlatform::new(address, client),
        }
    }

    pub fn address(&self) -> Address {
        self.contract.address()
    }

    pub async fn current_round_id(&self) -> Result<U256, ActionError<M>> {
        debug!("Reading current round id");
        self.contract
            .current_global_round_id()
            .call()
            .await
            .log_failure("getting current round")
    }

    pub async fn game_config(&self, game: GameId) -> Result<GameConfig, ActionError<M>> {
        debug!("Reading config for {game}");
        self.contract
            .get_game_config(game.to_string())
            .call()
            .await
            .map(GameConfig::from)
            .log_failure("getting game config")
    }

    pub async fn game_round(&self, round_id: U256, game: GameId) -> Result<RoundInfo, ActionError<M>> {
        debug!("Reading round {round_id} of {game}");
        self.contract
            .get_game_round(round_id, game.to_string())
            .call()
            .await
            .map(|(basic, verifiers_count)| RoundInfo::from_parts(basic, verifiers_count))
            .log_failure("getting game round")
    }

    /// All scores submitted for `game` in `round_id`, in submission order.
    pub async fn game_scores(&self, round_id: U256, game: GameId) -> Result<Vec<Score>, ActionError<M>> {
        debug!("Reading scores of round {round_id} of {game}");
        self.contract
            .get_game_scores(round_id, game.to_string())
            .call()
            .await
            .map(|scores| scores.into_iter().map(Score::from).collect())
            .log_failure("getting game scores")
    }

    pub async fn scores_by_round(
        &self,
        round_id: U256,
        game: GameId,
        verified_only: bool,
    ) -> Result<Vec<Score>, ActionError<M>> {
        debug!("Reading scores of round {round_id} of {game} (verified only: {verified_only})");
        self.contract
            .get_scores_by_round(round_id, game.to_string(), verified_only)
            .call()
            .await
            .map(|scores| scores.into_iter().map(Score::from).collect())
            .log_failure("getting scores by round")
    }

    pub async fn player_scores(
        &self,
        round_id: U256,
        game: GameId,
        player: Address,
    ) -> Result<Vec<Score>, ActionError<M>> {
        debug!("Reading scores of {player:?} in round {round_id} of {game}");
        self.contract
            .get_player_scores(round_id, game.to_string(), player)
            .call()
            .await
            .map(|scores| scores.into_iter().map(Score::from).collect())
            .log_failure("getting player scores")
    }

    /// Total stake (wei) `player` committed to `game` in `round_id`.
    pub async fn player_game_stake(
        &self,
        round_id: U256,
        game: GameId,
        player: Address,
    ) -> Result<U256, ActionError<M>> {
        self.contract
            .get_player_game_stake(round_id, game.to_string(), player)
            .call()
            .await
            .log_failure("getting player game stake")
    }

    pub async fn game_prize_pool(&self, round_id: U256, game: GameId) -> Result<U256, ActionError<M>> {
        self.contract
            .get_game_prize_pool(round_id, game.to_string())
            .call()
            .await
            .log_failure("getting game prize pool")
    }

    pub async fn verifier_stats(
        &self,
        round_id: U256,
        game: GameId,
        verifier: Address,
    ) -> Result<VerifierStats, ActionError<M>> {
        debug!("Reading stats of verifier {verifier:?} in round {round_id} of {game}");
        self.contract
            .get_verifier_stats(round_id, game.to_string(), verifier)
            .call()
            .await
            .map(VerifierStats::from)
            .log_failure("getting verifier stats")
    }

    pub async fn owner(&self) -> Result<Address, ActionError<M>> {
        self.contract.owner().call().await.log_failure("getting owner")
    }

    pub async fn paused(&self) -> Result<bool, ActionError<M>> {
        self.contract.paused().call().await.log_failure("getting pause state")
    }

    pub async fn upgrade_interface_version(&self) -> Result<String, ActionError<M>> {
        self.contract
            .upgrade_interface_version()
            .call()
            .await
            .log_failure("getting upgrade interface version")
    }

    /// Events emitted by the contract from `from_block` onwards.
    pub async fn events_since(&self, from_block: u64) -> Result<Vec<RetroGamingPlatformEvents>, ActionError<M>> {
        debug!("Reading events from block {from_block}");
        self.contract
            .events()
            .from_block(from_block)
            .query()
            .await
            .log_failure("getting events")
    }
}
