//   Copyright 2026 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

use std::collections::BTreeMap;

use ethers::types::{Address, U256};
use serde::Serialize;
use tokio::sync::watch;

use super::unix_now;
use crate::types::{GameId, RoundInfo, Score};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrentRound {
    pub id: U256,
    pub start_time: u64,
    pub end_time: u64,
    pub total_prize_pool: U256,
    pub rewards_distributed: bool,
    pub verifiers_count: U256,
}

impl CurrentRound {
    pub fn new(id: U256, info: &RoundInfo) -> Self {
        Self {
            id,
            start_time: info.start_time,
            end_time: info.end_time,
            total_prize_pool: info.total_prize_pool,
            rewards_distributed: info.rewards_distributed,
            verifiers_count: info.verifiers_count,
        }
    }
}

/// A score as shown on a leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    pub player: Address,
    pub score: u128,
    /// When the score was submitted. Scores read from the contract use their block number, saturating at
    /// `u64::MAX`.
    pub timestamp: u64,
    pub verified: bool,
}

impl From<&Score> for LeaderboardEntry {
    fn from(score: &Score) -> Self {
        Self {
            player: score.player,
            score: score.score,
            timestamp: u64::try_from(score.block_number).unwrap_or(u64::MAX),
            verified: score.verified,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    pub current_round: Option<CurrentRound>,
    pub scores: BTreeMap<GameId, Vec<LeaderboardEntry>>,
    pub active_players: BTreeMap<GameId, usize>,
    pub loading: bool,
    pub error: Option<String>,
}

impl GameState {
    /// Seconds until the current round ends, `None` if no round is loaded.
    pub fn current_round_time_left(&self, now: u64) -> Option<u64> {
        self.current_round
            .as_ref()
            .map(|round| round.end_time.saturating_sub(now))
    }

    pub fn is_round_active(&self, now: u64) -> bool {
        self.current_round_time_left(now)
            .is_some_and(|time_left| time_left > 0)
    }

    pub fn scores(&self, game: GameId) -> &[LeaderboardEntry] {
        self.scores.get(&game).map(Vec::as_slice).unwrap_or_default()
    }

    /// Scores of `game`, best first. Equal scores are ordered by who submitted first.
    pub fn sorted_scores(&self, game: GameId) -> Vec<LeaderboardEntry> {
        let mut scores = self.scores(game).to_vec();
        scores.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.timestamp.cmp(&b.timestamp))
        });
        scores
    }

    pub fn active_players(&self, game: GameId) -> usize {
        self.active_players.get(&game).copied().unwrap_or_default()
    }
}

/// Round, leaderboard and loading state of the games.
#[derive(Debug)]
pub struct GameStore {
    state: watch::Sender<GameState>,
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStore {
    pub fn new() -> Self {
        let (state, _) = watch::channel(GameState::default());
        Self { state }
    }

    pub fn subscribe(&self) -> watch::Receiver<GameState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> GameState {
        self.state.borrow().clone()
    }

    pub fn set_current_round(&self, round: CurrentRound) {
        self.state
            .send_modify(|state| state.current_round = Some(round));
    }

    pub fn add_score(&self, game: GameId, entry: LeaderboardEntry) {
        self.state
            .send_modify(|state| state.scores.entry(game).or_default().push(entry));
    }

    pub fn set_scores(&self, game: GameId, entries: Vec<LeaderboardEntry>) {
        self.state.send_modify(|state| {
            state.scores.insert(game, entries);
        });
    }

    pub fn set_active_players(&self, game: GameId, count: usize) {
        self.state.send_modify(|state| {
            state.active_players.insert(game, count);
        });
    }

    pub fn set_loading(&self, loading: bool) {
        self.state.send_modify(|state| state.loading = loading);
    }

    pub fn set_error(&self, error: Option<String>) {
        self.state.send_modify(|state| state.error = error);
    }

    pub fn reset(&self) {
        self.state.send_replace(GameState::default());
    }

    pub fn current_round_time_left(&self) -> Option<u64> {
        self.state.borrow().current_round_time_left(unix_now())
    }

    pub fn is_round_active(&self) -> bool {
        self.state.borrow().is_round_active(unix_now())
    }

    pub fn sorted_scores(&self, game: GameId) -> Vec<LeaderboardEntry> {
        self.state.borrow().sorted_scores(game)
    }
}
