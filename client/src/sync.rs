//   Copyright 2026 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

//! Runs contract reads and applies the results to the stores.
//!
//! On failure the store's error is set and the error is returned unchanged.

use std::{collections::HashSet, sync::Arc};

use ethers::{providers::Middleware, types::U256};
use log::{error, info};

use crate::{
    actions::ReadActions,
    config::{ClientConfig, SigningClient},
    error::{ActionError, ConfigError},
    stores::{CurrentRound, GameStore, LeaderboardEntry, WalletStore},
    types::GameId,
};

/// Loads the current round of `game` into the store.
pub async fn refresh_round<M: Middleware + 'static>(
    reader: &ReadActions<M>,
    store: &GameStore,
    game: GameId,
) -> Result<CurrentRound, ActionError<M>> {
    store.set_loading(true);
    let result = load_round(reader, game).await;
    match &result {
        Ok(round) => {
            store.set_current_round(*round);
            store.set_error(None);
        }
        Err(err) => store.set_error(Some(err.to_string())),
    }
    store.set_loading(false);
    result
}

async fn load_round<M: Middleware + 'static>(
    reader: &ReadActions<M>,
    game: GameId,
) -> Result<CurrentRound, ActionError<M>> {
    let round_id = reader.current_round_id().await?;
    let info = reader.game_round(round_id, game).await?;
    Ok(CurrentRound::new(round_id, &info))
}

/// Replaces the leaderboard of `game` with the scores of `round_id` and updates its player count.
///
/// Returns the number of scores loaded.
pub async fn refresh_scores<M: Middleware + 'static>(
    reader: &ReadActions<M>,
    store: &GameStore,
    round_id: U256,
    game: GameId,
) -> Result<usize, ActionError<M>> {
    store.set_loading(true);
    let result = reader.game_scores(round_id, game).await;
    let loaded = match result {
        Ok(scores) => {
            let players = scores
                .iter()
                .map(|score| score.player)
                .collect::<HashSet<_>>()
                .len();
            store.set_scores(game, scores.iter().map(LeaderboardEntry::from).collect());
            store.set_active_players(game, players);
            store.set_error(None);
            Ok(scores.len())
        }
        Err(err) => {
            store.set_error(Some(err.to_string()));
            Err(err)
        }
    };
    store.set_loading(false);
    loaded
}

/// Refreshes the role cache of the connected wallet: the contract owner and whether the wallet is an active
/// verifier of `game` in `round_id`. Does nothing while disconnected.
pub async fn refresh_roles<M: Middleware + 'static>(
    reader: &ReadActions<M>,
    wallet: &WalletStore,
    round_id: U256,
    game: GameId,
) -> Result<(), ActionError<M>> {
    let Some(address) = wallet.address() else {
        return Ok(());
    };
    let result = async {
        let owner = reader.owner().await?;
        let stats = reader.verifier_stats(round_id, game, address).await?;
        Ok::<_, ActionError<M>>((owner, stats))
    }
    .await;

    match result {
        Ok((owner, stats)) => {
            wallet.set_contract_owner(Some(owner));
            wallet.set_verifier_status(address, stats.is_active);
            Ok(())
        }
        Err(err) => {
            wallet.set_error(Some(err.to_string()));
            Err(err)
        }
    }
}

/// Connects the wallet whose key is available in the environment right now.
pub fn connect_wallet(wallet: &WalletStore, config: &ClientConfig) -> Result<Arc<SigningClient>, ConfigError> {
    wallet.set_connecting(true);
    let result = config.signing_client();
    finish_connect(wallet, result)
}

pub fn connect_wallet_with_key(
    wallet: &WalletStore,
    config: &ClientConfig,
    key: &str,
) -> Result<Arc<SigningClient>, ConfigError> {
    wallet.set_connecting(true);
    let result = config.signing_client_with_key(key);
    finish_connect(wallet, result)
}

fn finish_connect(
    wallet: &WalletStore,
    result: Result<Arc<SigningClient>, ConfigError>,
) -> Result<Arc<SigningClient>, ConfigError> {
    match &result {
        Ok(client) => {
            info!("Connected wallet {:?}", client.address());
            wallet.set_address(Some(client.address()));
            wallet.set_error(None);
        }
        Err(err) => {
            error!("Error connecting wallet: {err}");
            wallet.set_error(Some(err.to_string()));
        }
    }
    wallet.set_connecting(false);
    result
}

/// Forgets the connected wallet and its cached roles.
pub fn disconnect_wallet(wallet: &WalletStore) {
    wallet.reset();
}
