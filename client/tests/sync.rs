//   Copyright 2026 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

mod support;

use ethers::{
    abi::Token,
    types::{Address, U256},
};
use retro_gaming_client::{
    stores::{CurrentRound, LeaderboardEntry},
    sync::{connect_wallet_with_key, disconnect_wallet, refresh_roles, refresh_round, refresh_scores},
    ClientConfig,
    ConfigError,
    GameId,
    GameStore,
    Network,
    WalletStore,
};
use support::*;

const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

#[tokio::test]
async fn refresh_round_stores_the_current_round() {
    let chain = mock_chain();
    let store = GameStore::new();
    store.set_error(Some("stale".to_string()));

    // Served last in, first out: round id is read first
    chain.push_return(&round_tokens(1_000, 2_000, 7_500, false, 2));
    chain.push_return(&[uint(3)]);

    let round = refresh_round(&chain.reader(), &store, GameId::Snake)
        .await
        .unwrap();
    let expected = CurrentRound {
        id: U256::from(3),
        start_time: 1_000,
        end_time: 2_000,
        total_prize_pool: U256::from(7_500),
        rewards_distributed: false,
        verifiers_count: U256::from(2),
    };
    assert_eq!(round, expected);

    let state = store.snapshot();
    assert_eq!(state.current_round, Some(expected));
    assert!(!state.loading);
    assert_eq!(state.error, None);
    assert_eq!(state.current_round_time_left(1_500), Some(500));
}

#[tokio::test]
async fn failed_refresh_keeps_the_previous_round() {
    let chain = mock_chain();
    let store = GameStore::new();
    let previous = CurrentRound {
        id: U256::one(),
        start_time: 10,
        end_time: 20,
        total_prize_pool: U256::zero(),
        rewards_distributed: true,
        verifiers_count: U256::zero(),
    };
    store.set_current_round(previous);

    chain.push_failure("connection refused");

    let err = refresh_round(&chain.reader(), &store, GameId::Tetris)
        .await
        .unwrap_err();

    let state = store.snapshot();
    assert_eq!(state.current_round, Some(previous));
    assert!(!state.loading);
    assert_eq!(state.error, Some(err.to_string()));
}

#[tokio::test]
async fn refresh_scores_replaces_the_leaderboard() {
    let chain = mock_chain();
    let store = GameStore::new();
    store.add_score(
        GameId::Snake,
        LeaderboardEntry {
            player: BOB,
            score: 1,
            timestamp: 1,
            verified: false,
        },
    );

    chain.push_return(&scores_tokens(vec![
        score_token(ALICE, 40, 100, false),
        score_token(BOB, 90, 101, true),
        score_token(ALICE, 90, 99, false),
    ]));

    let loaded = refresh_scores(&chain.reader(), &store, U256::from(3), GameId::Snake)
        .await
        .unwrap();
    assert_eq!(loaded, 3);

    let state = store.snapshot();
    assert_eq!(state.scores(GameId::Snake).len(), 3);
    assert_eq!(state.active_players(GameId::Snake), 2);
    assert!(state.scores(GameId::Tetris).is_empty());

    let best = state
        .sorted_scores(GameId::Snake)
        .iter()
        .map(|entry| (entry.player, entry.score))
        .collect::<Vec<_>>();
    assert_eq!(best, vec![(ALICE, 90), (BOB, 90), (ALICE, 40)]);
}

#[tokio::test]
async fn refresh_roles_is_a_no_op_while_disconnected() {
    let chain = mock_chain();
    let wallet = WalletStore::new();

    // Nothing queued: any request would fail
    refresh_roles(&chain.reader(), &wallet, U256::one(), GameId::Snake)
        .await
        .unwrap();
    assert_eq!(wallet.snapshot().contract_owner, None);
}

#[tokio::test]
async fn refresh_roles_derives_admin_and_verifier() {
    let chain = mock_chain();
    let wallet = WalletStore::new();
    wallet.set_address(Some(OWNER));

    chain.push_return(&[uint(2), uint(0), Token::Bool(true)]);
    chain.push_return(&[Token::Address(OWNER)]);
    refresh_roles(&chain.reader(), &wallet, U256::one(), GameId::Snake)
        .await
        .unwrap();
    assert!(wallet.is_admin());
    assert!(wallet.is_verifier());

    // Another account is neither, and losing verifier status is picked up on the next refresh
    wallet.set_address(Some(ALICE));
    assert!(!wallet.is_admin());
    assert!(!wallet.is_verifier());

    wallet.set_address(Some(OWNER));
    chain.push_return(&[uint(2), uint(0), Token::Bool(false)]);
    chain.push_return(&[Token::Address(OWNER)]);
    refresh_roles(&chain.reader(), &wallet, U256::from(2), GameId::Snake)
        .await
        .unwrap();
    assert!(wallet.is_admin());
    assert!(!wallet.is_verifier());
}

#[tokio::test]
async fn refresh_roles_failure_is_stored_on_the_wallet() {
    let chain = mock_chain();
    let wallet = WalletStore::new();
    wallet.set_address(Some(ALICE));

    chain.push_failure("rate limited");
    let err = refresh_roles(&chain.reader(), &wallet, U256::one(), GameId::Tetris)
        .await
        .unwrap_err();
    assert_eq!(wallet.snapshot().error, Some(err.to_string()));
    assert!(!wallet.is_admin());
}

#[test]
fn connecting_sets_the_wallet_address() {
    let wallet = WalletStore::new();
    let config = ClientConfig::for_network(Network::Amoy);

    let client = connect_wallet_with_key(&wallet, &config, DEV_KEY).unwrap();
    let expected = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
        .parse::<Address>()
        .unwrap();
    assert_eq!(client.address(), expected);

    let state = wallet.snapshot();
    assert_eq!(state.address, Some(expected));
    assert!(!state.is_connecting);
    assert_eq!(state.error, None);

    disconnect_wallet(&wallet);
    assert!(!wallet.is_connected());
}

#[test]
fn failed_connection_leaves_the_wallet_disconnected() {
    let wallet = WalletStore::new();
    let config = ClientConfig::default();

    let err = connect_wallet_with_key(&wallet, &config, "not a key").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidWalletKey(_)));

    let state = wallet.snapshot();
    assert!(!state.is_connected());
    assert!(!state.is_connecting);
    assert_eq!(state.error, Some(err.to_string()));
}
