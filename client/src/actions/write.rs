//   Copyright 2026 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

use std::sync::Arc;

use ethers::{
    abi::Detokenize,
    contract::ContractCall,
    providers::Middleware,
    types::{Address, TxHash, H256, U256},
    utils::parse_ether,
};
use log::{debug, info};

use super::{LogFailure, VerificationBatch};
use crate::{abi::RetroGamingPlatform, config::GameSettings, error::ActionError, types::GameId};

/// State-changing calls against the platform contract.
///
/// Every operation is sent from an already-connected `account`, waits for one confirmation and returns the
/// transaction hash. The `prepare_*` variants return the unsent call.
#[derive(Debug, Clone)]
pub struct WriteActions<M> {
    contract: RetroGamingPlatform<M>,
}

impl<M: Middleware + 'static> WriteActions<M> {
    pub fn new(address: Address, client: Arc<M>) -> Self {
        Self {
            contract: RetroGamingPlatform::new(address, client),
        }
    }

    pub fn address(&self) -> Address {
        self.contract.address()
    }

    // ─────────────────────────────── Players ──────────────────────────────────

    /// Builds a score submission paying `stake` (in ether, e.g. "0.01").
    pub fn prepare_submit_score(
        &self,
        account: Address,
        game: GameId,
        score: u128,
        score_hash: H256,
        stake: &str,
    ) -> Result<ContractCall<M, ()>, ActionError<M>> {
        parse_ether(stake)
            .map(|stake| {
                self.contract
                    .submit_score(game.to_string(), score, score_hash.0)
                    .from(account)
                    .value(stake)
            })
            .log_failure("submitting score")
    }

    pub async fn submit_score(
        &self,
        account: Address,
        game: GameId,
        score: u128,
        score_hash: H256,
        stake: &str,
    ) -> Result<TxHash, ActionError<M>> {
        let call = self.prepare_submit_score(account, game, score, score_hash, stake)?;
        send_and_confirm(call, "submitting score").await
    }

    pub fn prepare_withdraw(&self, account: Address) -> ContractCall<M, ()> {
        self.contract.withdraw().from(account)
    }

    /// Withdraws the account's pending balance.
    pub async fn withdraw(&self, account: Address) -> Result<TxHash, ActionError<M>> {
        send_and_confirm(self.prepare_withdraw(account), "withdrawing").await
    }

    // ────────────────────────────── Verifiers ─────────────────────────────────

    pub fn prepare_verify_scores_batch(
        &self,
        account: Address,
        round_id: U256,
        game: GameId,
        batch: &VerificationBatch,
    ) -> ContractCall<M, ()> {
        self.contract
            .verify_scores_batch(
                round_id,
                game.to_string(),
                batch.score_indexes(),
                batch.validations(),
            )
            .from(account)
    }

    pub async fn verify_scores_batch(
        &self,
        account: Address,
        round_id: U256,
        game: GameId,
        batch: &VerificationBatch,
    ) -> Result<TxHash, ActionError<M>> {
        debug!(
            "Verifying {} score(s) of round {round_id} of {game}: {:?}",
            batch.len(),
            batch
        );
        let call = self.prepare_verify_scores_batch(account, round_id, game, batch);
        send_and_confirm(call, "verifying scores batch").await
    }

    pub fn prepare_distribute_rewards(&self, account: Address, round_id: U256, game: GameId) -> ContractCall<M, ()> {
        self.contract
            .distribute_rewards(round_id, game.to_string())
            .from(account)
    }

    pub async fn distribute_rewards(
        &self,
        account: Address,
        round_id: U256,
        game: GameId,
    ) -> Result<TxHash, ActionError<M>> {
        let call = self.prepare_distribute_rewards(account, round_id, game);
        send_and_confirm(call, "distributing rewards").await
    }

    // ─────────────────────────────── Owner ────────────────────────────────────

    pub fn prepare_set_game_config(
        &self,
        account: Address,
        game: GameId,
        settings: &GameSettings,
    ) -> Result<ContractCall<M, ()>, ActionError<M>> {
        min_stake_wei::<M>(settings)
            .map(|min_stake| {
                self.contract
                    .set_game_config(
                        game.to_string(),
                        settings.round_duration,
                        min_stake,
                        settings.platform_fee,
                        settings.verifier_fee,
                    )
                    .from(account)
            })
            .log_failure("setting game config")
    }

    /// Configures a new game with the duration, stake and fees of `settings`.
    pub async fn set_game_config(
        &self,
        account: Address,
        game: GameId,
        settings: &GameSettings,
    ) -> Result<TxHash, ActionError<M>> {
        let call = self.prepare_set_game_config(account, game, settings)?;
        send_and_confirm(call, "setting game config").await
    }

    pub fn prepare_update_game_config(
        &self,
        account: Address,
        game: GameId,
        settings: &GameSettings,
    ) -> Result<ContractCall<M, ()>, ActionError<M>> {
        min_stake_wei::<M>(settings)
            .map(|min_stake| {
                self.contract
                    .update_game_config(
                        game.to_string(),
                        settings.round_duration,
                        min_stake,
                        settings.platform_fee,
                        settings.verifier_fee,
                        settings.max_score_per_game,
                        settings.salt_key.0,
                        settings.active,
                    )
                    .from(account)
            })
            .log_failure("updating game config")
    }

    /// Replaces every setting of an existing game.
    pub async fn update_game_config(
        &self,
        account: Address,
        game: GameId,
        settings: &GameSettings,
    ) -> Result<TxHash, ActionError<M>> {
        let call = self.prepare_update_game_config(account, game, settings)?;
        send_and_confirm(call, "updating game config").await
    }

    pub fn prepare_update_salt_key(&self, account: Address, game: GameId, salt_key: H256) -> ContractCall<M, ()> {
        self.contract
            .update_salt_key(game.to_string(), salt_key.0)
            .from(account)
    }

    pub async fn update_salt_key(&self, account: Address, game: GameId, salt_key: H256) -> Result<TxHash, ActionError<M>> {
        let call = self.prepare_update_salt_key(account, game, salt_key);
        send_and_confirm(call, "updating salt key").await
    }

    pub fn prepare_add_verifier(&self, account: Address, verifier: Address) -> ContractCall<M, ()> {
        self.contract.add_verifier(verifier).from(account)
    }

    pub async fn add_verifier(&self, account: Address, verifier: Address) -> Result<TxHash, ActionError<M>> {
        send_and_confirm(self.prepare_add_verifier(account, verifier), "adding verifier").await
    }

    pub fn prepare_remove_verifier(&self, account: Address, verifier: Address) -> ContractCall<M, ()> {
        self.contract.remove_verifier(verifier).from(account)
    }

    pub async fn remove_verifier(&self, account: Address, verifier: Address) -> Result<TxHash, ActionError<M>> {
        send_and_confirm(self.prepare_remove_verifier(account, verifier), "removing verifier").await
    }

    pub fn prepare_pause(&self, account: Address) -> ContractCall<M, ()> {
        self.contract.pause().from(account)
    }

    pub async fn pause(&self, account: Address) -> Result<TxHash, ActionError<M>> {
        send_and_confirm(self.prepare_pause(account), "pausing").await
    }

    pub fn prepare_unpause(&self, account: Address) -> ContractCall<M, ()> {
        self.contract.unpause().from(account)
    }

    pub async fn unpause(&self, account: Address) -> Result<TxHash, ActionError<M>> {
        send_and_confirm(self.prepare_unpause(account), "unpausing").await
    }

    /// Sends a call built by one of the `prepare_*` methods, possibly adjusted by the caller, and waits for one
    /// confirmation.
    pub async fn send<D: Detokenize>(&self, call: ContractCall<M, D>) -> Result<TxHash, ActionError<M>> {
        send_and_confirm(call, "sending transaction").await
    }
}

fn min_stake_wei<M: Middleware + 'static>(settings: &GameSettings) -> Result<u64, ActionError<M>> {
    let value = settings.min_stake_wei()?;
    if value > U256::from(u64::MAX) {
        return Err(ActionError::ValueOutOfRange {
            field: "min_stake",
            value,
        });
    }
    Ok(value.as_u64())
}

/// Sends `call` and waits for one confirmation.
async fn send_and_confirm<M, D>(call: ContractCall<M, D>, action: &str) -> Result<TxHash, ActionError<M>>
where
    M: Middleware + 'static,
    D: Detokenize,
{
    confirm(call).await.log_failure(action)
}

async fn confirm<M, D>(call: ContractCall<M, D>) -> Result<TxHash, ActionError<M>>
where
    M: Middleware + 'static,
    D: Detokenize,
{
    let pending = call.send().await?;
    let tx_hash = *pending;
    info!("Transaction submitted: {tx_hash:?}");
    match pending.confirmations(1).await? {
        Some(receipt) => {
            info!(
                "Transaction {tx_hash:?} confirmed in block {}",
                receipt.block_number.unwrap_or_default()
            );
            Ok(receipt.transaction_hash)
        }
        None => Err(ActionError::Dropped(tx_hash)),
    }
}
