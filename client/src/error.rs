//   Copyright 2026 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

use ethers::{
    contract::ContractError,
    providers::{Middleware, ProviderError},
    signers::WalletError,
    types::{TxHash, U256},
    utils::ConversionError,
};
use thiserror::Error;

use crate::{abi, config::Network};

/// Failures while loading configuration or building clients.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read or write config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid RPC endpoint {url}: {reason}")]
    InvalidEndpoint { url: String, reason: String },
    #[error("no wallet available: set {0} to a private key")]
    MissingWallet(&'static str),
    #[error("invalid wallet key: {0}")]
    InvalidWalletKey(#[from] WalletError),
    #[error("no contract address configured for {0}")]
    MissingContractAddress(Network),
}

/// Failures of a contract action. Underlying errors are carried unchanged.
#[derive(Debug, Error)]
pub enum ActionError<M: Middleware + 'static> {
    /// Transport failure or contract revert while calling the contract
    #[error(transparent)]
    Contract(#[from] ContractError<M>),
    /// Transport failure while waiting for a transaction
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error("invalid stake amount: {0}")]
    InvalidStake(#[from] ConversionError),
    #[error("{field} does not fit the contract parameter: {value}")]
    ValueOutOfRange { field: &'static str, value: U256 },
    #[error("transaction {0:?} was dropped before it was confirmed")]
    Dropped(TxHash),
}

impl<M: Middleware + 'static> ActionError<M> {
    /// The raw revert data, when the contract rejected the call.
    pub fn revert_data(&self) -> Option<&[u8]> {
        match self {
            ActionError::Contract(err) => err.as_revert().map(|data| data.as_ref()),
            _ => None,
        }
    }

    /// The name of the contract error (e.g. `RoundNotEnded`), when the contract rejected the call.
    pub fn revert_name(&self) -> Option<&'static str> {
        self.revert_data().and_then(abi::revert_name)
    }
}
