//   Copyright 2026 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

//! Client library for the Retro Gaming platform contract.
//!
//! The contract owns every rule of the platform (rounds, stakes, score verification and rewards). This crate only
//! talks to it:
//!
//! - [`config`] describes the network and builds the read-only and signing clients,
//! - [`abi`] holds the generated contract bindings,
//! - [`actions`] maps application operations to single contract calls,
//! - [`stores`] keeps the UI state that is rebuilt from contract reads,
//! - [`sync`] runs a read and applies the result to a store.

pub mod abi;
pub mod actions;
pub mod config;
pub mod error;
pub mod stores;
pub mod sync;
pub mod types;

pub use actions::{ReadActions, VerificationBatch, WriteActions};
pub use config::{ClientConfig, GameSettings, Network, SigningClient};
pub use error::{ActionError, ConfigError};
pub use stores::{GameStore, WalletStore};
pub use types::{GameConfig, GameId, RoundInfo, Score, VerifierStats};
