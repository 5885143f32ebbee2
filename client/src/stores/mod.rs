//   Copyright 2026 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

//! UI state rebuilt from contract reads.
//!
//! Each store is an explicit context object wrapping a watch channel: setters publish a new snapshot and
//! subscribers see every change. Derived views are pure functions of a snapshot.

mod game;
mod wallet;

pub use game::{CurrentRound, GameState, GameStore, LeaderboardEntry};
pub use wallet::{WalletState, WalletStore};

use std::time::{SystemTime, UNIX_EPOCH};

/// Seconds since the unix epoch, the unit the contract uses for round times.
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}
