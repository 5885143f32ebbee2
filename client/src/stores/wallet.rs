//   Copyright 2026 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

use ethers::types::{Address, U256};
use tokio::sync::watch;

/// Connection and role state of the user's wallet.
///
/// Roles are never set directly. The store caches the contract owner and the last verifier found active, and the
/// role flags are derived by comparing them with the connected address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletState {
    pub address: Option<Address>,
    pub is_connecting: bool,
    pub error: Option<String>,
    /// Balance (wei) waiting to be withdrawn
    pub pending_withdrawal: U256,
    pub contract_owner: Option<Address>,
    pub active_verifier: Option<Address>,
}

impl WalletState {
    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.address.is_some() && self.address == self.contract_owner
    }

    pub fn is_verifier(&self) -> bool {
        self.address.is_some() && self.address == self.active_verifier
    }
}

#[derive(Debug)]
pub struct WalletStore {
    state: watch::Sender<WalletState>,
}

impl Default for WalletStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WalletStore {
    pub fn new() -> Self {
        let (state, _) = watch::channel(WalletState::default());
        Self { state }
    }

    pub fn subscribe(&self) -> watch::Receiver<WalletState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> WalletState {
        self.state.borrow().clone()
    }

    pub fn address(&self) -> Option<Address> {
        self.state.borrow().address
    }

    pub fn set_address(&self, address: Option<Address>) {
        self.state.send_modify(|state| state.address = address);
    }

    pub fn set_connecting(&self, is_connecting: bool) {
        self.state
            .send_modify(|state| state.is_connecting = is_connecting);
    }

    pub fn set_error(&self, error: Option<String>) {
        self.state.send_modify(|state| state.error = error);
    }

    pub fn set_pending_withdrawal(&self, amount: U256) {
        self.state
            .send_modify(|state| state.pending_withdrawal = amount);
    }

    pub fn set_contract_owner(&self, owner: Option<Address>) {
        self.state.send_modify(|state| state.contract_owner = owner);
    }

    /// Records whether `verifier` is currently active. Clearing a verifier that is not cached is a no-op.
    pub fn set_verifier_status(&self, verifier: Address, active: bool) {
        self.state.send_modify(|state| {
            if active {
                state.active_verifier = Some(verifier);
            } else if state.active_verifier == Some(verifier) {
                state.active_verifier = None;
            }
        });
    }

    pub fn reset(&self) {
        self.state.send_replace(WalletState::default());
    }

    pub fn is_connected(&self) -> bool {
        self.state.borrow().is_connected()
    }

    pub fn is_admin(&self) -> bool {
        self.state.borrow().is_admin()
    }

    pub fn is_verifier(&self) -> bool {
        self.state.borrow().is_verifier()
    }
}

#[cfg(test)]
mod tests {
    use ethers::types::H160;

    use super::*;

    const ALICE: Address = H160([0xa1; 20]);
    const BOB: Address = H160([0xb0; 20]);

    #[test]
    fn connected_follows_address() {
        let store = WalletStore::new();
        assert!(!store.is_connected());

        store.set_address(Some(ALICE));
        assert!(store.is_connected());
        assert_eq!(store.address(), Some(ALICE));

        store.set_address(None);
        assert!(!store.is_connected());
    }

    #[test]
    fn admin_is_derived_from_contract_owner() {
        let store = WalletStore::new();
        store.set_contract_owner(Some(ALICE));
        // Nobody connected, nobody is admin
        assert!(!store.is_admin());

        store.set_address(Some(ALICE));
        assert!(store.is_admin());

        // Switching accounts drops the role without touching the cache
        store.set_address(Some(BOB));
        assert!(!store.is_admin());
        assert_eq!(store.snapshot().contract_owner, Some(ALICE));
    }

    #[test]
    fn verifier_is_derived_from_verifier_status() {
        let store = WalletStore::new();
        store.set_address(Some(BOB));
        assert!(!store.is_verifier());

        store.set_verifier_status(BOB, true);
        assert!(store.is_verifier());

        store.set_verifier_status(ALICE, false);
        assert!(store.is_verifier());

        store.set_verifier_status(BOB, false);
        assert!(!store.is_verifier());
    }

    #[test]
    fn reset_restores_initial_snapshot() {
        let store = WalletStore::new();
        store.set_address(Some(ALICE));
        store.set_connecting(true);
        store.set_error(Some("rejected".to_string()));
        store.set_pending_withdrawal(U256::exp10(17));
        store.set_contract_owner(Some(ALICE));
        store.set_verifier_status(ALICE, true);

        store.reset();
        assert_eq!(store.snapshot(), WalletState::default());
        assert_eq!(store.snapshot().pending_withdrawal, U256::zero());
    }
}
