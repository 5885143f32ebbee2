//   Copyright 2026 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

use std::{fmt, path::Path, str::FromStr, sync::Arc, time::Duration};

use ethers::{
    middleware::SignerMiddleware,
    providers::{Http, Provider},
    signers::{LocalWallet, Signer},
    types::{Address, H160, H256, U256},
    utils::{parse_ether, ConversionError},
};
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ConfigError;

/// Production deployment of the platform contract on Polygon.
pub const RETRO_GAMING_ADDRESS: Address = H160([
    0x14, 0x42, 0x5c, 0x8f, 0x8b, 0x9b, 0x45, 0x24, 0x65, 0x9c, 0xf2, 0x5a, 0x76, 0x2d, 0x3b, 0x74, 0x1d, 0xe0, 0xde,
    0x44,
]);

/// Environment variable holding the private key of the signing wallet.
pub const WALLET_KEY_ENV: &str = "RETRO_GAMING_PRIVATE_KEY";

pub type SigningClient = SignerMiddleware<Provider<Http>, LocalWallet>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Network {
    /// Polygon PoS mainnet
    #[default]
    #[serde(alias = "polygon", alias = "matic")]
    Polygon,
    /// Polygon Amoy testnet
    #[serde(alias = "amoy")]
    Amoy,
}

impl Network {
    pub fn chain_id(&self) -> u64 {
        match self {
            Network::Polygon => 137,
            Network::Amoy => 80002,
        }
    }

    pub fn default_rpc_url(&self) -> &'static str {
        match self {
            Network::Polygon => "https://polygon.drpc.org",
            Network::Amoy => "https://rpc-amoy.polygon.technology",
        }
    }

    /// The platform deployment on this network, if there is one.
    pub fn default_contract_address(&self) -> Option<Address> {
        match self {
            Network::Polygon => Some(RETRO_GAMING_ADDRESS),
            Network::Amoy => None,
        }
    }

    /// How often pending transactions are polled.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(2)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Polygon => f.write_str("Polygon"),
            Network::Amoy => f.write_str("Amoy"),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown network: {0}")]
pub struct ParseNetworkError(pub String);

impl FromStr for Network {
    type Err = ParseNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "polygon" | "matic" => Ok(Network::Polygon),
            "amoy" => Ok(Network::Amoy),
            _ => Err(ParseNetworkError(s.to_string())),
        }
    }
}

/// Parameters used when configuring a game. Defaults are the platform's standard settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Round length in seconds
    pub round_duration: u64,
    /// Minimum stake in ether, e.g. "0.01"
    pub min_stake: String,
    /// Platform fee in percent
    pub platform_fee: u8,
    /// Verifier fee in percent
    pub verifier_fee: u8,
    pub max_score_per_game: u64,
    pub salt_key: H256,
    pub active: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            round_duration: 172_800,
            min_stake: "0.01".to_string(),
            platform_fee: 30,
            verifier_fee: 10,
            max_score_per_game: 100,
            salt_key: H256::zero(),
            active: true,
        }
    }
}

impl GameSettings {
    pub fn min_stake_wei(&self) -> Result<U256, ConversionError> {
        parse_ether(&self.min_stake)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub network: Network,
    /// RPC endpoint, the network's public endpoint when unset
    #[serde(default)]
    pub rpc_url: Option<String>,
    /// Contract address, the network's deployment when unset
    #[serde(default)]
    pub contract_address: Option<Address>,
    #[serde(default)]
    pub game_settings: GameSettings,
}

impl ClientConfig {
    pub fn for_network(network: Network) -> Self {
        Self {
            network,
            ..Default::default()
        }
    }

    /// Loads the config file at `path`, falling back to the production defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let s = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&s)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let s = serde_json::to_string_pretty(self)?;
        std::fs::write(path, s)?;
        Ok(())
    }

    pub fn rpc_url(&self) -> &str {
        self.rpc_url
            .as_deref()
            .unwrap_or_else(|| self.network.default_rpc_url())
    }

    pub fn contract_address(&self) -> Result<Address, ConfigError> {
        self.contract_address
            .or_else(|| self.network.default_contract_address())
            .ok_or(ConfigError::MissingContractAddress(self.network))
    }

    /// Builds the read-only client. Construct it once and share it.
    pub fn public_client(&self) -> Result<Arc<Provider<Http>>, ConfigError> {
        Ok(Arc::new(self.provider()?))
    }

    /// Builds a signing client for the wallet key found in [`WALLET_KEY_ENV`] at the time of the call.
    pub fn signing_client(&self) -> Result<Arc<SigningClient>, ConfigError> {
        let key = std::env::var(WALLET_KEY_ENV).map_err(|_| ConfigError::MissingWallet(WALLET_KEY_ENV))?;
        self.signing_client_with_key(&key)
    }

    pub fn signing_client_with_key(&self, key: &str) -> Result<Arc<SigningClient>, ConfigError> {
        let wallet = key
            .trim()
            .parse::<LocalWallet>()?
            .with_chain_id(self.network.chain_id());
        debug!("Signing as {:?} on {}", wallet.address(), self.network);
        Ok(Arc::new(SignerMiddleware::new(self.provider()?, wallet)))
    }

    fn provider(&self) -> Result<Provider<Http>, ConfigError> {
        let url = self.rpc_url();
        let provider = Provider::<Http>::try_from(url).map_err(|e| ConfigError::InvalidEndpoint {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(provider.interval(self.network.poll_interval()))
    }
}
