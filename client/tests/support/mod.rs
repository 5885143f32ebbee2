//   Copyright 2026 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

#![allow(dead_code)]

use std::{sync::Arc, time::Duration};

use ethers::{
    abi::{encode, Token},
    providers::{JsonRpcError, MockProvider, MockResponse, Provider},
    types::{Address, Bytes, Transaction, TransactionReceipt, H160, H256, U256},
    utils::id,
};
use retro_gaming_client::{ReadActions, WriteActions};

pub const CONTRACT: Address = H160([0xc0; 20]);
pub const OWNER: Address = H160([0x0e; 20]);
pub const ALICE: Address = H160([0xa1; 20]);
pub const BOB: Address = H160([0xb0; 20]);

pub type MockClient = Provider<MockProvider>;

/// A provider answering JSON-RPC requests from a queue of canned responses.
///
/// Responses are served last in, first out: push the answer to the last request first.
pub struct MockChain {
    pub mock: MockProvider,
    pub client: Arc<MockClient>,
}

pub fn mock_chain() -> MockChain {
    let (provider, mock) = Provider::mocked();
    // Pending transactions poll at this interval
    let provider = provider.interval(Duration::from_millis(10));
    MockChain {
        mock,
        client: Arc::new(provider),
    }
}

impl MockChain {
    pub fn reader(&self) -> ReadActions<MockClient> {
        ReadActions::new(CONTRACT, self.client.clone())
    }

    pub fn writer(&self) -> WriteActions<MockClient> {
        WriteActions::new(CONTRACT, self.client.clone())
    }

    /// Queues the ABI-encoded return data of an `eth_call`.
    pub fn push_return(&self, tokens: &[Token]) {
        self.mock.push::<Bytes, _>(Bytes::from(encode(tokens))).unwrap();
    }

    /// Queues a revert raising the contract error with signature `error`, e.g. `RoundNotEnded()`.
    pub fn push_revert(&self, error: &str) {
        let data = Bytes::from(id(error).to_vec());
        self.mock.push_response(MockResponse::Error(JsonRpcError {
            code: 3,
            message: "execution reverted".to_string(),
            data: Some(serde_json::to_value(data).unwrap()),
        }));
    }

    /// Queues a transaction that is accepted as `hash` and mined in `block`.
    pub fn push_mined(&self, hash: H256, block: u64) {
        let receipt = TransactionReceipt {
            transaction_hash: hash,
            block_number: Some(block.into()),
            status: Some(1u64.into()),
            ..Default::default()
        };
        let tx = Transaction {
            hash,
            block_number: Some(block.into()),
            ..Default::default()
        };
        self.mock.push::<TransactionReceipt, _>(receipt).unwrap();
        self.mock.push::<Transaction, _>(tx).unwrap();
        self.mock.push::<H256, _>(hash).unwrap();
    }

    /// Queues a transaction that is accepted as `hash` and then no longer known to the node. A pending
    /// transaction looks it up once and retries three times before giving up.
    pub fn push_dropped(&self, hash: H256) {
        for _ in 0..4 {
            self.mock.push::<Option<Transaction>, _>(None).unwrap();
        }
        self.mock.push::<H256, _>(hash).unwrap();
    }

    pub fn push_failure(&self, message: &str) {
        self.mock.push_response(MockResponse::Error(JsonRpcError {
            code: -32000,
            message: message.to_string(),
            data: None,
        }));
    }
}

pub fn uint(value: u64) -> Token {
    Token::Uint(U256::from(value))
}

pub fn round_tokens(start_time: u64, end_time: u64, prize_pool: u64, distributed: bool, verifiers: u64) -> Vec<Token> {
    vec![
        Token::Tuple(vec![
            uint(start_time),
            uint(end_time),
            uint(prize_pool),
            Token::Bool(distributed),
        ]),
        uint(verifiers),
    ]
}

pub fn score_token(player: Address, score: u64, block_number: u64, verified: bool) -> Token {
    Token::Tuple(vec![
        Token::Address(player),
        uint(score),
        uint(block_number),
        Token::Bool(verified),
        uint(10_000_000_000_000_000),
        Token::FixedBytes(H256::repeat_byte(score as u8).as_bytes().to_vec()),
        Token::Address(if verified { OWNER } else { Address::zero() }),
    ])
}

pub fn scores_tokens(scores: Vec<Token>) -> Vec<Token> {
    vec![Token::Array(scores)]
}
