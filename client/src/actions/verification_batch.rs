//   Copyright 2026 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

use ethers::types::U256;

/// Verdicts on submitted scores, sent together in one `verifyScoresBatch` call.
///
/// Score indexes refer to positions in the round's score list as returned by `getGameScores`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationBatch {
    verdicts: Vec<(U256, bool)>,
}

impl VerificationBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn approve(self, score_index: u64) -> Self {
        self.add_verdict(score_index, true)
    }

    pub fn reject(self, score_index: u64) -> Self {
        self.add_verdict(score_index, false)
    }

    pub fn add_verdict(mut self, score_index: u64, valid: bool) -> Self {
        self.verdicts.push((U256::from(score_index), valid));
        self
    }

    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }

    pub fn score_indexes(&self) -> Vec<U256> {
        self.verdicts.iter().map(|(index, _)| *index).collect()
    }

    pub fn validations(&self) -> Vec<bool> {
        self.verdicts.iter().map(|(_, valid)| *valid).collect()
    }
}

impl FromIterator<(u64, bool)> for VerificationBatch {
    fn from_iter<I: IntoIterator<Item = (u64, bool)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |batch, (index, valid)| batch.add_verdict(index, valid))
    }
}
