//   Copyright 2026 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

//! One function per application operation, each mapped to exactly one contract call.
//!
//! Failures are logged and returned unchanged. Nothing here retries or touches the stores.

mod read;
mod verification_batch;
mod write;

pub use read::ReadActions;
pub use verification_batch::VerificationBatch;
pub use write::WriteActions;

use ethers::providers::Middleware;
use log::error;

use crate::error::ActionError;

trait LogFailure<T, M: Middleware + 'static> {
    fn log_failure(self, action: &str) -> Result<T, ActionError<M>>;
}

impl<T, E, M> LogFailure<T, M> for Result<T, E>
where
    E: Into<ActionError<M>>,
    M: Middleware + 'static,
{
    fn log_failure(self, action: &str) -> Result<T, ActionError<M>> {
        self.map_err(|err| {
            let err = err.into();
            error!("Error {action}: {err}");
            err
        })
    }
}
