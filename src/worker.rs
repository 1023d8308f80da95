//! Computation workers.
//!
//! Primality checks are CPU-bound and can run for a long time, and the
//! recursive variant can overflow its stack. Each check therefore runs on a
//! fresh OS thread rather than on the async runtime. The answer is handed
//! back over a oneshot channel; a worker that dies before answering drops the
//! sender, which surfaces as [`Error::WorkerLost`].
//!
//! Stack overflow is not a panic. The standard library reports the
//! overflowing thread by name and aborts the whole process, so no error is
//! ever delivered for it.

use num_bigint::BigUint;
use std::thread;
use tokio::sync::oneshot;

use crate::error::{Error, Result};
use crate::primality::AlgorithmVariant;

/// Run `variant` against `number` on a dedicated thread.
///
/// `stack_size` overrides the thread's stack size when set.
pub async fn run_on_worker(
    variant: AlgorithmVariant,
    number: BigUint,
    stack_size: Option<usize>,
) -> Result<bool> {
    // ---
    let (tx, rx) = oneshot::channel();
    let strategy = variant.strategy();

    let mut builder = thread::Builder::new().name(format!("primes-{}", variant.version()));
    if let Some(bytes) = stack_size {
        builder = builder.stack_size(bytes);
    }

    builder
        .spawn(move || {
            // Receiver may be gone if the client disconnected; nothing to do.
            let _ = tx.send(strategy(&number));
        })
        .map_err(|e| Error::WorkerLost(format!("spawn failed: {e}")))?;

    rx.await
        .map_err(|_| Error::WorkerLost(format!("{variant} worker exited without an answer")))
}
