//! Tokio runtime for the binary.
//!
//! Commands may leave a blocking terminal read behind (a checkout prompt
//! that timed out is still parked in `read_line`). Dropping a runtime waits
//! for every blocking task, so the command's runtime is shut down in the
//! background instead.

use std::future::Future;
use std::io;

use tokio::runtime::{Builder, Runtime};

/// Multi-threaded runtime with IO and timers enabled.
///
/// # Errors
///
/// Returns the underlying IO error when worker threads cannot be started.
pub fn build() -> io::Result<Runtime> {
    Builder::new_multi_thread().enable_all().build()
}

/// Drive `future` to completion, then shut `runtime` down without waiting
/// for blocking tasks that are still running.
pub fn block_on_detached<F: Future>(runtime: Runtime, future: F) -> F::Output {
    let output = runtime.block_on(future);
    runtime.shutdown_background();
    output
}
