//! Interrupt handling and graceful shutdown.

use log::{debug, warn};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Cancels `batch` on Ctrl-C.
///
/// The listener exits quietly once `batch` is cancelled for any other reason.
pub fn spawn_interrupt_handler(batch: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::select! {
            signal = tokio::signal::ctrl_c() => match signal {
                Ok(()) => {
                    warn!("Interrupt received, finishing with the rows classified so far");
                    batch.cancel();
                }
                Err(e) => warn!("Failed to listen for Ctrl-C: {e}"),
            },
            _ = batch.cancelled() => {}
        }
    })
}

/// Stops the background tasks of a batch run.
///
/// Cancels `root`, whose child tokens drive the progress logger and the
/// interrupt listener, then waits for both tasks to finish.
pub async fn shutdown_gracefully(
    root: CancellationToken,
    logging_task: Option<JoinHandle<()>>,
    interrupt_task: Option<JoinHandle<()>>,
) {
    root.cancel();
    for task in [logging_task, interrupt_task].into_iter().flatten() {
        if let Err(e) = task.await {
            warn!("Background task failed: {e}");
        }
    }
    debug!("Background tasks stopped");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_interrupt_handler_exits_when_batch_cancelled() {
        let batch = CancellationToken::new();
        let handle = spawn_interrupt_handler(batch.clone());
        batch.cancel();
        tokio::time::timeout(std::time::Duration::from_secs(1), handle)
            .await
            .expect("listener exits promptly")
            .expect("listener does not panic");
    }

    #[tokio::test]
    async fn test_shutdown_stops_interrupt_listener() {
        let root = CancellationToken::new();
        let interrupt = spawn_interrupt_handler(root.child_token());
        tokio::time::timeout(
            std::time::Duration::from_secs(1),
            shutdown_gracefully(root, None, Some(interrupt)),
        )
        .await
        .expect("shutdown completes");
    }

    #[tokio::test]
    async fn test_shutdown_gracefully_cancels_token() {
        let cancel = CancellationToken::new();
        let child = cancel.child_token();
        let logging = tokio::spawn({
            let child = child.clone();
            async move { child.cancelled().await }
        });
        shutdown_gracefully(cancel, Some(logging), None).await;
        assert!(child.is_cancelled());
    }
}
