//! One-shot payload hand-off
//!
//! The fetch layer owns transport; this module only carries its single
//! outcome to whoever is waiting for the data. [`pending_dataset`] returns a
//! sender for the fetch side and a future for the consuming side. The sender
//! is consumed on use, so at most one payload is ever delivered.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use datasieve_core::{Dataset, DatasetConfig};
use tokio::sync::oneshot;

use crate::error::{Error, Result};

type Outcome = std::result::Result<String, String>;

/// Fetch-side half of the hand-off
#[derive(Debug)]
pub struct PayloadSender {
    tx: oneshot::Sender<Outcome>,
}

/// Consumer-side half; resolves to the parsed dataset
#[derive(Debug)]
pub struct PendingDataset {
    rx: oneshot::Receiver<Outcome>,
    config: DatasetConfig,
}

/// Create a linked sender / pending-dataset pair
///
/// # Examples
/// ```
/// # tokio_test::block_on(async {
/// use datasieve::{pending_dataset, DatasetConfig};
///
/// let (sender, pending) = pending_dataset(DatasetConfig::default());
/// sender.deliver(r#"{"value": [{"ProductName": "Chai"}]}"#);
///
/// let dataset = pending.await?;
/// assert_eq!(dataset.len(), 1);
/// # Ok::<(), datasieve::Error>(())
/// # }).unwrap();
/// ```
#[must_use]
pub fn pending_dataset(config: DatasetConfig) -> (PayloadSender, PendingDataset) {
    let (tx, rx) = oneshot::channel();
    (PayloadSender { tx }, PendingDataset { rx, config })
}

impl PayloadSender {
    /// Hand over the raw payload text
    pub fn deliver(self, text: impl Into<String>) {
        if self.tx.send(Ok(text.into())).is_err() {
            log::debug!("Payload delivered after the pending dataset was dropped");
        }
    }

    /// Report that the fetch failed
    pub fn fail(self, reason: impl Into<String>) {
        let reason = reason.into();
        log::warn!("Fetch failed: {reason}");
        if self.tx.send(Err(reason)).is_err() {
            log::debug!("Fetch failure reported after the pending dataset was dropped");
        }
    }

    /// True once the consuming side has gone away
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl Future for PendingDataset {
    type Output = Result<Dataset>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let outcome = match Pin::new(&mut self.rx).poll(cx) {
            Poll::Pending => return Poll::Pending,
            Poll::Ready(outcome) => outcome,
        };

        Poll::Ready(match outcome {
            Ok(Ok(text)) => {
                let dataset = Dataset::parse(&text, &self.config).map_err(Error::from);
                match &dataset {
                    Ok(dataset) if dataset.is_empty() => log::info!("No data available"),
                    Ok(dataset) => log::debug!(
                        "Loaded {} records with {} properties",
                        dataset.len(),
                        dataset.properties().len()
                    ),
                    Err(error) => log::error!("Failed to load payload: {error}"),
                }
                dataset
            }
            Ok(Err(reason)) => Err(Error::Transport(reason)),
            Err(_) => Err(Error::Abandoned),
        })
    }
}
