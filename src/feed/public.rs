use crate::feed::worker::{Command, Worker};
use crate::sample::{DraftSource, SampleDrafts};
use crate::store::InboxStore;
use crate::traits::Notifier;
use anyhow::anyhow;
use crossbeam_channel::Sender;
use parking_lot::Mutex;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error};

/// Errors that may occur while controlling the feed.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to start feed worker thread: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("Unknown error occurred: {0}")]
    Unknown(
        #[from]
        #[source]
        anyhow::Error,
    ),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Interval between simulated deliveries unless overridden.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(10);

pub struct FeedBuilder {
    notifier: Arc<dyn Notifier>,
    source: Arc<dyn DraftSource>,
    interval: Duration,
}

impl FeedBuilder {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            notifier,
            source: Arc::new(SampleDrafts::new()),
            interval: DEFAULT_INTERVAL,
        }
    }

    /// Controls how often a draft is pulled from the source.
    #[must_use]
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Replace the default sample source with a custom draft producer.
    #[must_use]
    pub fn source(mut self, source: Arc<dyn DraftSource>) -> Self {
        self.source = source;
        self
    }

    /// Start the background worker delivering into `store`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Spawn`] if the worker thread could not be created.
    pub fn start(self, store: Arc<Mutex<InboxStore>>) -> Result<Feed> {
        let (handle, sender) =
            Worker::spawn(store, self.notifier, self.source, self.interval)
                .map_err(Error::Spawn)?;

        Ok(Feed {
            sender,
            handle: Some(handle),
        })
    }
}

/// Handle to a running arrival feed.
///
/// Dropping the handle closes the command channel, which also terminates the
/// worker; [`Feed::stop`] additionally waits for it, guaranteeing no
/// ingestion after the call returns.
pub struct Feed {
    sender: Sender<Command>,
    handle: Option<JoinHandle<()>>,
}

impl Feed {
    /// Stop the worker and wait for it to exit.
    ///
    /// Any ingest already in flight completes before this returns; no new
    /// ingestion occurs afterwards.
    ///
    /// # Errors
    ///
    /// Returns error if the worker thread panicked.
    pub fn stop(mut self) -> Result<()> {
        debug!("Stopping feed worker");
        // A send failure means the worker already exited; joining is still
        // required to observe a panic.
        let _ = self.sender.send(Command::Exit);

        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                error!("Feed worker thread panicked");
                return Err(Error::Unknown(anyhow!("feed worker thread panicked")));
            }
        }

        Ok(())
    }
}
