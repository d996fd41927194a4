//! Main entry point tying the store, the notifier and the arrival feed
//! together for the embedding application.

use crate::email::{Email, EmailDraft, EmailId};
use crate::events::{EmailAction, Event};
use crate::feed::{Feed, FeedBuilder, DEFAULT_INTERVAL};
use crate::sample::{DraftSource, SampleDrafts};
use crate::stats::{hourly_activity, Stats};
use crate::store::InboxStore;
use crate::traits::Notifier;
use crate::webhook::WebhookConfig;
use crate::{feed, store, webhook};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, Level};

pub struct InboxBuilder {
    notifier: Arc<dyn Notifier>,
    source: Arc<dyn DraftSource>,
    interval: Duration,
}

impl InboxBuilder {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            notifier,
            source: Arc::new(SampleDrafts::new()),
            interval: DEFAULT_INTERVAL,
        }
    }

    /// Controls how often the feed delivers while connected.
    #[must_use]
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Replace the default sample source with a custom draft producer.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn DraftSource>) -> Self {
        self.source = source;
        self
    }

    #[must_use]
    pub fn build(self) -> Inbox {
        Inbox {
            store: Arc::new(Mutex::new(InboxStore::new())),
            notifier: self.notifier,
            source: self.source,
            interval: self.interval,
            feed: None,
        }
    }
}

/// Application facade over the inbox.
///
/// Owns the shared store, the notifier hook and the arrival feed control.
/// All read projections return snapshots so the rendering layer never holds
/// the store lock.
pub struct Inbox {
    store: Arc<Mutex<InboxStore>>,
    notifier: Arc<dyn Notifier>,
    source: Arc<dyn DraftSource>,
    interval: Duration,
    feed: Option<Feed>,
}

impl Inbox {
    /// Start the simulated provider feed. No-op when already connected.
    ///
    /// # Errors
    ///
    /// Returns error if the feed worker could not be started.
    #[tracing::instrument(level = Level::DEBUG, skip(self))]
    pub fn connect(&mut self) -> feed::Result<()> {
        if self.feed.is_some() {
            debug!("Already connected");
            return Ok(());
        }

        let feed = FeedBuilder::new(self.notifier.clone())
            .interval(self.interval)
            .source(self.source.clone())
            .start(self.store.clone())?;
        self.feed = Some(feed);
        self.notifier.notify(Event::Connected);
        Ok(())
    }

    /// Stop the feed and wait until no further ingestion can occur.
    /// No-op when not connected.
    ///
    /// # Errors
    ///
    /// Returns error if the feed worker did not shut down cleanly.
    #[tracing::instrument(level = Level::DEBUG, skip(self))]
    pub fn disconnect(&mut self) -> feed::Result<()> {
        let Some(feed) = self.feed.take() else {
            debug!("Not connected");
            return Ok(());
        };

        feed.stop()?;
        self.notifier.notify(Event::Disconnected);
        Ok(())
    }

    /// Whether the feed is currently delivering.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.feed.is_some()
    }

    /// Admit `draft` manually, through the same path the feed uses.
    pub fn ingest(&self, draft: EmailDraft) -> Email {
        feed::ingest_inplace(&self.store, self.notifier.as_ref(), draft)
    }

    /// Select the email with `id` for viewing, marking it read.
    ///
    /// # Errors
    ///
    /// Returns [`store::Error::NotFound`] if no email with `id` exists.
    #[tracing::instrument(level = Level::DEBUG, skip(self))]
    pub fn select(&self, id: EmailId) -> store::Result<Email> {
        self.store.lock().select(id)
    }

    /// Clear the current selection.
    pub fn deselect(&self) {
        self.store.lock().deselect();
    }

    /// The currently selected email, if any.
    #[must_use]
    pub fn selected(&self) -> Option<Email> {
        self.store.lock().selected().cloned()
    }

    /// Snapshot of all emails, newest first.
    #[must_use]
    pub fn emails(&self) -> Vec<Email> {
        self.store.lock().emails().cloned().collect()
    }

    /// Aggregate statistics over the current collection.
    #[must_use]
    pub fn stats(&self) -> Stats {
        self.store.lock().stats()
    }

    /// Emails bucketed by UTC hour of arrival, for the activity chart.
    #[must_use]
    pub fn hourly_activity(&self) -> [usize; 24] {
        hourly_activity(self.store.lock().emails())
    }

    /// Send a reply to the email with `id`.
    ///
    /// Empty or whitespace-only `text` is ignored without an event. There is
    /// no transport behind this; a [`Event::ReplySent`] notification is the
    /// entire effect.
    ///
    /// # Errors
    ///
    /// Returns [`store::Error::NotFound`] if no email with `id` exists.
    pub fn reply(&self, id: EmailId, text: &str) -> store::Result<()> {
        self.ensure_exists(id)?;
        if text.trim().is_empty() {
            return Ok(());
        }

        self.notifier.notify(Event::ReplySent(id));
        Ok(())
    }

    /// Acknowledge `action` for the email with `id`.
    ///
    /// Forward, archive and tag do not change inbox state; the
    /// [`Event::Action`] notification is the entire effect.
    ///
    /// # Errors
    ///
    /// Returns [`store::Error::NotFound`] if no email with `id` exists.
    pub fn apply_action(&self, id: EmailId, action: EmailAction) -> store::Result<()> {
        self.ensure_exists(id)?;
        self.notifier.notify(Event::Action(id, action));
        Ok(())
    }

    /// Validate and serialize the webhook configuration.
    ///
    /// The resulting JSON is handed back to the caller; no storage or HTTP
    /// request is performed beyond the [`Event::ConfigSaved`] notification.
    ///
    /// # Errors
    ///
    /// Returns error if serialization failed.
    pub fn save_webhook_config(&self, config: &WebhookConfig) -> webhook::Result<String> {
        let data = config.store()?;
        self.notifier.notify(Event::ConfigSaved);
        Ok(data)
    }

    fn ensure_exists(&self, id: EmailId) -> store::Result<()> {
        let store = self.store.lock();
        if store.emails().any(|e| e.id() == id) {
            Ok(())
        } else {
            Err(store::Error::NotFound(id))
        }
    }

    /// Access the shared store, e.g. to hand it to a custom driver.
    #[must_use]
    pub fn store(&self) -> Arc<Mutex<InboxStore>> {
        self.store.clone()
    }
}

impl Drop for Inbox {
    fn drop(&mut self) {
        // Dropping the feed handle closes its command channel and the worker
        // exits on its own; nothing to join here.
        self.feed.take();
    }
}
