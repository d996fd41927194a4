use crate::email::EmailDraft;
use crate::events::Event;
use crate::sample::DraftSource;
use crate::store::InboxStore;
use crate::traits::Notifier;
use crossbeam_channel::{select, tick, Receiver, Sender};
use parking_lot::Mutex;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;
use tracing::debug;

/// Commands accepted by the feed worker.
pub(super) enum Command {
    Exit,
}

/// Ingest `draft` through the shared store and notify the new arrival.
///
/// Every ingestion, timer-driven or manual, goes through here so the timer
/// never bypasses the store's mutual exclusion.
pub(crate) fn ingest_inplace(
    store: &Mutex<InboxStore>,
    notifier: &dyn Notifier,
    draft: EmailDraft,
) -> crate::email::Email {
    let email = store.lock().ingest(draft);
    notifier.notify(Event::NewEmail {
        id: email.id(),
        subject: email.subject().to_string(),
        category: email.category(),
    });
    email
}

pub(super) struct Worker {
    store: Arc<Mutex<InboxStore>>,
    notifier: Arc<dyn Notifier>,
    source: Arc<dyn DraftSource>,
    interval: Duration,
    receiver: Receiver<Command>,
}

impl Worker {
    pub(super) fn spawn(
        store: Arc<Mutex<InboxStore>>,
        notifier: Arc<dyn Notifier>,
        source: Arc<dyn DraftSource>,
        interval: Duration,
    ) -> std::io::Result<(JoinHandle<()>, Sender<Command>)> {
        let (sender, receiver) = crossbeam_channel::unbounded();
        let worker = Self {
            store,
            notifier,
            source,
            interval,
            receiver,
        };

        let handle = std::thread::Builder::new()
            .name("inbox-feed-worker".to_string())
            .spawn(move || worker.run())?;

        Ok((handle, sender))
    }

    fn run(self) {
        let ticker = tick(self.interval);
        loop {
            select! {
                recv(ticker) -> _ => {
                    let draft = self.source.next_draft();
                    ingest_inplace(&self.store, self.notifier.as_ref(), draft);
                }
                recv(self.receiver) -> command => {
                    match command {
                        Ok(Command::Exit) => {
                            debug!("Exit requested");
                            break;
                        }
                        Err(_) => {
                            debug!("Command channel closed, exiting loop");
                            break;
                        }
                    }
                }
            }
        }
    }
}
