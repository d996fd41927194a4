//! Single source of truth for the email collection and the current selection.

use crate::email::{Email, EmailDraft, EmailId};
use crate::stats::Stats;
use std::collections::VecDeque;
use tracing::debug;

/// Errors returned by inbox operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No email with id '{0}'")]
    NotFound(EmailId),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Ordered collection of emails, newest first, plus the currently viewed one.
///
/// All operations are synchronous and mutate through `&mut self`; callers
/// sharing the store across threads must wrap it in a mutex so that every
/// operation stays a critical section over the whole collection.
#[derive(Debug, Default)]
pub struct InboxStore {
    emails: VecDeque<Email>,
    selected: Option<EmailId>,
}

impl InboxStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit `draft` into the inbox.
    ///
    /// Assigns a fresh id, stamps the current instant and prepends, so the
    /// newest email always enumerates first. Notifying observers is the
    /// caller's responsibility.
    pub fn ingest(&mut self, draft: EmailDraft) -> Email {
        let email = Email::from_draft(draft);
        debug!(
            "Ingested email id={} category={}",
            email.id(),
            email.category()
        );
        self.emails.push_front(email);
        self.emails[0].clone()
    }

    /// Select the email with `id` for viewing, marking it read.
    ///
    /// Selecting a different email implicitly deselects the previous one;
    /// repeated selection of the same email is a no-op beyond re-setting the
    /// selection. The read flag never transitions back to unread.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no email with `id` exists. The store is
    /// left untouched in that case.
    pub fn select(&mut self, id: EmailId) -> Result<Email> {
        let Some(email) = self.emails.iter_mut().find(|e| e.id() == id) else {
            return Err(Error::NotFound(id));
        };

        email.mark_read();
        self.selected = Some(id);
        Ok(email.clone())
    }

    /// Clear the current selection. No-op if nothing is selected.
    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// The currently selected email, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&Email> {
        let id = self.selected?;
        self.emails.iter().find(|e| e.id() == id)
    }

    /// Iterate over all emails, newest first.
    pub fn emails(&self) -> impl Iterator<Item = &Email> {
        self.emails.iter()
    }

    /// Number of emails in the inbox.
    #[must_use]
    pub fn len(&self) -> usize {
        self.emails.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }

    /// Compute aggregate statistics over the current collection.
    #[must_use]
    pub fn stats(&self) -> Stats {
        Stats::collect(self.emails.iter())
    }
}
