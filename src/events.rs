//! Transient events surfaced to the embedding application.

use crate::email::{Category, EmailId};

/// User triggered actions that acknowledge without changing inbox state.
///
/// The demo surfaces these as a confirmation message only; no archive or tag
/// transition exists on the store.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum EmailAction {
    Forward,
    Archive,
    Tag,
}

impl EmailAction {
    /// Past-tense label for confirmation messages.
    #[must_use]
    pub fn past_tense(self) -> &'static str {
        match self {
            EmailAction::Forward => "forwarded",
            EmailAction::Archive => "archived",
            EmailAction::Tag => "tagged",
        }
    }
}

/// Possible events. Delivered through the [`Notifier`](crate::Notifier) hook;
/// the embedding application decides how (or whether) to display them.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Event {
    /// A new email was admitted into the inbox.
    NewEmail {
        id: EmailId,
        subject: String,
        category: Category,
    },
    /// The simulated provider feed started delivering.
    Connected,
    /// The feed was stopped; no further deliveries occur.
    Disconnected,
    /// A reply was sent for the email with `id`.
    ReplySent(EmailId),
    /// An action was acknowledged for the email with `id`.
    Action(EmailId, EmailAction),
    /// The webhook configuration was validated and serialized.
    ConfigSaved,
}
