//! Traits expected to be implemented by the embedding application.

use crate::events::Event;
#[cfg(test)]
use mockall::automock;

/// Called whenever the inbox produces a user visible event.
#[cfg_attr(test, automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, event: Event);
}
