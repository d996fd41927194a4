#![warn(
    missing_copy_implementations,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    trivial_casts,
    unused_qualifications
)]

//! In-memory inbox engine behind a webhook-driven email dashboard demo.
//!
//! The [`InboxStore`] owns the ordered email collection and the current
//! selection; the [`feed`] module drives simulated provider deliveries into
//! it on a timer; [`Inbox`] ties both to a caller supplied [`Notifier`].
//! Rendering is left entirely to the embedding application.

mod email;
mod events;
pub mod feed;
mod inbox;
mod sample;
mod stats;
pub mod store;
mod traits;
pub mod webhook;

pub use email::*;
pub use events::*;
pub use inbox::*;
pub use sample::*;
pub use stats::*;
pub use store::InboxStore;
pub use traits::*;
