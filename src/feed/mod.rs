//! Feed module, background worker that periodically ingests drafts into the
//! inbox, simulating inbound webhook deliveries.
mod public;
mod worker;

pub use public::*;
pub(crate) use worker::ingest_inplace;
