//! Canned draft source mimicking inbound provider deliveries. Demo
//! scaffolding; any real draft producer can replace it at the
//! [`DraftSource`] seam without touching the store.

use crate::email::{Category, EmailDraft};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of drafts for the arrival feed.
pub trait DraftSource: Send + Sync {
    /// Produce the next draft to be ingested.
    fn next_draft(&self) -> EmailDraft;
}

/// Picks uniformly at random from a fixed set of sample drafts.
pub struct SampleDrafts {
    rng: Mutex<StdRng>,
}

impl SampleDrafts {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }
}

impl Default for SampleDrafts {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftSource for SampleDrafts {
    fn next_draft(&self) -> EmailDraft {
        let mut samples = sample_drafts();
        let index = self.rng.lock().gen_range(0..samples.len());
        samples.swap_remove(index)
    }
}

fn sample_drafts() -> Vec<EmailDraft> {
    vec![
        EmailDraft {
            from: "customer@example.com".to_string(),
            to: "support@yourapp.com".to_string(),
            subject: "Help with order #12345".to_string(),
            body: "I need assistance with my recent order. The tracking shows it's delayed."
                .to_string(),
            category: Category::Support,
            attachments: vec!["receipt.pdf".to_string()],
        },
        EmailDraft {
            from: "lead@company.com".to_string(),
            to: "sales@yourapp.com".to_string(),
            subject: "Interested in enterprise plan".to_string(),
            body: "We're looking for a solution for our 500+ employee company. \
                   Can we schedule a demo?"
                .to_string(),
            category: Category::Sales,
            attachments: Vec::new(),
        },
        EmailDraft {
            from: "newsletter@partner.com".to_string(),
            to: "marketing@yourapp.com".to_string(),
            subject: "Partnership opportunity".to_string(),
            body: "We'd love to explore a marketing partnership with your team.".to_string(),
            category: Category::Marketing,
            attachments: Vec::new(),
        },
    ]
}
