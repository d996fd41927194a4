//! Aggregate counts derived from the email collection.

use crate::email::{Category, Email};
use chrono::Timelike;
use serde::Serialize;

/// Per-category email tallies.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Serialize)]
pub struct CategoryCounts {
    pub support: usize,
    pub sales: usize,
    pub marketing: usize,
    pub other: usize,
}

impl CategoryCounts {
    #[must_use]
    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Support => self.support,
            Category::Sales => self.sales,
            Category::Marketing => self.marketing,
            Category::Other => self.other,
        }
    }

    fn bump(&mut self, category: Category) {
        match category {
            Category::Support => self.support += 1,
            Category::Sales => self.sales += 1,
            Category::Marketing => self.marketing += 1,
            Category::Other => self.other += 1,
        }
    }
}

/// Snapshot of inbox statistics. All counts are zero on an empty inbox.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Serialize)]
pub struct Stats {
    /// Total number of emails.
    pub total: usize,
    /// Emails never selected for viewing.
    pub unread: usize,
    pub by_category: CategoryCounts,
}

impl Stats {
    pub(crate) fn collect<'a>(emails: impl Iterator<Item = &'a Email>) -> Self {
        let mut stats = Stats::default();
        for email in emails {
            stats.total += 1;
            if !email.is_read() {
                stats.unread += 1;
            }
            stats.by_category.bump(email.category());
        }
        stats
    }
}

/// Bucket emails by the UTC hour of their arrival timestamp.
///
/// Feeds the 24-hour activity chart of the rendering layer.
#[must_use]
pub fn hourly_activity<'a>(emails: impl Iterator<Item = &'a Email>) -> [usize; 24] {
    let mut buckets = [0usize; 24];
    for email in emails {
        buckets[email.timestamp().hour() as usize] += 1;
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::EmailDraft;
    use crate::store::InboxStore;

    fn draft(category: Category) -> EmailDraft {
        EmailDraft {
            from: "newsletter@partner.com".to_string(),
            to: "marketing@yourapp.com".to_string(),
            subject: "Partnership opportunity".to_string(),
            body: "We'd love to explore a marketing partnership.".to_string(),
            category,
            attachments: Vec::new(),
        }
    }

    #[test]
    fn empty_inbox_yields_zeroed_stats() {
        let store = InboxStore::new();
        assert_eq!(store.stats(), Stats::default());
    }

    #[test]
    fn total_always_matches_len() {
        let mut store = InboxStore::new();
        for i in 0..5 {
            store.ingest(draft(Category::ALL[i % Category::ALL.len()]));
            assert_eq!(store.stats().total, store.len());
        }
    }

    #[test]
    fn unread_counts_only_unread() {
        let mut store = InboxStore::new();
        let ids: Vec<_> = (0..4)
            .map(|_| store.ingest(draft(Category::Other)).id())
            .collect();
        assert_eq!(store.stats().unread, 4);

        for id in ids {
            store.select(id).unwrap();
        }
        assert_eq!(store.stats().unread, 0);
    }

    #[test]
    fn categories_are_tallied_independently() {
        let mut store = InboxStore::new();
        store.ingest(draft(Category::Support));
        store.ingest(draft(Category::Support));
        store.ingest(draft(Category::Marketing));

        let counts = store.stats().by_category;
        assert_eq!(counts.get(Category::Support), 2);
        assert_eq!(counts.get(Category::Marketing), 1);
        assert_eq!(counts.get(Category::Sales), 0);
        assert_eq!(counts.get(Category::Other), 0);
    }

    #[test]
    fn hourly_buckets_sum_to_total() {
        let mut store = InboxStore::new();
        for _ in 0..7 {
            store.ingest(draft(Category::Sales));
        }

        let buckets = hourly_activity(store.emails());
        assert_eq!(buckets.iter().sum::<usize>(), 7);
    }
}
