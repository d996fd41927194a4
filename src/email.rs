//! Core email data types shared by the store, the feed and the facade.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier assigned to an email when it is admitted into the inbox.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailId(Uuid);

impl EmailId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for EmailId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Category attached to an email by the inbound provider.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Support,
    Sales,
    Marketing,
    Other,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 4] = [
        Category::Support,
        Category::Sales,
        Category::Marketing,
        Category::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Support => "support",
            Category::Sales => "sales",
            Category::Marketing => "marketing",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Email payload prior to id and timestamp assignment.
///
/// Drafts are produced by a [`DraftSource`](crate::DraftSource) or translated
/// from an inbound provider payload. The constructing side is responsible for
/// non-empty `from`/`to`/`subject` values; the store admits drafts as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailDraft {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
    pub category: Category,
    /// Attachment file names. Empty is equivalent to absent.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<String>,
}

/// An email admitted into the inbox.
///
/// Immutable after creation except for the read flag, which flips to true
/// exactly once when the email is first selected and never back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Email {
    id: EmailId,
    from: String,
    to: String,
    subject: String,
    body: String,
    timestamp: DateTime<Utc>,
    category: Category,
    read: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    attachments: Vec<String>,
}

impl Email {
    pub(crate) fn from_draft(draft: EmailDraft) -> Self {
        Self {
            id: EmailId::new(),
            from: draft.from,
            to: draft.to,
            subject: draft.subject,
            body: draft.body,
            timestamp: Utc::now(),
            category: draft.category,
            read: false,
            attachments: draft.attachments,
        }
    }

    #[must_use]
    pub fn id(&self) -> EmailId {
        self.id
    }

    #[must_use]
    pub fn from(&self) -> &str {
        &self.from
    }

    #[must_use]
    pub fn to(&self) -> &str {
        &self.to
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Instant the email was admitted into the inbox.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Whether the email has been viewed at least once.
    #[must_use]
    pub fn is_read(&self) -> bool {
        self.read
    }

    #[must_use]
    pub fn attachments(&self) -> &[String] {
        &self.attachments
    }

    /// Flip the read flag. Idempotent, there is no transition back.
    pub(crate) fn mark_read(&mut self) {
        self.read = true;
    }
}
