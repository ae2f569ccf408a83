//! Item model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::ItemStatus;

/// A single candidate post within a plan.
///
/// All text fields are display-only; the core never interprets them. The id
/// is assigned server-side — an item without one has not been persisted yet
/// and cannot be the target of a status transition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    /// Stable unique key within a (date, platform) plan; absent until the
    /// server has persisted the item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Destination platform, set at creation and immutable thereafter
    #[serde(default)]
    pub platform: String,

    /// Optional grouping/reference key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_id: Option<String>,

    /// Headline text
    #[serde(default)]
    pub title: String,

    /// Body text
    #[serde(default)]
    pub snippet: String,

    /// Hashtag line appended on publication
    #[serde(default)]
    pub hashtags: String,

    /// Current workflow status (missing on the wire means draft)
    #[serde(default)]
    pub status: ItemStatus,

    /// Set by the server when the item was published
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent_at: Option<Timestamp>,
}

impl Item {
    /// The persisted id, treating an empty string the same as absent.
    pub fn persisted_id(&self) -> Option<&str> {
        match self.id.as_deref() {
            Some(id) if !id.trim().is_empty() => Some(id),
            _ => None,
        }
    }

    /// Checks the `sent_at` invariant: present exactly when status is sent.
    pub fn status_is_consistent(&self) -> bool {
        (self.status == ItemStatus::Sent) == self.sent_at.is_some()
    }
}
