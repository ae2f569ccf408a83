//! Plan model definition and related functionality.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{Item, ItemStatus};

/// Per-status item tally for one plan.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusCounts {
    #[serde(default)]
    pub draft: u32,
    #[serde(default)]
    pub approved: u32,
    #[serde(default)]
    pub sent: u32,
}

impl StatusCounts {
    /// Recomputes counts from an item list.
    ///
    /// The server also ships counts with every plan; those are trusted for
    /// display only. Anything that drives a control decision recomputes.
    pub fn tally(items: &[Item]) -> Self {
        let mut counts = Self::default();
        for item in items {
            match item.status {
                ItemStatus::Draft => counts.draft += 1,
                ItemStatus::Approved => counts.approved += 1,
                ItemStatus::Sent => counts.sent += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> u32 {
        self.draft + self.approved + self.sent
    }
}

/// The unit of work: all items for one (date, platform) pair.
///
/// A plan is created server-side on first access; the client only loads it,
/// mutates it through explicit operations, and reloads it wholesale. The item
/// order is server-defined display order and carries no meaning here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Calendar date the plan belongs to
    pub date: Date,

    /// Platform this view was filtered to (may be the aggregate sentinel)
    pub platform: String,

    /// Server-computed status tally, display-only
    #[serde(default)]
    pub counts: StatusCounts,

    /// Items in server-defined order
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Plan {
    /// Looks up an item by its persisted id.
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|it| it.persisted_id() == Some(id))
    }

    /// Recomputed tally of the items actually present.
    pub fn recount(&self) -> StatusCounts {
        StatusCounts::tally(&self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan_json() -> &'static str {
        r#"{
            "date": "2024-05-01",
            "platform": "telegram",
            "counts": {"draft": 1, "approved": 1, "sent": 0},
            "items": [
                {"id": "t1", "platform": "telegram", "title": "A", "status": "draft"},
                {"id": "t2", "platform": "telegram", "title": "B", "status": "approved"}
            ]
        }"#
    }

    #[test]
    fn parses_server_shape() {
        let plan: Plan = serde_json::from_str(plan_json()).unwrap();
        assert_eq!(plan.date.to_string(), "2024-05-01");
        assert_eq!(plan.items.len(), 2);
        assert_eq!(plan.counts.total(), 2);
    }

    #[test]
    fn recount_matches_items_not_header() {
        let mut plan: Plan = serde_json::from_str(plan_json()).unwrap();
        // a stale header must not leak into control decisions
        plan.counts.sent = 9;
        let counts = plan.recount();
        assert_eq!(counts.draft, 1);
        assert_eq!(counts.approved, 1);
        assert_eq!(counts.sent, 0);
    }

    #[test]
    fn item_lookup_uses_persisted_ids() {
        let plan: Plan = serde_json::from_str(plan_json()).unwrap();
        assert!(plan.item("t2").is_some());
        assert!(plan.item("missing").is_none());
    }
}
