//! Status enumeration for plan items.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of item statuses.
///
/// Items move through `draft -> approved -> sent`; the wire format is the
/// lowercase name. Any other string coming from a data source is rejected
/// rather than coerced.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    /// Item is a candidate that has not been reviewed yet
    #[default]
    Draft,

    /// Item has been cleared for publication
    Approved,

    /// Item has been published; `sent_at` records when
    Sent,
}

impl FromStr for ItemStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(ItemStatus::Draft),
            "approved" => Ok(ItemStatus::Approved),
            "sent" => Ok(ItemStatus::Sent),
            _ => Err(format!("Invalid item status: {s}")),
        }
    }
}

impl ItemStatus {
    /// Wire representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Draft => "draft",
            ItemStatus::Approved => "approved",
            ItemStatus::Sent => "sent",
        }
    }

    /// The single-step advance used by the cycle action:
    /// `draft -> approved -> sent -> draft`.
    ///
    /// Three applications return the original status.
    pub fn next(&self) -> ItemStatus {
        match self {
            ItemStatus::Draft => ItemStatus::Approved,
            ItemStatus::Approved => ItemStatus::Sent,
            ItemStatus::Sent => ItemStatus::Draft,
        }
    }

    /// Status with a consistent icon for display contexts.
    pub fn with_icon(&self) -> &'static str {
        match self {
            ItemStatus::Draft => "○ draft",
            ItemStatus::Approved => "✓ approved",
            ItemStatus::Sent => "➤ sent",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_has_order_three() {
        for start in [ItemStatus::Draft, ItemStatus::Approved, ItemStatus::Sent] {
            assert_eq!(start.next().next().next(), start);
        }
    }

    #[test]
    fn parses_wire_names() {
        assert_eq!("draft".parse::<ItemStatus>().unwrap(), ItemStatus::Draft);
        assert_eq!("APPROVED".parse::<ItemStatus>().unwrap(), ItemStatus::Approved);
        assert_eq!("sent".parse::<ItemStatus>().unwrap(), ItemStatus::Sent);
        assert!("queued".parse::<ItemStatus>().is_err());
    }
}
