//! Server report shapes surfaced verbatim to the operator.
//!
//! These mirror the remote service responses for the operations in the
//! workflow. Counts are never recomputed client-side — the contract is that
//! the service reports what it did and the client surfaces it.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::StatusCounts;

/// Response of the latest-plan-date query for a platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LatestDate {
    pub date: Date,
    #[serde(default)]
    pub platform: String,
}

/// Result of the bulk draft-to-approved transition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApprovalReport {
    /// How many draft items were promoted
    pub approved: u32,
    #[serde(default)]
    pub platform: String,
}

/// Result of a run invocation, in either mode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunReport {
    #[serde(default)]
    pub dry_run: bool,
    #[serde(default)]
    pub confirm: bool,
    /// Items eligible to be sent (all approved items for the key)
    pub candidates: u32,
    /// Items actually transitioned to sent (always 0 for a dry run)
    pub sent: u32,
    /// Composed message previews, server-truncated
    #[serde(default)]
    pub preview: Vec<String>,
    #[serde(default)]
    pub platform: String,
}

impl RunReport {
    /// A publish that sent fewer items than it found candidates signals a
    /// partial failure and must be surfaced, not silently accepted.
    pub fn is_partial(&self) -> bool {
        self.confirm && self.sent != self.candidates
    }
}

/// Acknowledgement for single-item status and undo operations.
///
/// `changed` counts matched items (0 or 1); a zero means the id did not
/// exist for this key and is escalated to an error by the workflow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChangeAck {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub changed: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ChangeAck {
    pub fn matched(&self) -> bool {
        self.changed > 0
    }
}

/// Result of a CSV import merge, classified server-side by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImportReport {
    /// Rows with no existing id match, appended to the plan
    pub added: u32,
    /// Rows whose id matched an existing item, merged over it
    pub updated: u32,
    /// Items on the platform after the merge
    #[serde(default)]
    pub total: u32,
}

/// Capability probe answer; the only unauthenticated call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthProbe {
    pub enabled: bool,
    /// Name of the header credentials travel in
    #[serde(default)]
    pub header: String,
}

/// Read-only dashboard numbers for one (date, platform) key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanMetrics {
    pub date: Date,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub auth_enabled: bool,
    #[serde(default)]
    pub counts: StatusCounts,
    #[serde(default)]
    pub total_platform_items: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_mismatch_is_partial() {
        let report: RunReport = serde_json::from_str(
            r#"{"dry_run":false,"confirm":true,"candidates":3,"sent":2,"platform":"telegram"}"#,
        )
        .unwrap();
        assert!(report.is_partial());
    }

    #[test]
    fn dry_run_zero_sent_is_not_partial() {
        let report: RunReport = serde_json::from_str(
            r#"{"dry_run":true,"confirm":false,"candidates":3,"sent":0}"#,
        )
        .unwrap();
        assert!(!report.is_partial());
    }

    #[test]
    fn unmatched_ack() {
        let ack: ChangeAck =
            serde_json::from_str(r#"{"id":"zz","changed":0,"status":"approved"}"#).unwrap();
        assert!(!ack.matched());
    }
}
