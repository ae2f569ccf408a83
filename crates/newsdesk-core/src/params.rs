//! Parameter structures for newsroom operations.
//!
//! Shared, framework-free types passed between interface layers (CLI today)
//! and the core. The CLI defines clap wrappers that convert into these, so
//! the core never depends on argument-parsing concerns.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::{NewsroomError, Result};
use crate::models::ItemStatus;

/// Platform sentinel for the read-only aggregate view across platforms.
///
/// Accepted by plan reads; every mutating operation rejects it.
pub const ALL_PLATFORMS: &str = "all";

/// The (date, platform) pair identifying one plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanKey {
    pub date: Date,
    pub platform: String,
}

impl PlanKey {
    pub fn new(date: Date, platform: impl Into<String>) -> Self {
        Self {
            date,
            platform: platform.into(),
        }
    }

    /// True when this key addresses the aggregate view rather than one
    /// concrete platform.
    pub fn is_aggregate(&self) -> bool {
        self.platform.eq_ignore_ascii_case(ALL_PLATFORMS)
    }

    /// Checks the key is usable for reads: a platform must be resolved
    /// (the aggregate sentinel counts as resolved).
    pub fn validate(&self) -> Result<()> {
        if self.platform.trim().is_empty() {
            return Err(NewsroomError::validation("platform", "must not be empty"));
        }
        Ok(())
    }

    /// Checks the key is usable for mutating operations, which additionally
    /// require one concrete platform.
    pub fn validate_for_mutation(&self) -> Result<()> {
        self.validate()?;
        if self.is_aggregate() {
            return Err(NewsroomError::validation(
                "platform",
                "bulk and item mutations need a concrete platform, not 'all'",
            ));
        }
        Ok(())
    }
}

/// Parameters for a direct status transition on one item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetStatus {
    /// Persisted id of the item to transition
    pub id: String,
    /// Target state; the server is the authority on legality
    pub status: ItemStatus,
}

impl SetStatus {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(NewsroomError::validation(
                "id",
                "item has no persisted id yet",
            ));
        }
        Ok(())
    }
}

/// Parameters for the server-defined previous-state reversal.
///
/// Only the id travels; the predecessor state is the server's decision and
/// is never computed client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UndoItem {
    pub id: String,
}

impl UndoItem {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(NewsroomError::validation(
                "id",
                "item has no persisted id yet",
            ));
        }
        Ok(())
    }
}

/// Parameters for a bulk CSV import into one plan.
#[derive(Debug, Clone)]
pub struct ImportCsv {
    /// Local file to upload; parsing and merge-by-id happen server-side
    pub path: std::path::PathBuf,
}

/// The two real modes of the run pipeline.
///
/// The wire contract keeps two independent booleans (`dry_run`, `confirm`);
/// modelling the operation as two variants makes the unobserved
/// `dry_run && confirm` combination unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Compute candidates without changing any item
    Preview,
    /// Transition every candidate from approved to sent
    Publish,
}

impl RunMode {
    /// Maps the mode onto the wire flag pair `(dry_run, confirm)`.
    pub fn wire_flags(&self) -> (bool, bool) {
        match self {
            RunMode::Preview => (true, false),
            RunMode::Publish => (false, true),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RunMode::Preview => "dry-run",
            RunMode::Publish => "publish",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(platform: &str) -> PlanKey {
        PlanKey::new(Date::constant(2024, 5, 1), platform)
    }

    #[test]
    fn aggregate_key_reads_but_does_not_mutate() {
        let k = key("all");
        assert!(k.validate().is_ok());
        assert!(k.validate_for_mutation().is_err());
    }

    #[test]
    fn empty_platform_is_rejected() {
        assert!(key("  ").validate().is_err());
    }

    #[test]
    fn concrete_key_mutates() {
        assert!(key("telegram").validate_for_mutation().is_ok());
    }

    #[test]
    fn blank_item_id_is_rejected() {
        let params = SetStatus {
            id: " ".to_string(),
            status: ItemStatus::Approved,
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn run_modes_map_to_disjoint_flags() {
        assert_eq!(RunMode::Preview.wire_flags(), (true, false));
        assert_eq!(RunMode::Publish.wire_flags(), (false, true));
    }
}
