//! Core library for the newsdesk publishing plan client.
//!
//! This crate is the workflow core behind the `nd` CLI: it owns the status
//! state machine for plan items, the reload-after-every-mutation plan
//! repository, the CSV import reconciliation contract, the dry-run/publish
//! run pipeline, and the request guard that serializes mutating operations
//! against one remote plan.
//!
//! The remote server is reached exclusively through the [`PlanService`]
//! trait; [`HttpPlanService`] is its production implementation. Nothing is
//! ever applied locally before the server confirms it — after any mutation
//! the plan is refetched wholesale, so the local snapshot is always a
//! verbatim copy of server state.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use newsdesk_core::{NewsroomBuilder, PlanKey};
//! use jiff::civil::Date;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let desk = NewsroomBuilder::new()
//!     .with_base_url("http://127.0.0.1:8000")
//!     .build()?;
//!
//! let key = PlanKey::new(Date::constant(2024, 5, 1), "telegram");
//! let plan = desk.load_plan(&key).await?;
//! println!("{} items", plan.items.len());
//!
//! let report = desk.approve_all(&key).await?;
//! println!("approved {}", report.approved);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod desk;
pub mod display;
pub mod error;
pub mod guard;
pub mod models;
pub mod notify;
pub mod params;
pub mod service;

// Re-export commonly used types
pub use auth::{AuthContext, FileTokenStore, MemoryTokenStore, TokenStore, AUTH_HEADER};
pub use desk::{Newsroom, NewsroomBuilder};
pub use display::{ImportSummary, OperationStatus, PlanView, RunSummary};
pub use error::{NewsroomError, Result};
pub use guard::RequestGuard;
pub use models::{
    ApprovalReport, AuthProbe, ImportReport, Item, ItemStatus, LatestDate, Plan, PlanMetrics,
    RunReport, StatusCounts,
};
pub use notify::{Notifier, StderrNotifier};
pub use params::{ImportCsv, PlanKey, RunMode, SetStatus, UndoItem, ALL_PLATFORMS};
pub use service::{HttpPlanService, PlanService};
