//! High-level newsroom session API.
//!
//! [`Newsroom`] is the central coordinator: it owns the local plan snapshot,
//! admits mutating operations through the request guard, delegates the
//! remote work to a [`PlanService`], and reports every failure through the
//! single notification channel.
//!
//! ```text
//! operation call ──▶ validation ──▶ guard admission ──▶ PlanService
//!                                                          │
//!              snapshot replaced wholesale ◀── plan reload ─┘
//! ```
//!
//! The snapshot is only ever replaced with a fresh server fetch, never
//! patched in place: after any mutation the displayed state is a verbatim
//! copy of what the server holds.

use std::sync::{Arc, RwLock};

use crate::auth::AuthContext;
use crate::error::{NewsroomError, Result};
use crate::guard::{OpPermit, RequestGuard};
use crate::models::{AuthProbe, Plan};
use crate::notify::{NoticeGate, Notifier};
use crate::params::PlanKey;
use crate::service::PlanService;

pub mod builder;
mod import_ops;
mod item_ops;
mod plan_ops;
mod run_ops;

pub use builder::NewsroomBuilder;

/// One operator session against one remote plan service.
pub struct Newsroom {
    pub(crate) service: Arc<dyn PlanService>,
    pub(crate) auth: AuthContext,
    pub(crate) guard: RequestGuard,
    pub(crate) notifier: Arc<dyn Notifier>,
    pub(crate) auth_gate: NoticeGate,
    snapshot: RwLock<Option<Plan>>,
}

impl Newsroom {
    pub(crate) fn new(
        service: Arc<dyn PlanService>,
        auth: AuthContext,
        notifier: Arc<dyn Notifier>,
        auth_gate: NoticeGate,
    ) -> Self {
        Self {
            service,
            auth,
            guard: RequestGuard::new(),
            notifier,
            auth_gate,
            snapshot: RwLock::new(None),
        }
    }

    /// The current local plan copy, if one has been loaded.
    pub fn snapshot(&self) -> Option<Plan> {
        self.snapshot.read().ok().and_then(|guard| guard.clone())
    }

    /// True while a guarded operation is outstanding.
    pub fn is_busy(&self) -> bool {
        self.guard.is_busy()
    }

    /// The session's auth context (token get/set/clear).
    pub fn auth(&self) -> &AuthContext {
        &self.auth
    }

    /// Capability probe; unauthenticated and not subject to the guard.
    pub async fn auth_probe(&self) -> Result<AuthProbe> {
        self.observe(self.service.auth_probe().await)
    }

    /// Fetches the plan for `key` and replaces the snapshot wholesale.
    pub(crate) async fn reload(&self, key: &PlanKey) -> Result<Plan> {
        let plan = self.service.fetch_plan(key).await?;
        if let Ok(mut snapshot) = self.snapshot.write() {
            *snapshot = Some(plan.clone());
        }
        Ok(plan)
    }

    /// Admission check for mutating operations. On refusal the caller must
    /// not issue any network call; the refusal surfaces through `observe`
    /// like every other failure.
    pub(crate) fn admit(&self) -> Result<OpPermit> {
        self.guard.try_begin().ok_or(NewsroomError::Busy)
    }

    /// Funnels a failed result through the notification channel.
    pub(crate) fn observe<T>(&self, result: Result<T>) -> Result<T> {
        if let Err(err) = &result {
            self.report(err);
        }
        result
    }

    pub(crate) fn report(&self, err: &NewsroomError) {
        if err.is_auth() {
            // repeat auth notices are rate limited, not raised per attempt
            if self.auth_gate.admit() {
                self.notifier.notify(&err.user_message());
            }
        } else {
            self.notifier.notify(&err.user_message());
        }
    }
}
