//! Single-item status workflow: direct transition, cycle, undo.
//!
//! Transitions are server-confirmed only: nothing is applied locally before
//! the server acknowledges, and on success the whole plan is reloaded so
//! counts and item list can never drift from the server's view.

use log::info;

use super::Newsroom;
use crate::error::{NewsroomError, Result};
use crate::models::{ItemStatus, Plan};
use crate::params::{PlanKey, SetStatus, UndoItem};

impl Newsroom {
    /// Sets one item's status directly.
    ///
    /// The remote service is the authority on which transitions are legal;
    /// the core imposes no restriction of its own (`sent -> draft` is a
    /// valid manual correction). An acknowledgement that matched nothing is
    /// an [`NewsroomError::ItemNotFound`], never a silent success.
    pub async fn set_status(&self, key: &PlanKey, params: &SetStatus) -> Result<Plan> {
        let result = async {
            key.validate_for_mutation()?;
            params.validate()?;
            let _permit = self.admit()?;
            let ack = self.service.set_status(key, params).await?;
            if !ack.matched() {
                return Err(NewsroomError::ItemNotFound {
                    id: params.id.clone(),
                });
            }
            info!("item {} -> {}", params.id, params.status.as_str());
            self.reload(key).await
        }
        .await;
        self.observe(result)
    }

    /// Advances one item a single step: `draft -> approved -> sent -> draft`.
    ///
    /// The next state is computed from the loaded snapshot, so the plan must
    /// have been loaded first. Returns the status that was requested along
    /// with the refreshed plan.
    pub async fn cycle(&self, key: &PlanKey, id: &str) -> Result<(ItemStatus, Plan)> {
        let current = {
            let result = self.current_status(id);
            self.observe(result)?
        };
        let params = SetStatus {
            id: id.to_string(),
            status: current.next(),
        };
        let plan = self.set_status(key, &params).await?;
        Ok((params.status, plan))
    }

    /// Reverts one item to its server-defined previous status.
    ///
    /// Only the id travels; the predecessor is the server's decision.
    pub async fn undo(&self, key: &PlanKey, params: &UndoItem) -> Result<Plan> {
        let result = async {
            key.validate_for_mutation()?;
            params.validate()?;
            let _permit = self.admit()?;
            let ack = self.service.undo(key, params).await?;
            if !ack.matched() {
                return Err(NewsroomError::ItemNotFound {
                    id: params.id.clone(),
                });
            }
            info!("item {} reverted", params.id);
            self.reload(key).await
        }
        .await;
        self.observe(result)
    }

    fn current_status(&self, id: &str) -> Result<ItemStatus> {
        if id.trim().is_empty() {
            return Err(NewsroomError::validation(
                "id",
                "item has no persisted id yet",
            ));
        }
        let snapshot = self.snapshot().ok_or_else(|| {
            NewsroomError::validation("plan", "no plan loaded; load one before cycling")
        })?;
        snapshot
            .item(id)
            .map(|item| item.status)
            .ok_or_else(|| NewsroomError::ItemNotFound { id: id.to_string() })
    }
}
