//! Plan-level operations: load, latest, bulk approval, exports.

use std::path::{Path, PathBuf};

use jiff::civil::Date;
use log::info;

use super::Newsroom;
use crate::error::{NewsroomError, Result};
use crate::models::{ApprovalReport, LatestDate, Plan, PlanMetrics};
use crate::params::PlanKey;

impl Newsroom {
    /// Loads the plan for `key`, replacing the local snapshot wholesale.
    ///
    /// Reads are not subject to the request guard and may overlap a guarded
    /// operation.
    pub async fn load_plan(&self, key: &PlanKey) -> Result<Plan> {
        let result = async {
            key.validate()?;
            self.reload(key).await
        }
        .await;
        self.observe(result)
    }

    /// Resolves the most recent date that has a plan for `platform`.
    pub async fn latest_date(&self, platform: &str) -> Result<LatestDate> {
        let result = async {
            if platform.trim().is_empty() {
                return Err(NewsroomError::validation("platform", "must not be empty"));
            }
            self.service.latest_date(platform).await
        }
        .await;
        self.observe(result)
    }

    /// Transitions every draft item for `key` to approved.
    ///
    /// Guarded mutation; the plan is reloaded before the report is returned.
    pub async fn approve_all(&self, key: &PlanKey) -> Result<ApprovalReport> {
        let result = async {
            key.validate_for_mutation()?;
            let _permit = self.admit()?;
            let report = self.service.approve_all(key).await?;
            info!("approved {} item(s) for {}/{}", report.approved, key.date, key.platform);
            self.reload(key).await?;
            Ok(report)
        }
        .await;
        self.observe(result)
    }

    /// Read-only dashboard numbers for `key`.
    pub async fn metrics(&self, key: &PlanKey) -> Result<PlanMetrics> {
        let result = async {
            key.validate()?;
            self.service.metrics(key).await
        }
        .await;
        self.observe(result)
    }

    /// Downloads the plan for `key` to `path` as pretty-printed JSON.
    ///
    /// A fresh fetch, written verbatim; the session snapshot is untouched.
    pub async fn export_plan(&self, key: &PlanKey, path: &Path) -> Result<PathBuf> {
        let result = async {
            key.validate()?;
            let plan = self.service.fetch_plan(key).await?;
            let body = serde_json::to_string_pretty(&plan)?;
            tokio::fs::write(path, body)
                .await
                .map_err(|e| NewsroomError::file(path, e))?;
            Ok(path.to_path_buf())
        }
        .await;
        self.observe(result)
    }

    /// Raw pipeline log lines recorded for `date`, surfaced verbatim.
    pub async fn logs(&self, date: Date) -> Result<String> {
        let result = self.service.logs(date).await;
        self.observe(result)
    }

    /// Downloads the caption export for `date` to `path`.
    pub async fn export_captions(&self, date: Date, path: &Path) -> Result<PathBuf> {
        let result = async {
            let text = self.service.caption_export(date).await?;
            tokio::fs::write(path, text)
                .await
                .map_err(|e| NewsroomError::file(path, e))?;
            Ok(path.to_path_buf())
        }
        .await;
        self.observe(result)
    }
}
