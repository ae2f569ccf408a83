//! CSV import: local validation, opaque upload, reconciliation report.

use log::info;

use super::Newsroom;
use crate::error::{NewsroomError, Result};
use crate::models::ImportReport;
use crate::params::{ImportCsv, PlanKey};

impl Newsroom {
    /// Imports a CSV file into the plan for `key`.
    ///
    /// The file must exist and the key must be mutable before any request is
    /// issued. The payload is transmitted opaquely — parsing and merge-by-id
    /// are the server's job, and the added/updated classification it returns
    /// is surfaced verbatim. On success the plan is reloaded so the local
    /// list matches the merged server state exactly.
    pub async fn import_csv(&self, key: &PlanKey, params: &ImportCsv) -> Result<ImportReport> {
        let result = async {
            key.validate_for_mutation()?;
            let payload = tokio::fs::read(&params.path)
                .await
                .map_err(|e| NewsroomError::file(&params.path, e))?;
            if payload.is_empty() {
                return Err(NewsroomError::validation("file", "CSV file is empty"));
            }
            let file_name = params
                .path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("import.csv")
                .to_string();

            let _permit = self.admit()?;
            let report = self.service.import_csv(key, &file_name, payload).await?;
            info!(
                "import {}: added={} updated={}",
                file_name, report.added, report.updated
            );
            self.reload(key).await?;
            Ok(report)
        }
        .await;
        self.observe(result)
    }
}
