//! Run pipeline: candidate preview and publication.

use log::{info, warn};

use super::Newsroom;
use crate::error::Result;
use crate::models::RunReport;
use crate::params::{PlanKey, RunMode};

impl Newsroom {
    /// Runs the pipeline for `key` in the given mode.
    ///
    /// Preview computes candidates without changing any item; publish
    /// transitions every candidate from approved to sent. Both share the
    /// guard since they share the entry point, and both end with a full
    /// reload. The candidates/sent pair is surfaced verbatim; a publish
    /// whose `sent` falls short of `candidates` is reported as a partial
    /// failure, not silently accepted.
    ///
    /// Requiring an explicit operator confirmation before a publish is the
    /// caller's duty — this method assumes the decision was already made.
    pub async fn run(&self, key: &PlanKey, mode: RunMode) -> Result<RunReport> {
        let result = async {
            key.validate_for_mutation()?;
            let _permit = self.admit()?;
            let report = self.service.run(key, mode).await?;
            info!(
                "{} for {}/{}: candidates={} sent={}",
                mode.as_str(),
                key.date,
                key.platform,
                report.candidates,
                report.sent
            );
            if report.is_partial() {
                warn!("partial publish: {} of {} sent", report.sent, report.candidates);
                self.notifier.notify(&format!(
                    "Publish incomplete: only {} of {} candidates were sent",
                    report.sent, report.candidates
                ));
            }
            self.reload(key).await?;
            Ok(report)
        }
        .await;
        self.observe(result)
    }
}
