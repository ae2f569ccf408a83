//! Command handlers: convert CLI arguments into core operations and render
//! the results as markdown.
//!
//! Failures inside the session are already reported through its notification
//! channel; handlers only propagate them so `main` can set the exit code
//! without printing twice.

use std::path::Path;

use anyhow::{anyhow, bail, Result};
use jiff::civil::Date;
use newsdesk_core::{
    ImportCsv, ImportSummary, ItemStatus, Newsroom, OperationStatus, Plan, PlanKey, PlanView,
    RunMode, RunSummary, SetStatus, UndoItem,
};

use crate::renderer::TerminalRenderer;

pub struct Cli {
    desk: Newsroom,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(desk: Newsroom, renderer: TerminalRenderer) -> Self {
        Self { desk, renderer }
    }

    pub async fn show_plan(&self, key: &PlanKey) -> Result<()> {
        let plan = self.desk.load_plan(key).await?;
        self.renderer.render(&PlanView::new(&plan).to_string())
    }

    /// Jumps to the newest date that has a plan for the platform and shows
    /// that plan.
    pub async fn show_latest(&self, platform: &str) -> Result<()> {
        let latest = self.desk.latest_date(platform).await?;
        let key = PlanKey::new(latest.date, platform);
        self.show_plan(&key).await
    }

    pub async fn approve_all(&self, key: &PlanKey) -> Result<()> {
        let report = self.desk.approve_all(key).await?;
        let plan = self.desk.snapshot();
        let mut status = OperationStatus::new(format!("Approved **{}** item(s)", report.approved));
        if let Some(plan) = &plan {
            status = status.with_plan(plan);
        }
        self.renderer.render(&status.to_string())
    }

    pub async fn metrics(&self, key: &PlanKey) -> Result<()> {
        let metrics = self.desk.metrics(key).await?;
        let out = format!(
            "# Metrics {} · {}\n\n\
             draft **{}** · approved **{}** · sent **{}**\n\n\
             items on platform: **{}**\n\n\
             server auth: **{}**\n",
            metrics.date,
            metrics.platform,
            metrics.counts.draft,
            metrics.counts.approved,
            metrics.counts.sent,
            metrics.total_platform_items,
            if metrics.auth_enabled { "enabled" } else { "disabled" },
        );
        self.renderer.render(&out)
    }

    /// Prints the run log for the date verbatim; log lines are not markdown.
    pub async fn show_logs(&self, date: Date) -> Result<()> {
        let text = self.desk.logs(date).await?;
        print!("{text}");
        Ok(())
    }

    pub async fn export_plan(&self, key: &PlanKey, out: &Path) -> Result<()> {
        let written = self.desk.export_plan(key, out).await?;
        self.renderer
            .render(&format!("Plan saved to `{}`\n", written.display()))
    }

    pub async fn export_captions(&self, date: Date, out: &Path) -> Result<()> {
        let written = self.desk.export_captions(date, out).await?;
        self.renderer
            .render(&format!("Captions saved to `{}`\n", written.display()))
    }

    pub async fn set_item(&self, key: &PlanKey, id: String, status: ItemStatus) -> Result<()> {
        let params = SetStatus { id, status };
        let plan = self.desk.set_status(key, &params).await?;
        self.render_item_change(&params.id, params.status, &plan)
    }

    /// The cycle needs the current status, so the plan is loaded first.
    pub async fn cycle_item(&self, key: &PlanKey, id: &str) -> Result<()> {
        self.desk.load_plan(key).await?;
        let (status, plan) = self.desk.cycle(key, id).await?;
        self.render_item_change(id, status, &plan)
    }

    pub async fn undo_item(&self, key: &PlanKey, id: String) -> Result<()> {
        let params = UndoItem { id };
        let plan = self.desk.undo(key, &params).await?;
        let status = plan
            .item(&params.id)
            .map(|item| item.status.with_icon())
            .unwrap_or("?");
        let out = OperationStatus::new(format!("Item `{}` reverted to {}", params.id, status))
            .with_plan(&plan)
            .to_string();
        self.renderer.render(&out)
    }

    pub async fn run_preview(&self, key: &PlanKey) -> Result<()> {
        let report = self.desk.run(key, RunMode::Preview).await?;
        self.renderer.render(&RunSummary::new(&report).to_string())
    }

    pub async fn run_publish(&self, key: &PlanKey, confirmed: bool) -> Result<()> {
        if !confirmed {
            bail!("refusing to publish without --yes (this marks every approved item as SENT)");
        }
        let report = self.desk.run(key, RunMode::Publish).await?;
        self.renderer.render(&RunSummary::new(&report).to_string())
    }

    pub async fn import_csv(&self, key: &PlanKey, file: &Path) -> Result<()> {
        let params = ImportCsv {
            path: file.to_path_buf(),
        };
        let report = self.desk.import_csv(key, &params).await?;
        let plan = self.desk.snapshot();
        let mut status = OperationStatus::new(ImportSummary::new(&report).to_string());
        if let Some(plan) = &plan {
            status = status.with_plan(plan);
        }
        self.renderer.render(&status.to_string())
    }

    pub async fn auth_probe(&self) -> Result<()> {
        let probe = self.desk.auth_probe().await?;
        let out = if probe.enabled {
            format!("Server auth: **enabled** (header `{}`)\n", probe.header)
        } else {
            "Server auth: **disabled**\n".to_string()
        };
        self.renderer.render(&out)
    }

    pub fn auth_set(&self, value: &str) -> Result<()> {
        self.desk
            .auth()
            .set_token(value)
            .map_err(|e| anyhow!("failed to store token: {e}"))?;
        self.renderer.render("Token stored.\n")
    }

    pub fn auth_clear(&self) -> Result<()> {
        self.desk
            .auth()
            .clear_token()
            .map_err(|e| anyhow!("failed to clear token: {e}"))?;
        self.renderer.render("Token cleared.\n")
    }

    fn render_item_change(&self, id: &str, status: ItemStatus, plan: &Plan) -> Result<()> {
        let out = OperationStatus::new(format!("Item `{}` → {}", id, status.with_icon()))
            .with_plan(plan)
            .to_string();
        self.renderer.render(&out)
    }
}
