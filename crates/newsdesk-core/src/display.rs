//! Display wrappers that format core types as markdown.
//!
//! The CLI renders the returned markdown with its terminal renderer; the
//! wrappers themselves stay free of any terminal concern so the same text
//! works in plain output as well.

use std::fmt;

use crate::models::{ImportReport, Plan, RunReport, StatusCounts};

const SNIPPET_WIDTH: usize = 100;

fn counts_line(counts: &StatusCounts) -> String {
    format!(
        "draft **{}** · approved **{}** · sent **{}**",
        counts.draft, counts.approved, counts.sent
    )
}

fn ellipsize(text: &str, width: usize) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= width {
        trimmed.to_string()
    } else {
        let cut: String = trimmed.chars().take(width).collect();
        format!("{}…", cut.trim_end())
    }
}

/// Formats one plan: key header, status tally, item lines.
pub struct PlanView<'a> {
    plan: &'a Plan,
}

impl<'a> PlanView<'a> {
    pub fn new(plan: &'a Plan) -> Self {
        Self { plan }
    }
}

impl fmt::Display for PlanView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.plan;
        writeln!(f, "# Plan {} · {}", plan.date, plan.platform)?;
        writeln!(f)?;
        writeln!(f, "{}", counts_line(&plan.counts))?;
        writeln!(f)?;

        if plan.items.is_empty() {
            writeln!(f, "No items in this plan.")?;
            return Ok(());
        }

        for item in &plan.items {
            let id = item.persisted_id().unwrap_or("?");
            let title = if item.title.trim().is_empty() {
                "(no title)"
            } else {
                item.title.trim()
            };
            write!(f, "- {} `{}` **{}**", item.status.with_icon(), id, title)?;
            if !item.snippet.trim().is_empty() {
                write!(f, " — {}", ellipsize(&item.snippet, SNIPPET_WIDTH))?;
            }
            if let Some(topic) = item.topic_id.as_deref().filter(|t| !t.is_empty()) {
                write!(f, " _(topic: {topic})_")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Formats a run report, including a short preview in dry-run mode.
pub struct RunSummary<'a> {
    report: &'a RunReport,
}

impl<'a> RunSummary<'a> {
    pub fn new(report: &'a RunReport) -> Self {
        Self { report }
    }
}

impl fmt::Display for RunSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        let label = if report.confirm { "Publish" } else { "Dry-run" };
        writeln!(
            f,
            "{label}: candidates **{}** · sent **{}**",
            report.candidates, report.sent
        )?;
        if !report.preview.is_empty() {
            writeln!(f)?;
            for message in report.preview.iter().take(5) {
                writeln!(f, "> {}", ellipsize(message, SNIPPET_WIDTH))?;
            }
            if report.preview.len() > 5 {
                writeln!(f, "> … and {} more", report.preview.len() - 5)?;
            }
        }
        Ok(())
    }
}

/// Formats an operation acknowledgement: one headline line, followed by the
/// refreshed status tally when a plan is attached.
pub struct OperationStatus<'a> {
    headline: String,
    plan: Option<&'a Plan>,
}

impl<'a> OperationStatus<'a> {
    pub fn new(headline: impl Into<String>) -> Self {
        Self {
            headline: headline.into(),
            plan: None,
        }
    }

    pub fn with_plan(mut self, plan: &'a Plan) -> Self {
        self.plan = Some(plan);
        self
    }
}

impl fmt::Display for OperationStatus<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.headline)?;
        if let Some(plan) = self.plan {
            writeln!(f, "{}", counts_line(&plan.counts))?;
        }
        Ok(())
    }
}

/// Formats an import reconciliation report.
pub struct ImportSummary<'a> {
    report: &'a ImportReport,
}

impl<'a> ImportSummary<'a> {
    pub fn new(report: &'a ImportReport) -> Self {
        Self { report }
    }
}

impl fmt::Display for ImportSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CSV imported: added **{}** · updated **{}** · total **{}**",
            self.report.added, self.report.updated, self.report.total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> Plan {
        serde_json::from_str(
            r#"{
                "date": "2024-05-01",
                "platform": "telegram",
                "counts": {"draft": 1, "approved": 0, "sent": 0},
                "items": [
                    {"id": "t1", "platform": "telegram", "title": "Headline",
                     "snippet": "Body text", "topic_id": "t1", "status": "draft"}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn plan_view_lists_items_with_icons() {
        let plan = sample_plan();
        let out = PlanView::new(&plan).to_string();
        assert!(out.contains("# Plan 2024-05-01 · telegram"));
        assert!(out.contains("○ draft"));
        assert!(out.contains("`t1`"));
        assert!(out.contains("Headline"));
    }

    #[test]
    fn empty_plan_says_so() {
        let mut plan = sample_plan();
        plan.items.clear();
        let out = PlanView::new(&plan).to_string();
        assert!(out.contains("No items in this plan."));
    }

    #[test]
    fn run_summary_labels_modes() {
        let report: RunReport = serde_json::from_str(
            r#"{"dry_run":true,"confirm":false,"candidates":2,"sent":0,"preview":["one","two"]}"#,
        )
        .unwrap();
        let out = RunSummary::new(&report).to_string();
        assert!(out.starts_with("Dry-run:"));
        assert!(out.contains("> one"));
    }

    #[test]
    fn operation_status_appends_counts_when_plan_attached() {
        let plan = sample_plan();
        let out = OperationStatus::new("Approved **1** item(s)")
            .with_plan(&plan)
            .to_string();
        assert!(out.starts_with("Approved **1** item(s)\n"));
        assert!(out.contains("draft **1**"));

        let bare = OperationStatus::new("Token stored.").to_string();
        assert!(!bare.contains("draft"));
    }

    #[test]
    fn ellipsize_truncates_long_text() {
        let long = "x".repeat(300);
        let short = ellipsize(&long, 10);
        assert!(short.chars().count() <= 11);
        assert!(short.ends_with('…'));
    }
}
