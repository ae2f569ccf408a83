//! Remote plan service contract and its HTTP implementation.
//!
//! [`PlanService`] is the sole boundary between the workflow core and the
//! remote server. The core depends on the trait, never on the transport, so
//! the whole state machine is exercisable against a mock server. Merge rules
//! for CSV import and the predecessor state for undo live entirely behind
//! this boundary; the client only surfaces what the service reports.

use async_trait::async_trait;
use jiff::civil::Date;
use log::debug;
use reqwest::multipart;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::auth::AuthContext;
use crate::error::{NewsroomError, Result};
use crate::models::{
    ApprovalReport, AuthProbe, ChangeAck, ImportReport, LatestDate, Plan, PlanMetrics, RunReport,
};
use crate::params::{PlanKey, RunMode, SetStatus, UndoItem};

/// Remote operations the workflow consumes.
#[async_trait]
pub trait PlanService: Send + Sync {
    /// Full plan snapshot for one key.
    async fn fetch_plan(&self, key: &PlanKey) -> Result<Plan>;

    /// Most recent date that has a plan for the platform.
    async fn latest_date(&self, platform: &str) -> Result<LatestDate>;

    /// Bulk transition of every draft item to approved.
    async fn approve_all(&self, key: &PlanKey) -> Result<ApprovalReport>;

    /// Run pipeline entry point, preview or publish.
    async fn run(&self, key: &PlanKey, mode: RunMode) -> Result<RunReport>;

    /// Direct status transition for one item.
    async fn set_status(&self, key: &PlanKey, params: &SetStatus) -> Result<ChangeAck>;

    /// Server-defined previous-state reversal for one item.
    async fn undo(&self, key: &PlanKey, params: &UndoItem) -> Result<ChangeAck>;

    /// Opaque CSV upload; the server parses and merges by id.
    async fn import_csv(
        &self,
        key: &PlanKey,
        file_name: &str,
        payload: Vec<u8>,
    ) -> Result<ImportReport>;

    /// Read-only dashboard numbers for one key.
    async fn metrics(&self, key: &PlanKey) -> Result<PlanMetrics>;

    /// Capability probe; the one unauthenticated call.
    async fn auth_probe(&self) -> Result<AuthProbe>;

    /// Caption export text, keyed only by date.
    async fn caption_export(&self, date: Date) -> Result<String>;

    /// Raw pipeline log text recorded for a date, plain text.
    async fn logs(&self, date: Date) -> Result<String>;
}

/// [`PlanService`] over HTTP with token header injection.
pub struct HttpPlanService {
    base: String,
    http: reqwest::Client,
    auth: AuthContext,
}

impl HttpPlanService {
    pub fn new(base_url: impl Into<String>, auth: AuthContext) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("newsdesk/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let base = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { base, http, auth })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Query pair for a key. The platform travels verbatim, including the
    /// aggregate sentinel on read paths.
    fn key_query(key: &PlanKey) -> [(&'static str, String); 2] {
        [
            ("date", key.date.to_string()),
            ("platform", key.platform.clone()),
        ]
    }

    /// Normalizes the response: 401 becomes an auth failure, any other
    /// non-2xx a remote failure carrying the server detail text.
    async fn check(response: Response) -> Result<String> {
        let status = response.status();
        let body = response.text().await?;
        if status == StatusCode::UNAUTHORIZED {
            return Err(NewsroomError::Auth {
                message: detail_text(&body, status),
            });
        }
        if !status.is_success() {
            return Err(NewsroomError::Remote {
                status: status.as_u16(),
                detail: detail_text(&body, status),
            });
        }
        Ok(body)
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let body = Self::check(response).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Extracts the most useful error line from a response body: the JSON
/// `detail` field when present, the raw text otherwise, the status line as
/// a last resort.
fn detail_text(body: &str, status: StatusCode) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(detail) = value.get("detail").and_then(|d| d.as_str()) {
            return detail.to_string();
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {status}")
    } else {
        trimmed.chars().take(300).collect()
    }
}

#[async_trait]
impl PlanService for HttpPlanService {
    async fn fetch_plan(&self, key: &PlanKey) -> Result<Plan> {
        debug!("GET plan {} {}", key.date, key.platform);
        let request = self
            .http
            .get(self.url("/api/newsroom/plan"))
            .query(&Self::key_query(key));
        let response = self.auth.apply(request).send().await?;
        Self::read_json(response).await
    }

    async fn latest_date(&self, platform: &str) -> Result<LatestDate> {
        let request = self
            .http
            .get(self.url("/api/newsroom/latest"))
            .query(&[("platform", platform)]);
        let response = self.auth.apply(request).send().await?;
        Self::read_json(response).await
    }

    async fn approve_all(&self, key: &PlanKey) -> Result<ApprovalReport> {
        debug!("POST approve_all {} {}", key.date, key.platform);
        let request = self
            .http
            .post(self.url("/api/newsroom/approve_all"))
            .query(&Self::key_query(key));
        let response = self.auth.apply(request).send().await?;
        Self::read_json(response).await
    }

    async fn run(&self, key: &PlanKey, mode: RunMode) -> Result<RunReport> {
        let (dry_run, confirm) = mode.wire_flags();
        debug!(
            "POST run {} {} dry_run={dry_run} confirm={confirm}",
            key.date, key.platform
        );
        let body = serde_json::json!({
            "date": key.date.to_string(),
            "platform": key.platform,
            "dry_run": dry_run,
            "confirm": confirm,
        });
        let request = self.http.post(self.url("/api/newsroom/run")).json(&body);
        let response = self.auth.apply(request).send().await?;
        Self::read_json(response).await
    }

    async fn set_status(&self, key: &PlanKey, params: &SetStatus) -> Result<ChangeAck> {
        debug!("POST status {} -> {}", params.id, params.status.as_str());
        let body = serde_json::json!({
            "id": params.id,
            "status": params.status.as_str(),
        });
        let request = self
            .http
            .post(self.url("/api/newsroom/status"))
            .query(&Self::key_query(key))
            .json(&body);
        let response = self.auth.apply(request).send().await?;
        Self::read_json(response).await
    }

    async fn undo(&self, key: &PlanKey, params: &UndoItem) -> Result<ChangeAck> {
        debug!("POST undo {}", params.id);
        let body = serde_json::json!({ "id": params.id });
        let request = self
            .http
            .post(self.url("/api/newsroom/undo"))
            .query(&Self::key_query(key))
            .json(&body);
        let response = self.auth.apply(request).send().await?;
        Self::read_json(response).await
    }

    async fn import_csv(
        &self,
        key: &PlanKey,
        file_name: &str,
        payload: Vec<u8>,
    ) -> Result<ImportReport> {
        debug!("POST import_csv {} ({} bytes)", file_name, payload.len());
        let part = multipart::Part::bytes(payload)
            .file_name(file_name.to_string())
            .mime_str("text/csv")?;
        let form = multipart::Form::new().part("file", part);
        let request = self
            .http
            .post(self.url("/api/newsroom/import_csv"))
            .query(&Self::key_query(key))
            .multipart(form);
        let response = self.auth.apply(request).send().await?;
        Self::read_json(response).await
    }

    async fn metrics(&self, key: &PlanKey) -> Result<PlanMetrics> {
        let request = self
            .http
            .get(self.url("/api/newsroom/metrics"))
            .query(&Self::key_query(key));
        let response = self.auth.apply(request).send().await?;
        Self::read_json(response).await
    }

    async fn auth_probe(&self) -> Result<AuthProbe> {
        // capability probe: deliberately sent without credentials
        let response = self.http.get(self.url("/api/auth/enabled")).send().await?;
        Self::read_json(response).await
    }

    async fn caption_export(&self, date: Date) -> Result<String> {
        let request = self
            .http
            .get(self.url("/api/newsroom/ig_captions"))
            .query(&[("date", date.to_string())]);
        let response = self.auth.apply(request).send().await?;
        Self::check(response).await
    }

    async fn logs(&self, date: Date) -> Result<String> {
        let request = self
            .http
            .get(self.url("/api/newsroom/logs"))
            .query(&[("date", date.to_string())]);
        let response = self.auth.apply(request).send().await?;
        Self::check(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_prefers_json_detail_field() {
        let body = r#"{"detail":"Invalid or missing x-auth token"}"#;
        assert_eq!(
            detail_text(body, StatusCode::UNAUTHORIZED),
            "Invalid or missing x-auth token"
        );
    }

    #[test]
    fn detail_falls_back_to_raw_then_status() {
        assert_eq!(detail_text("plain failure", StatusCode::BAD_GATEWAY), "plain failure");
        assert_eq!(
            detail_text("   ", StatusCode::BAD_GATEWAY),
            "HTTP 502 Bad Gateway"
        );
    }

    #[test]
    fn key_query_carries_date_and_platform() {
        let key = PlanKey::new(Date::constant(2024, 5, 1), "all");
        let query = HttpPlanService::key_query(&key);
        assert_eq!(query[0], ("date", "2024-05-01".to_string()));
        assert_eq!(query[1], ("platform", "all".to_string()));
    }
}
