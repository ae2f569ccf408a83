//! Builder for creating and configuring Newsroom sessions.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use super::Newsroom;
use crate::auth::{AuthContext, FileTokenStore, MemoryTokenStore, TokenStore};
use crate::error::{NewsroomError, Result};
use crate::notify::{NoticeGate, Notifier, StderrNotifier};
use crate::service::{HttpPlanService, PlanService};

/// How long repeat authentication notices stay muted by default.
const DEFAULT_AUTH_NOTICE_INTERVAL: Duration = Duration::from_secs(30);

/// Builder for creating and configuring [`Newsroom`] sessions.
pub struct NewsroomBuilder {
    base_url: Option<String>,
    token_store: Option<Arc<dyn TokenStore>>,
    notifier: Option<Arc<dyn Notifier>>,
    service: Option<Arc<dyn PlanService>>,
    auth_notice_interval: Duration,
}

impl NewsroomBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            token_store: None,
            notifier: None,
            service: None,
            auth_notice_interval: DEFAULT_AUTH_NOTICE_INTERVAL,
        }
    }

    /// Base URL of the remote plan service, e.g. `http://127.0.0.1:8000`.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Uses the given token store instead of the XDG-located file.
    pub fn with_token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.token_store = Some(store);
        self
    }

    /// One-shot token that is never persisted.
    pub fn with_token(self, token: impl Into<String>) -> Self {
        self.with_token_store(Arc::new(MemoryTokenStore::new(Some(token.into()))))
    }

    /// Token file at an explicit path.
    pub fn with_token_file(self, path: impl AsRef<Path>) -> Self {
        self.with_token_store(Arc::new(FileTokenStore::new(path.as_ref())))
    }

    /// Replaces the stderr notifier.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Injects a service implementation directly; `base_url` is then unused.
    pub fn with_service(mut self, service: Arc<dyn PlanService>) -> Self {
        self.service = Some(service);
        self
    }

    /// Mute window between repeated authentication notices.
    pub fn with_auth_notice_interval(mut self, interval: Duration) -> Self {
        self.auth_notice_interval = interval;
        self
    }

    /// Builds the configured session.
    ///
    /// # Errors
    ///
    /// Returns a validation error when neither a base URL nor a service was
    /// provided, and a file error when the default token location cannot be
    /// created.
    pub fn build(self) -> Result<Newsroom> {
        let store = match self.token_store {
            Some(store) => store,
            None => Arc::new(FileTokenStore::new(FileTokenStore::default_path()?)),
        };
        let auth = AuthContext::new(store);

        let service: Arc<dyn PlanService> = match self.service {
            Some(service) => service,
            None => {
                let base = self.base_url.ok_or_else(|| {
                    NewsroomError::validation("server", "no plan service URL configured")
                })?;
                Arc::new(HttpPlanService::new(base, auth.clone())?)
            }
        };

        let notifier = self.notifier.unwrap_or_else(|| Arc::new(StderrNotifier));
        let gate = NoticeGate::new(self.auth_notice_interval);

        Ok(Newsroom::new(service, auth, notifier, gate))
    }
}

impl Default for NewsroomBuilder {
    fn default() -> Self {
        Self::new()
    }
}
