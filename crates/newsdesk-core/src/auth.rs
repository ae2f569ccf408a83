//! Auth context: opaque token storage and request header injection.
//!
//! The token is a single opaque string. Storage is behind the [`TokenStore`]
//! trait so the core never assumes a particular persistence medium: the CLI
//! uses a file in the XDG state directory, tests use memory.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use crate::error::{NewsroomError, Result};

/// Header the token travels in on every authenticated request.
pub const AUTH_HEADER: &str = "x-auth";

/// Abstract storage for the auth token.
pub trait TokenStore: Send + Sync {
    /// The stored token, if any. Whitespace-only values count as absent.
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// In-memory token store for tests and one-shot overrides.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: RwLock::new(token),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token
            .read()
            .ok()
            .and_then(|guard| guard.clone())
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }

    fn set(&self, token: &str) -> Result<()> {
        if let Ok(mut guard) = self.token.write() {
            *guard = Some(token.to_string());
        }
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
        Ok(())
    }
}

/// Token store backed by a plain file, one token per file.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location following the XDG Base Directory specification:
    /// `$XDG_STATE_HOME/newsdesk/token` or `~/.local/state/newsdesk/token`.
    pub fn default_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("newsdesk")
            .place_state_file("token")
            .map_err(|e| NewsroomError::file("$XDG_STATE_HOME/newsdesk/token", e))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        std::fs::read_to_string(&self.path)
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }

    fn set(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| NewsroomError::file(parent, e))?;
        }
        std::fs::write(&self.path, token.trim())
            .map_err(|e| NewsroomError::file(&self.path, e))
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(NewsroomError::file(&self.path, e)),
        }
    }
}

/// Injectable auth context shared by the session and the HTTP service.
///
/// "Non-empty token" is the whole contract: when one is present it is
/// attached to every outbound request except the capability probe.
#[derive(Clone)]
pub struct AuthContext {
    store: Arc<dyn TokenStore>,
}

impl AuthContext {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// Context with no persistence at all.
    pub fn ephemeral() -> Self {
        Self::new(Arc::new(MemoryTokenStore::default()))
    }

    pub fn token(&self) -> Option<String> {
        self.store.get()
    }

    pub fn set_token(&self, token: &str) -> Result<()> {
        self.store.set(token)
    }

    pub fn clear_token(&self) -> Result<()> {
        self.store.clear()
    }

    /// Attaches the token header when a token is present; otherwise returns
    /// the builder untouched.
    pub fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.token() {
            Some(token) => request.header(AUTH_HEADER, token),
            None => request,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_trims_and_clears() {
        let store = MemoryTokenStore::default();
        assert!(store.get().is_none());

        store.set("  secret  ").unwrap();
        assert_eq!(store.get().as_deref(), Some("secret"));

        store.set("   ").unwrap();
        assert!(store.get().is_none());

        store.set("again").unwrap();
        store.clear().unwrap();
        assert!(store.get().is_none());
    }

    #[test]
    fn file_store_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("token"));

        assert!(store.get().is_none());
        store.set("tok-123").unwrap();
        assert_eq!(store.get().as_deref(), Some("tok-123"));

        store.clear().unwrap();
        assert!(store.get().is_none());
        // clearing twice is fine
        store.clear().unwrap();
    }
}
