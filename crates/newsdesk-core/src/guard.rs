//! Request guard: at most one mutating operation in flight per session.

use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore, TryAcquireError};

/// Single-permit admission control over mutating operations.
///
/// Admission hands out an [`OpPermit`] whose drop releases the guard, so the
/// release happens on every exit path — success, error, or early return —
/// without any explicit bookkeeping at call sites.
#[derive(Clone)]
pub struct RequestGuard {
    permit: Arc<Semaphore>,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self {
            permit: Arc::new(Semaphore::new(1)),
        }
    }

    /// Attempts to start a guarded operation.
    ///
    /// Returns `None` when another operation is outstanding; callers treat
    /// that as a no-op and issue no network call.
    pub fn try_begin(&self) -> Option<OpPermit> {
        match Arc::clone(&self.permit).try_acquire_owned() {
            Ok(permit) => Some(OpPermit { _permit: permit }),
            Err(TryAcquireError::NoPermits) => None,
            // the semaphore is never closed
            Err(TryAcquireError::Closed) => None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.permit.available_permits() == 0
    }
}

impl Default for RequestGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Proof of admission; holding it keeps the guard busy.
pub struct OpPermit {
    _permit: OwnedSemaphorePermit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn second_admission_is_refused_while_held() {
        let guard = RequestGuard::new();
        let permit = guard.try_begin().expect("first admission");
        assert!(guard.is_busy());
        assert!(guard.try_begin().is_none());

        drop(permit);
        assert!(!guard.is_busy());
        assert!(guard.try_begin().is_some());
    }

    #[tokio::test]
    async fn permit_releases_on_error_paths() {
        let guard = RequestGuard::new();

        fn failing_op(guard: &RequestGuard) -> Result<(), &'static str> {
            let _permit = guard.try_begin().ok_or("busy")?;
            Err("boom")
        }

        assert_eq!(failing_op(&guard), Err("boom"));
        // the permit dropped with the early return
        assert!(!guard.is_busy());
    }
}
