//! Single notification channel for operation outcomes.
//!
//! Every failure caught at the guard boundary becomes one human-readable
//! line through a [`Notifier`]. Authentication failures additionally pass a
//! rate-limiting gate so a missing token does not produce a hard error per
//! attempt.

use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Sink for user-visible notices.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Default sink: one line on stderr.
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str) {
        eprintln!("{message}");
    }
}

/// Sink that drops everything; useful when a caller surfaces errors itself.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _message: &str) {}
}

/// Rate gate for repeat notices.
///
/// `admit` answers true at most once per interval; the first call always
/// passes.
pub struct NoticeGate {
    min_interval: Duration,
    last: Mutex<Option<Instant>>,
}

impl NoticeGate {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last: Mutex::new(None),
        }
    }

    pub fn admit(&self) -> bool {
        let Ok(mut last) = self.last.lock() else {
            return true;
        };
        let now = Instant::now();
        match *last {
            Some(prev) if now.duration_since(prev) < self.min_interval => false,
            _ => {
                *last = Some(now);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_admits_first_and_blocks_repeats() {
        let gate = NoticeGate::new(Duration::from_secs(60));
        assert!(gate.admit());
        assert!(!gate.admit());
        assert!(!gate.admit());
    }

    #[test]
    fn zero_interval_always_admits() {
        let gate = NoticeGate::new(Duration::ZERO);
        assert!(gate.admit());
        assert!(gate.admit());
    }
}
