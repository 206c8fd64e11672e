//! Request identity for abandoning stale pairing runs.
//!
//! Every new query takes a token from [`RequestGenerations::begin`],
//! which supersedes all earlier tokens. A running job checks its token
//! before each chunk and stops quietly once it is no longer current.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// Issues request tokens; the newest one wins
#[derive(Debug, Clone, Default)]
pub struct RequestGenerations {
    current: Arc<AtomicU64>,
}

impl RequestGenerations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding every token issued before it
    pub fn begin(&self) -> RequestToken {
        let id = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        RequestToken {
            id,
            current: Some(Arc::clone(&self.current)),
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Supersede every outstanding token without starting a new request
    pub fn invalidate(&self) {
        self.current.fetch_add(1, Ordering::SeqCst);
    }
}

/// Handle checked by a pairing job before resuming
#[derive(Debug, Clone)]
pub struct RequestToken {
    id: u64,
    current: Option<Arc<AtomicU64>>,
    cancelled: Arc<AtomicBool>,
}

impl RequestToken {
    /// Token that is never superseded, only explicitly cancelled
    pub fn detached() -> Self {
        Self {
            id: 0,
            current: None,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Cancel this request; clones of the token observe it too
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// False once cancelled or superseded by a newer request
    pub fn is_current(&self) -> bool {
        if self.cancelled.load(Ordering::SeqCst) {
            return false;
        }
        match &self.current {
            Some(current) => current.load(Ordering::SeqCst) == self.id,
            None => true,
        }
    }
}

impl Default for RequestToken {
    fn default() -> Self {
        Self::detached()
    }
}
