//! Solve configuration and cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cloneable handle for aborting a running solve from another thread.
///
/// The solver checks the token once per branch expansion, so a cancelled
/// search stops within one node of the signal. A cancelled solve returns
/// [`SolveError::Cancelled`](crate::SolveError::Cancelled).
///
/// # Examples
///
/// ```
/// use exact_assign::CancelToken;
///
/// let token = CancelToken::new();
/// let handle = token.clone();
/// handle.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a fresh, unsignalled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Signals cancellation. Idempotent.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been signalled.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Configuration for a solve call.
///
/// # Examples
///
/// ```
/// use exact_assign::{CancelToken, SolveConfig};
///
/// let token = CancelToken::new();
/// let config = SolveConfig::default().with_cancel_token(token.clone());
/// assert!(config.cancel.is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolveConfig {
    /// Optional cancellation token. `None` means the search runs to
    /// completion unconditionally.
    pub cancel: Option<CancelToken>,
}

impl SolveConfig {
    /// Attaches a cancellation token.
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }
}
