//! Cancellation-guarded dataset loading.
//!
//! A view opens a [`ViewScope`] when it mounts and retires it exactly once at
//! teardown. Loads run through [`load_guarded`], which lets the in-flight
//! request complete and then discards its outcome if the scope was retired in
//! the meantime. Nothing here aborts the request itself.

use std::future::Future;
use tokio_util::sync::CancellationToken;

/// Liveness scope owned by a view instance.
///
/// Live from creation until [`retire`](Self::retire); the transition happens
/// at most once and is never reset. Clones observe the same scope.
#[derive(Debug, Clone, Default)]
pub struct ViewScope {
    token: CancellationToken,
}

impl ViewScope {
    /// A fresh, live scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the owning view is still mounted.
    pub fn is_live(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Mark the owning view as gone. Idempotent.
    pub fn retire(&self) {
        self.token.cancel();
    }
}

/// State of one load attempt.
///
/// `Loaded` and `Failed` are terminal for the attempt; a fresh mount starts a
/// new cycle. A load whose outcome was discarded (scope retired mid-flight)
/// stays `Loading`; no timeout is enforced here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// No load attempted yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The dataset was replaced by a successful fetch.
    Loaded,
    /// The fetch failed and the dataset was emptied.
    Failed(String),
}

impl LoadState {
    /// Whether a fetch is currently in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The user-visible error message, if the last attempt failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Await `producer` to completion, then hand back its outcome only if `scope`
/// is still live.
///
/// `None` means the view went away while the fetch was in flight: the caller
/// must not touch its state. The producer is always polled to completion, so
/// the underlying request is never aborted.
pub async fn load_guarded<T, E>(
    scope: &ViewScope,
    producer: impl Future<Output = Result<T, E>>,
) -> Option<Result<T, E>> {
    let outcome = producer.await;
    scope.is_live().then_some(outcome)
}
