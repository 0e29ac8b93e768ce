//! Request tokens for dropping superseded async results.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one collaborator request. Later requests get larger tokens.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize,
)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Issues monotonically increasing tokens and remembers the newest.
///
/// Only the result of the most recently issued request is current; a
/// result arriving for an older token is stale and must be dropped, even
/// when the newer request has not resolved yet.
///
/// # Example
///
/// ```rust
/// use trailhead::collab::LatestRequest;
///
/// let requests = LatestRequest::new();
/// let first = requests.issue();
/// let second = requests.issue();
///
/// assert!(second > first);
/// assert!(!requests.is_current(first));
/// assert!(requests.is_current(second));
/// ```
#[derive(Debug, Default)]
pub struct LatestRequest {
    issued: AtomicU64,
}

impl LatestRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token for a new request, superseding all earlier ones.
    pub fn issue(&self) -> RequestToken {
        RequestToken(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Most recently issued token.
    pub fn latest(&self) -> RequestToken {
        RequestToken(self.issued.load(Ordering::SeqCst))
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token == self.latest()
    }
}
