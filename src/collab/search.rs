//! Search-as-you-type place autocomplete.

use super::{bounded, CollaboratorError, LatestRequest, RequestToken};
use crate::config::WizardConfig;
use crate::draft::Coordinate;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use tokio::sync::watch;

/// Opaque handle the search service uses to resolve a completion.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompletionToken(pub String);

/// One autocomplete suggestion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub title: String,
    pub subtitle: String,
    pub token: CompletionToken,
}

/// Place/address autocomplete service.
pub trait PlaceSearch {
    /// Suggestions for a partially typed query.
    fn search(
        &self,
        fragment: &str,
    ) -> impl Future<Output = Result<Vec<Completion>, CollaboratorError>> + Send;

    /// Resolve a suggestion to a concrete location.
    fn resolve(
        &self,
        token: &CompletionToken,
    ) -> impl Future<Output = Result<Coordinate, CollaboratorError>> + Send;
}

/// The suggestion list currently shown to the user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Suggestions {
    /// Request that produced this list
    pub token: RequestToken,
    pub query: String,
    pub items: Vec<Completion>,
}

/// What happened to a query's results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryOutcome {
    /// Results (possibly none) replaced the visible list
    Applied { count: usize },
    /// The fragment was blank; the list was emptied without a search
    Cleared,
    /// A newer query was issued first; results were dropped
    Superseded,
}

/// Autocomplete front-end that only ever shows the newest query's results.
///
/// Visible suggestions are published through a `watch` channel so UI code
/// can subscribe to changes.
pub struct Autocomplete<S> {
    service: S,
    requests: LatestRequest,
    board: watch::Sender<Suggestions>,
    timeout: Duration,
}

impl<S: PlaceSearch> Autocomplete<S> {
    pub fn new(service: S, timeout: Duration) -> Self {
        let (board, _) = watch::channel(Suggestions::default());
        Self {
            service,
            requests: LatestRequest::new(),
            board,
            timeout,
        }
    }

    pub fn with_config(service: S, config: &WizardConfig) -> Self {
        Self::new(service, config.collaborator_timeout())
    }

    pub fn subscribe(&self) -> watch::Receiver<Suggestions> {
        self.board.subscribe()
    }

    /// Snapshot of the visible suggestions.
    pub fn current(&self) -> Suggestions {
        self.board.borrow().clone()
    }

    /// Run a query for `fragment`, superseding every earlier query.
    ///
    /// Failures and timeouts publish an empty list rather than an error.
    pub async fn query(&self, fragment: &str) -> QueryOutcome {
        let token = self.requests.issue();
        let fragment = fragment.trim();

        if fragment.is_empty() {
            return if self.publish(token, String::new(), Vec::new()) {
                QueryOutcome::Cleared
            } else {
                QueryOutcome::Superseded
            };
        }

        let items = bounded(self.timeout, "place_search", self.service.search(fragment))
            .await
            .unwrap_or_default();
        let count = items.len();

        if self.publish(token, fragment.to_string(), items) {
            QueryOutcome::Applied { count }
        } else {
            QueryOutcome::Superseded
        }
    }

    /// Resolve a picked suggestion. `None` on failure or timeout.
    pub async fn resolve(&self, completion: &Completion) -> Option<Coordinate> {
        bounded(
            self.timeout,
            "place_resolve",
            self.service.resolve(&completion.token),
        )
        .await
    }

    /// Publish results unless a newer request exists or already published.
    fn publish(&self, token: RequestToken, query: String, items: Vec<Completion>) -> bool {
        if !self.requests.is_current(token) {
            tracing::debug!(token = token.value(), "dropping superseded suggestions");
            return false;
        }
        self.board.send_if_modified(|visible| {
            if token <= visible.token {
                return false;
            }
            *visible = Suggestions {
                token,
                query,
                items,
            };
            true
        })
    }
}
