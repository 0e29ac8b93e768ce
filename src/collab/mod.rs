//! External collaborators consumed by the wizards.
//!
//! The host application implements the traits here (geocoding, place
//! autocomplete, image picking, map rendering). The wrappers in this module
//! add what every caller needs on top:
//!
//! - a fixed timeout on each call, with expiry read as "no result"
//! - supersession by [`RequestToken`], so a slow, older response can never
//!   replace a newer one
//! - failure isolation: errors are logged and dropped, never surfaced to
//!   the wizard state machine

mod geocode;
mod images;
mod search;
mod token;
mod viewport;

pub use geocode::{apply_placemark, Geocoder, LocationSync, Placemark};
pub use images::{decode_image, load_images, ImagePicker};
pub use search::{Autocomplete, Completion, CompletionToken, PlaceSearch, QueryOutcome, Suggestions};
pub use token::{LatestRequest, RequestToken};
pub use viewport::{MapRenderer, Viewport};

use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// Failure reported by a collaborator.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CollaboratorError {
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Nothing found")]
    NotFound,

    #[error("Could not decode image: {0}")]
    Decode(String),
}

/// Run a collaborator call under `limit`, mapping failure and expiry to `None`.
pub(crate) async fn bounded<T, F>(limit: Duration, collaborator: &'static str, call: F) -> Option<T>
where
    F: Future<Output = Result<T, CollaboratorError>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(Ok(value)) => Some(value),
        Ok(Err(error)) => {
            tracing::warn!(collaborator, %error, "collaborator call failed");
            None
        }
        Err(_) => {
            tracing::warn!(
                collaborator,
                timeout_ms = limit.as_millis() as u64,
                "collaborator call timed out"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bounded_passes_values_through() {
        let value = bounded(Duration::from_secs(1), "test", async { Ok::<_, CollaboratorError>(7) }).await;
        assert_eq!(value, Some(7));
    }

    #[tokio::test]
    async fn bounded_swallows_errors() {
        let value: Option<u8> = bounded(Duration::from_secs(1), "test", async {
            Err(CollaboratorError::Unavailable("offline".into()))
        })
        .await;
        assert_eq!(value, None);
    }

    #[tokio::test(start_paused = true)]
    async fn bounded_treats_expiry_as_none() {
        let value = bounded(Duration::from_millis(50), "test", async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok::<_, CollaboratorError>(1)
        })
        .await;
        assert_eq!(value, None);
    }
}
