//! Reverse geocoding of a picked map location.

use super::{bounded, CollaboratorError, LatestRequest};
use crate::config::WizardConfig;
use crate::draft::{Coordinate, Draft, Field};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;

/// City and country found for a coordinate.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placemark {
    pub city: Option<String>,
    pub country: Option<String>,
}

/// Reverse geocoding service.
pub trait Geocoder {
    fn reverse_geocode(
        &self,
        coordinate: Coordinate,
    ) -> impl Future<Output = Result<Placemark, CollaboratorError>> + Send;
}

/// Keeps a draft's city/country in step with the selected map location.
///
/// Each call to [`locate`](Self::locate) supersedes the previous one: if
/// the user drags the map again before the first lookup returns, the first
/// result is dropped.
pub struct LocationSync<G> {
    geocoder: G,
    requests: LatestRequest,
    timeout: Duration,
}

impl<G: Geocoder> LocationSync<G> {
    pub fn new(geocoder: G, timeout: Duration) -> Self {
        Self {
            geocoder,
            requests: LatestRequest::new(),
            timeout,
        }
    }

    pub fn with_config(geocoder: G, config: &WizardConfig) -> Self {
        Self::new(geocoder, config.collaborator_timeout())
    }

    /// Look up `coordinate`.
    ///
    /// Returns `None` on failure, on timeout, or when a newer lookup was
    /// started while this one was in flight.
    pub async fn locate(&self, coordinate: Coordinate) -> Option<Placemark> {
        let token = self.requests.issue();
        let placemark = bounded(
            self.timeout,
            "geocoder",
            self.geocoder.reverse_geocode(coordinate),
        )
        .await?;

        if !self.requests.is_current(token) {
            tracing::debug!(token = token.value(), "dropping superseded geocode result");
            return None;
        }
        Some(placemark)
    }
}

/// Write a lookup result into the draft.
///
/// The coordinate is always stored; city and country only overwrite the
/// draft when the placemark has them.
pub fn apply_placemark(draft: &mut Draft, coordinate: Coordinate, placemark: &Placemark) {
    draft.set_coordinate(Field::Coordinate, coordinate);
    if let Some(city) = &placemark.city {
        draft.set_text(Field::City, city.clone());
    }
    if let Some(country) = &placemark.country {
        draft.set_text(Field::Country, country.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::Notify;

    struct FixedGeocoder(Result<Placemark, CollaboratorError>);

    impl Geocoder for FixedGeocoder {
        async fn reverse_geocode(
            &self,
            _coordinate: Coordinate,
        ) -> Result<Placemark, CollaboratorError> {
            self.0.clone()
        }
    }

    /// Answers with the coordinate's latitude as the city, after waiting on
    /// `gate` for the first call only.
    struct GatedGeocoder {
        gate: Arc<Notify>,
    }

    impl Geocoder for GatedGeocoder {
        async fn reverse_geocode(
            &self,
            coordinate: Coordinate,
        ) -> Result<Placemark, CollaboratorError> {
            if coordinate.latitude < 0.0 {
                self.gate.notified().await;
            }
            Ok(Placemark {
                city: Some(format!("{}", coordinate.latitude)),
                country: None,
            })
        }
    }

    fn lisbon() -> Placemark {
        Placemark {
            city: Some("Lisbon".into()),
            country: Some("Portugal".into()),
        }
    }

    #[tokio::test]
    async fn locate_returns_placemark() {
        let sync = LocationSync::new(FixedGeocoder(Ok(lisbon())), Duration::from_secs(1));
        let found = sync.locate(Coordinate::new(38.72, -9.14)).await;
        assert_eq!(found, Some(lisbon()));
    }

    #[tokio::test]
    async fn failure_means_no_update() {
        let sync = LocationSync::new(
            FixedGeocoder(Err(CollaboratorError::NotFound)),
            Duration::from_secs(1),
        );
        assert_eq!(sync.locate(Coordinate::new(0.0, 0.0)).await, None);
    }

    #[tokio::test]
    async fn superseded_lookup_is_dropped() {
        let gate = Arc::new(Notify::new());
        let sync = LocationSync::new(
            GatedGeocoder { gate: gate.clone() },
            Duration::from_secs(5),
        );

        let slow = sync.locate(Coordinate::new(-33.9, 18.4));
        let fast = async {
            let result = sync.locate(Coordinate::new(41.1, -8.6)).await;
            gate.notify_one();
            result
        };
        let (slow, fast) = tokio::join!(slow, fast);

        assert_eq!(slow, None);
        assert_eq!(fast.and_then(|p| p.city).as_deref(), Some("41.1"));
    }

    #[test]
    fn apply_placemark_keeps_existing_when_missing() {
        let mut draft = Draft::new();
        draft.set_text(Field::Country, "Portugal");
        let coordinate = Coordinate::new(41.15, -8.61);

        apply_placemark(
            &mut draft,
            coordinate,
            &Placemark {
                city: Some("Porto".into()),
                country: None,
            },
        );

        assert_eq!(draft.coordinate(Field::Coordinate), Some(coordinate));
        assert_eq!(draft.text(Field::City), "Porto");
        assert_eq!(draft.text(Field::Country), "Portugal");
    }
}
