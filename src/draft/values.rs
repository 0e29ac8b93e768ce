//! Value types stored in draft fields and finished records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A WGS84 latitude/longitude pair in degrees.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check that both components are finite and inside their ranges.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Encoded image formats recognised by the image loader.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    WebP,
    Heic,
}

/// Reference to a displayable image.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum ImageRef {
    /// Stand-in shown when a record has no photo
    Placeholder { name: String },
    /// Bundled or remote asset addressed by name/url
    Asset { name: String },
    /// Image picked and decoded on the device
    Picked {
        id: Uuid,
        format: ImageFormat,
        byte_len: usize,
    },
}

impl ImageRef {
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self::Placeholder { name: name.into() }
    }

    pub fn asset(name: impl Into<String>) -> Self {
        Self::Asset { name: name.into() }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_validity() {
        assert!(Coordinate::new(38.7223, -9.1393).is_valid());
        assert!(!Coordinate::new(91.0, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, -180.5).is_valid());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn image_ref_serializes_with_source_tag() {
        let json = serde_json::to_value(ImageRef::placeholder("photo")).unwrap();
        assert_eq!(json["source"], "placeholder");
        assert_eq!(json["name"], "photo");
    }

    #[test]
    fn placeholder_detection() {
        assert!(ImageRef::placeholder("x").is_placeholder());
        assert!(!ImageRef::asset("lisbon.jpg").is_placeholder());
    }
}
