//! Loading picked photos into image references.

use super::CollaboratorError;
use crate::draft::{ImageFormat, ImageRef};
use std::future::Future;
use std::time::Duration;
use uuid::Uuid;

/// Device photo picker.
pub trait ImagePicker {
    /// Raw bytes of every selected item, in selection order.
    fn load_selected(
        &self,
    ) -> impl Future<Output = Vec<Result<Vec<u8>, CollaboratorError>>> + Send;
}

const SIGNATURES: &[(&[u8], ImageFormat)] = &[
    (b"\x89PNG\r\n\x1a\n", ImageFormat::Png),
    (b"\xff\xd8\xff", ImageFormat::Jpeg),
    (b"GIF87a", ImageFormat::Gif),
    (b"GIF89a", ImageFormat::Gif),
];

fn sniff(bytes: &[u8]) -> Option<ImageFormat> {
    if let Some((_, format)) = SIGNATURES.iter().find(|(magic, _)| bytes.starts_with(magic)) {
        return Some(*format);
    }
    // RIFF container: "RIFF" <size> "WEBP"
    if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        return Some(ImageFormat::WebP);
    }
    // ISO-BMFF: <size> "ftyp" <brand>
    if bytes.len() >= 12
        && &bytes[4..8] == b"ftyp"
        && matches!(&bytes[8..12], b"heic" | b"heix" | b"mif1" | b"msf1")
    {
        return Some(ImageFormat::Heic);
    }
    None
}

/// Recognise an encoded image and give it a fresh reference.
pub fn decode_image(bytes: &[u8]) -> Result<ImageRef, CollaboratorError> {
    if bytes.is_empty() {
        return Err(CollaboratorError::Decode("empty payload".into()));
    }
    let format = sniff(bytes)
        .ok_or_else(|| CollaboratorError::Decode("unrecognised image format".into()))?;
    Ok(ImageRef::Picked {
        id: Uuid::new_v4(),
        format,
        byte_len: bytes.len(),
    })
}

/// Load and decode the picker's selection.
///
/// Items that fail to load or decode are skipped; the rest keep their
/// order. A picker that does not answer within `limit` yields nothing.
pub async fn load_images<P: ImagePicker>(picker: &P, limit: Duration) -> Vec<ImageRef> {
    let Ok(items) = tokio::time::timeout(limit, picker.load_selected()).await else {
        tracing::warn!(
            timeout_ms = limit.as_millis() as u64,
            "image picker timed out"
        );
        return Vec::new();
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match item.and_then(|bytes| decode_image(&bytes)) {
            Ok(image) => Some(image),
            Err(error) => {
                tracing::warn!(index, %error, "skipping picked image");
                None
            }
        })
        .collect()
}
