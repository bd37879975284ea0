// SPDX-License-Identifier: MPL-2.0
//! Remote image access for display.
//!
//! Image bytes are fetched on demand for whatever is currently displayed and
//! handed straight to the toolkit. Nothing here keeps bytes around once the
//! owning view drops its handle.

pub mod remote;

pub use remote::RemoteService;

use crate::domain::portfolio::ImageId;
use crate::error::NetworkError;
use iced::widget::image;

/// Encoded image ready to be rendered, tagged with the id it was fetched for.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub id: ImageId,
    pub handle: image::Handle,
}

impl ImageData {
    /// Wraps encoded bytes (JPEG, PNG, ...). Decoding happens in the renderer.
    #[must_use]
    pub fn from_encoded(id: ImageId, bytes: Vec<u8>) -> Self {
        Self {
            id,
            handle: image::Handle::from_bytes(bytes),
        }
    }
}

/// Display state of one remote image.
#[derive(Debug, Clone, Default)]
pub enum RemoteImage {
    #[default]
    Loading,
    Loaded(image::Handle),
    /// Broken image. Rendered as a placeholder.
    Failed,
}

impl RemoteImage {
    #[must_use]
    pub fn handle(&self) -> Option<&image::Handle> {
        match self {
            RemoteImage::Loaded(handle) => Some(handle),
            RemoteImage::Loading | RemoteImage::Failed => None,
        }
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, RemoteImage::Failed)
    }
}

impl From<Result<ImageData, NetworkError>> for RemoteImage {
    fn from(result: Result<ImageData, NetworkError>) -> Self {
        match result {
            Ok(data) => RemoteImage::Loaded(data.handle),
            Err(_) => RemoteImage::Failed,
        }
    }
}

/// Fetches the bytes of one image.
///
/// # Errors
///
/// Returns a [`NetworkError`] if the request fails. Callers treat this as a
/// broken image: it never affects navigation state.
pub async fn load_image(service: RemoteService, id: ImageId) -> Result<ImageData, NetworkError> {
    let bytes = service.fetch_image_bytes(id.as_str()).await?;
    Ok(ImageData::from_encoded(id, bytes))
}
