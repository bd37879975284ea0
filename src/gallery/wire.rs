// SPDX-License-Identifier: MPL-2.0
//! JSON shape of the remote list endpoint.

use crate::domain::portfolio::ImageDescriptor;
use crate::error::NetworkError;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ListResponse {
    data: Vec<WireImage>,
}

#[derive(Debug, Deserialize)]
struct WireImage {
    id: String,
    order: i64,
    #[serde(default)]
    description: Option<String>,
}

impl From<WireImage> for ImageDescriptor {
    fn from(image: WireImage) -> Self {
        ImageDescriptor::new(image.id, image.order, image.description.unwrap_or_default())
    }
}

/// Decodes a list response body into descriptors, in service order.
pub(crate) fn decode_list(body: &[u8]) -> Result<Vec<ImageDescriptor>, NetworkError> {
    let response: ListResponse = serde_json::from_slice(body)?;
    Ok(response.data.into_iter().map(ImageDescriptor::from).collect())
}
