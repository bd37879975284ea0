// SPDX-License-Identifier: MPL-2.0
//! HTTP access to the portfolio service.
//!
//! The service exposes two endpoints relative to its base address:
//! - `GET /?allImages=true` returns the ordered image list
//! - `GET /images/{id}` returns the raw bytes of one image

use crate::config::defaults::USER_AGENT;
use crate::error::NetworkError;
use reqwest::Url;
use std::time::Duration;

/// Cheaply clonable handle to the remote service.
#[derive(Debug, Clone)]
pub struct RemoteService {
    client: reqwest::Client,
    base_url: Url,
}

impl RemoteService {
    /// Creates a service handle for the given base address.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::InvalidAddress`] if `base_url` does not parse,
    /// or [`NetworkError::Unreachable`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, request_timeout: Duration) -> Result<Self, NetworkError> {
        let base_url = parse_base_url(base_url)?;
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .timeout(request_timeout)
            .build()
            .map_err(|e| NetworkError::Unreachable(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of the full list request.
    #[must_use]
    pub fn list_url(&self) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("allImages", "true");
        url
    }

    /// URL of the bytes of one image.
    #[must_use]
    pub fn image_url(&self, id: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("images").push(id);
        }
        url
    }

    /// Fetches the raw list response body.
    ///
    /// # Errors
    ///
    /// Returns a [`NetworkError`] on transport failure or non-success status.
    pub async fn fetch_list_body(&self) -> Result<Vec<u8>, NetworkError> {
        self.get_bytes(self.list_url()).await
    }

    /// Fetches the encoded bytes of one image.
    ///
    /// # Errors
    ///
    /// Returns a [`NetworkError`] on transport failure or non-success status.
    pub async fn fetch_image_bytes(&self, id: &str) -> Result<Vec<u8>, NetworkError> {
        self.get_bytes(self.image_url(id)).await
    }

    async fn get_bytes(&self, url: Url) -> Result<Vec<u8>, NetworkError> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(NetworkError::Status(response.status().as_u16()));
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

/// Parses a base address so that relative joins keep its path.
fn parse_base_url(raw: &str) -> Result<Url, NetworkError> {
    let mut url = Url::parse(raw.trim()).map_err(|e| NetworkError::InvalidAddress(e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(NetworkError::InvalidAddress(format!(
            "{raw} cannot be used as a base address"
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(base: &str) -> RemoteService {
        RemoteService::new(base, Duration::from_secs(5)).expect("valid service")
    }

    #[test]
    fn list_url_carries_all_images_flag() {
        let service = service("https://backend.example.com");
        assert_eq!(
            service.list_url().as_str(),
            "https://backend.example.com/?allImages=true"
        );
    }

    #[test]
    fn image_url_appends_id_segment() {
        let service = service("https://backend.example.com/");
        assert_eq!(
            service.image_url("abc123").as_str(),
            "https://backend.example.com/images/abc123"
        );
    }

    #[test]
    fn base_path_is_preserved() {
        let service = service("http://127.0.0.1:8080/portfolio");
        assert_eq!(
            service.image_url("x").as_str(),
            "http://127.0.0.1:8080/portfolio/images/x"
        );
        assert_eq!(
            service.list_url().as_str(),
            "http://127.0.0.1:8080/portfolio/?allImages=true"
        );
    }

    #[test]
    fn image_id_is_percent_encoded() {
        let service = service("https://backend.example.com/");
        assert_eq!(
            service.image_url("a b").as_str(),
            "https://backend.example.com/images/a%20b"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = RemoteService::new("not a url", Duration::from_secs(1));
        assert!(matches!(result, Err(NetworkError::InvalidAddress(_))));
    }

    #[test]
    fn non_base_url_is_rejected() {
        let result = RemoteService::new("mailto:someone@example.com", Duration::from_secs(1));
        assert!(matches!(result, Err(NetworkError::InvalidAddress(_))));
    }
}
