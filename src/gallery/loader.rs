// SPDX-License-Identifier: MPL-2.0
//! One-shot loading of the gallery from the remote service.
//!
//! [`fetch_all`] performs the request (with optional bounded retry) and is
//! meant to run as a background task. [`GalleryLoader`] is the synchronous
//! side owned by the view: it hands out a [`LoadTicket`] when the fetch
//! starts and only accepts a result carrying the current ticket, so a result
//! that arrives after the view was torn down is dropped instead of applied.

use super::{wire, Gallery};
use crate::config::defaults::{
    DEFAULT_MAX_BACKOFF_MS, DEFAULT_RETRY_BACKOFF_MS, DEFAULT_RETRY_COUNT,
};
use crate::error::NetworkError;
use crate::media::RemoteService;
use std::time::Duration;

// =============================================================================
// Retry Policy
// =============================================================================

/// Bounded exponential backoff for the list fetch.
///
/// The default performs a single attempt and never retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Number of additional attempts after the first failure.
    pub max_retries: u32,
    /// Delay before the first retry. Doubles on every further retry.
    pub initial_backoff: Duration,
    /// Upper bound for a single delay.
    pub max_backoff: Duration,
}

impl RetryPolicy {
    /// Single attempt, no retry.
    #[must_use]
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Delay to wait before retry number `retry` (zero-based).
    #[must_use]
    pub fn backoff_for(&self, retry: u32) -> Duration {
        let factor = 2u32.saturating_pow(retry);
        self.initial_backoff
            .saturating_mul(factor)
            .min(self.max_backoff)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_RETRY_COUNT,
            initial_backoff: Duration::from_millis(DEFAULT_RETRY_BACKOFF_MS),
            max_backoff: Duration::from_millis(DEFAULT_MAX_BACKOFF_MS),
        }
    }
}

// =============================================================================
// Fetch
// =============================================================================

/// Fetches and validates the complete ordered image list.
///
/// # Errors
///
/// Returns the last [`NetworkError`] once every attempt allowed by `retry`
/// has failed.
pub async fn fetch_all(service: RemoteService, retry: RetryPolicy) -> Result<Gallery, NetworkError> {
    let mut attempt = 0;
    loop {
        match fetch_once(&service).await {
            Ok(gallery) => return Ok(gallery),
            Err(err) if attempt < retry.max_retries => {
                let delay = retry.backoff_for(attempt);
                tracing::warn!(
                    error = %err,
                    attempt = attempt + 1,
                    delay_ms = delay.as_millis() as u64,
                    "gallery fetch failed, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

async fn fetch_once(service: &RemoteService) -> Result<Gallery, NetworkError> {
    let body = service.fetch_list_body().await?;
    let descriptors = wire::decode_list(&body)?;
    Gallery::from_descriptors(descriptors)
}

// =============================================================================
// Loader State
// =============================================================================

/// Identifies one fetch started by a [`GalleryLoader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

/// Where the gallery of the current view stands.
#[derive(Debug, Clone, Default)]
pub enum GalleryStatus {
    /// Fetch not started yet.
    #[default]
    Idle,
    /// Fetch in flight.
    Loading,
    /// Fetch succeeded. The gallery may still be empty.
    Ready(Gallery),
    /// Fetch failed. Rendered like an empty gallery.
    Failed(NetworkError),
}

/// View-side owner of the gallery fetch.
#[derive(Debug, Default)]
pub struct GalleryLoader {
    status: GalleryStatus,
    generation: u64,
    cancelled: bool,
}

impl GalleryLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the fetch as started and returns its ticket.
    ///
    /// Returns `None` if a fetch was already started for this view or the
    /// loader has been cancelled: the list is fetched exactly once.
    pub fn begin(&mut self) -> Option<LoadTicket> {
        if self.cancelled || !matches!(self.status, GalleryStatus::Idle) {
            return None;
        }
        self.generation += 1;
        self.status = GalleryStatus::Loading;
        Some(LoadTicket {
            generation: self.generation,
        })
    }

    /// Applies a fetch result.
    ///
    /// Returns the accepted gallery, or `None` if the result was discarded
    /// (stale ticket, cancelled loader) or the fetch failed.
    pub fn finish(
        &mut self,
        ticket: LoadTicket,
        result: Result<Gallery, NetworkError>,
    ) -> Option<&Gallery> {
        if !self.is_live(ticket) {
            tracing::debug!("discarding gallery result for a stale load");
            return None;
        }

        match result {
            Ok(gallery) => {
                tracing::info!(images = gallery.len(), "gallery loaded");
                self.status = GalleryStatus::Ready(gallery);
            }
            Err(err) => {
                tracing::warn!(error = %err, "gallery fetch failed, rendering empty gallery");
                self.status = GalleryStatus::Failed(err);
            }
        }

        match &self.status {
            GalleryStatus::Ready(gallery) => Some(gallery),
            _ => None,
        }
    }

    /// Invalidates every outstanding ticket. Called when the owning view is
    /// torn down.
    pub fn cancel(&mut self) {
        self.cancelled = true;
        self.generation += 1;
    }

    /// Whether a result carrying `ticket` would still be applied.
    #[must_use]
    pub fn is_live(&self, ticket: LoadTicket) -> bool {
        !self.cancelled && ticket.generation == self.generation
    }

    #[must_use]
    pub fn status(&self) -> &GalleryStatus {
        &self.status
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.status, GalleryStatus::Loading)
    }

    /// The gallery to render: the fetched one, or an empty one before
    /// success and after failure.
    #[must_use]
    pub fn gallery(&self) -> Gallery {
        match &self.status {
            GalleryStatus::Ready(gallery) => gallery.clone(),
            _ => Gallery::empty(),
        }
    }
}
