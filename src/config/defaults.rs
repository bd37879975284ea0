// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Service**: Remote portfolio service address and HTTP behaviour
//! - **Loader**: Retry policy for the initial list fetch
//! - **Display**: Grid and overlay presentation

// ==========================================================================
// Service Defaults
// ==========================================================================

/// Base address of the portfolio service.
pub const DEFAULT_BASE_URL: &str = "https://backend.xsalazar.com/";

/// Timeout for a single HTTP request (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Minimum request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("IcedFolio/", env!("CARGO_PKG_VERSION"));

// ==========================================================================
// Loader Defaults
// ==========================================================================

/// Retries after a failed list fetch. Zero keeps the fetch single-shot.
pub const DEFAULT_RETRY_COUNT: u32 = 0;

/// Maximum number of retries accepted from the config file.
pub const MAX_RETRY_COUNT: u32 = 10;

/// Delay before the first retry (in milliseconds).
pub const DEFAULT_RETRY_BACKOFF_MS: u64 = 500;

/// Upper bound for a single retry delay (in milliseconds).
pub const DEFAULT_MAX_BACKOFF_MS: u64 = 8_000;

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Viewports narrower than this (logical pixels) use the compact layout,
/// where clicking a grid item does not open the overlay.
pub const DEFAULT_COMPACT_WIDTH_THRESHOLD: f32 = 600.0;

/// Edge length of a grid thumbnail (logical pixels).
pub const DEFAULT_THUMBNAIL_SIZE: f32 = 256.0;

/// Minimum thumbnail edge length.
pub const MIN_THUMBNAIL_SIZE: f32 = 64.0;

/// Maximum thumbnail edge length.
pub const MAX_THUMBNAIL_SIZE: f32 = 1024.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_timeout_bounds_are_ordered() {
        assert!(MIN_REQUEST_TIMEOUT_SECS <= DEFAULT_REQUEST_TIMEOUT_SECS);
        assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn thumbnail_bounds_are_ordered() {
        assert!(MIN_THUMBNAIL_SIZE <= DEFAULT_THUMBNAIL_SIZE);
        assert!(DEFAULT_THUMBNAIL_SIZE <= MAX_THUMBNAIL_SIZE);
    }

    #[test]
    fn retry_defaults_are_single_shot() {
        assert_eq!(DEFAULT_RETRY_COUNT, 0);
        assert!(DEFAULT_RETRY_BACKOFF_MS <= DEFAULT_MAX_BACKOFF_MS);
    }

    #[test]
    fn user_agent_names_the_app() {
        assert!(USER_AGENT.starts_with("IcedFolio/"));
    }
}
