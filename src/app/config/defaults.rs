// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Server**: Backend location and request timeout bounds
//! - **Notifications**: Toast auto-dismiss timing
//! - **Gallery**: Image preview cache sizing

// ==========================================================================
// Server Defaults
// ==========================================================================

/// Default backend base URL (the backend's development server address).
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

/// Environment variable overriding the backend base URL.
pub const ENV_SERVER_URL: &str = "CAMPAIGN_STUDIO_SERVER";

/// Minimum request timeout when one is configured (in seconds).
pub const MIN_TIMEOUT_SECS: u64 = 5;

/// Maximum request timeout when one is configured (in seconds).
/// Creative generation can take several minutes.
pub const MAX_TIMEOUT_SECS: u64 = 3600;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default auto-dismiss delay for every notification (in seconds).
pub const DEFAULT_NOTIFICATION_DISMISS_SECS: u64 = 8;

/// Minimum auto-dismiss delay (in seconds).
pub const MIN_NOTIFICATION_DISMISS_SECS: u64 = 1;

/// Maximum auto-dismiss delay (in seconds).
pub const MAX_NOTIFICATION_DISMISS_SECS: u64 = 120;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default number of decoded image previews kept in memory.
pub const DEFAULT_IMAGE_CACHE_CAPACITY: usize = 64;

/// Minimum image preview cache capacity.
pub const MIN_IMAGE_CACHE_CAPACITY: usize = 8;

/// Maximum image preview cache capacity.
pub const MAX_IMAGE_CACHE_CAPACITY: usize = 1024;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_TIMEOUT_SECS > 0);
    assert!(MAX_TIMEOUT_SECS > MIN_TIMEOUT_SECS);

    assert!(MIN_NOTIFICATION_DISMISS_SECS > 0);
    assert!(DEFAULT_NOTIFICATION_DISMISS_SECS >= MIN_NOTIFICATION_DISMISS_SECS);
    assert!(DEFAULT_NOTIFICATION_DISMISS_SECS <= MAX_NOTIFICATION_DISMISS_SECS);

    assert!(MIN_IMAGE_CACHE_CAPACITY > 0);
    assert!(DEFAULT_IMAGE_CACHE_CAPACITY >= MIN_IMAGE_CACHE_CAPACITY);
    assert!(DEFAULT_IMAGE_CACHE_CAPACITY <= MAX_IMAGE_CACHE_CAPACITY);
};
