// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Translation files live in `assets/i18n/` and are embedded into the binary.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Argument interpolation for server-supplied text
//! - Fallback to `en-US` when a locale is unavailable

pub mod fluent;
