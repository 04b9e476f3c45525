// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`gallery`] - Generated campaigns grouped by campaign name
//! - [`brief_form`] - Campaign brief entry, submission and results
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (image card)
//! - [`image_cache`] - LRU cache of decoded previews
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`navbar`] - Screen tabs
//! - [`notifications`] - Toast notification system for user feedback

pub mod brief_form;
pub mod components;
pub mod design_tokens;
pub mod gallery;
pub mod image_cache;
pub mod navbar;
pub mod notifications;
pub mod styles;
pub mod theming;
