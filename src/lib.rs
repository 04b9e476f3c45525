// SPDX-License-Identifier: MPL-2.0
//! `campaign_studio` is a desktop client for a creative-generation backend,
//! built with the Iced GUI framework.
//!
//! It lets a marketer browse every generated campaign in a gallery and
//! submit new campaign briefs, optionally with base images, then preview
//! and download the creatives the backend produces.

pub mod api;
pub mod app;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
