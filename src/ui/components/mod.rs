// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across multiple screens.
//!
//! # Components
//!
//! - [`card`] - Image card with preview, label and download action

pub mod card;
