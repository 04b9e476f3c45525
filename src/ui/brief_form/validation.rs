// SPDX-License-Identifier: MPL-2.0
//! Client-side checks run before a brief is sent.

use crate::domain::{Brief, ImageSlot};
use crate::ui::notifications::Notification;
use std::fmt;
use std::path::PathBuf;

/// Why a brief was not sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// No product row has both a name and a description.
    NoProducts,
    /// A base image was chosen without a description.
    MissingImageDescription(ImageSlot),
}

impl ValidationError {
    /// i18n key of the notification reporting this error.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ValidationError::NoProducts => "notification-no-products",
            ValidationError::MissingImageDescription(_) => "notification-missing-image-description",
        }
    }

    /// Error notification naming the offending slot, if any.
    #[must_use]
    pub fn notification(self) -> Notification {
        let notification = Notification::error(self.i18n_key());
        match self {
            ValidationError::NoProducts => notification,
            ValidationError::MissingImageDescription(slot) => {
                notification.with_arg("number", slot.number().to_string())
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NoProducts => {
                write!(f, "Please add at least one product with a description.")
            }
            ValidationError::MissingImageDescription(slot) => {
                write!(f, "Please provide a description for Base Image {slot}.")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// A base image whose bytes still have to be read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingImage {
    pub slot: ImageSlot,
    pub path: PathBuf,
    pub description: String,
}

/// A brief that passed validation, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedBrief {
    pub brief: Brief,
    pub images: Vec<PendingImage>,
}
