// SPDX-License-Identifier: MPL-2.0
//! Messages and events of the brief form.

use super::validation::ValidatedBrief;
use crate::api::{ApiError, BriefOutcome};
use crate::domain::ImageSlot;
use crate::ui::notifications::Notification;
use std::path::PathBuf;

/// Messages emitted by the brief form.
#[derive(Debug, Clone)]
pub enum Message {
    CampaignNameChanged(String),
    RegionChanged(String),
    AudienceChanged(String),
    MessageChanged(String),
    ProductNameChanged(u64, String),
    ProductDescriptionChanged(u64, String),
    AddProduct,
    ColorInputChanged(String),
    ColorInputSubmitted,
    RemoveTag(u64),
    ChooseFile(ImageSlot),
    /// Result of the open dialog. `None` means the dialog was cancelled.
    FileChosen(ImageSlot, Option<PathBuf>),
    ClearFile(ImageSlot),
    ImageDescriptionChanged(ImageSlot, String),
    RevealSecondSlot,
    Submit,
    SubmissionFinished(Result<BriefOutcome, ApiError>),
    Download { url: String, filename: String },
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Show this notification.
    Notify(Notification),
    /// Validation passed: clear notifications and send the brief.
    Submit(ValidatedBrief),
    /// Open a file dialog for a base image slot.
    PickFile(ImageSlot),
    /// Generation succeeded: announce it and fetch these previews.
    Generated(Vec<String>),
    /// The request failed; report it with a localized fallback.
    RequestFailed(ApiError),
    /// Save `url` to disk, suggesting `filename`.
    Download { url: String, filename: String },
}
