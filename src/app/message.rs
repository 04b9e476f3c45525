// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api::ApiError;
use crate::ui::brief_form;
use crate::ui::gallery;
use crate::ui::navbar;
use crate::ui::notifications;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Gallery(gallery::Message),
    BriefForm(brief_form::Message),
    Notification(notifications::NotificationMessage),
    /// Preview bytes for an asset or generated creative arrived.
    ImageFetched {
        url: String,
        result: Result<Vec<u8>, ApiError>,
    },
    /// Result from the save dialog of a download.
    DownloadTarget {
        url: String,
        filename: String,
        path: Option<PathBuf>,
    },
    /// A download finished streaming to disk.
    DownloadFinished {
        path: PathBuf,
        result: Result<u64, ApiError>,
    },
    Tick(Instant), // Periodic tick for toast auto-dismiss
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional backend base URL.
    /// Takes precedence over `CAMPAIGN_STUDIO_SERVER` and the config file.
    pub server: Option<String>,
    /// Optional initial screen.
    pub screen: Option<super::Screen>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `CAMPAIGN_STUDIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
