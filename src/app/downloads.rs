// SPDX-License-Identifier: MPL-2.0
//! Saving assets and generated creatives to disk.
//!
//! A download first asks for a destination through a save dialog preset to
//! the suggested file name, then streams the asset body to the chosen path.
//! A cancelled dialog ends the flow silently.

use super::{paths, Message};
use crate::api::{ApiError, CampaignClient};
use crate::ui::notifications::Notification;
use iced::Task;
use std::path::{Path, PathBuf};

/// Directory the save dialog opens in.
///
/// The last used directory wins while it still exists; otherwise the OS
/// download directory is used.
#[must_use]
pub fn start_directory(last: Option<&Path>) -> Option<PathBuf> {
    last.filter(|dir| dir.is_dir())
        .map(Path::to_path_buf)
        .or_else(paths::default_download_dir)
}

/// Opens the save dialog for `url`.
pub fn pick_target(url: String, filename: String, directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        {
            let filename = filename.clone();
            async move {
                let mut dialog = rfd::AsyncFileDialog::new().set_file_name(&filename);
                if let Some(dir) = directory {
                    dialog = dialog.set_directory(&dir);
                }
                dialog.save_file().await.map(|h| h.path().to_path_buf())
            }
        },
        move |path| Message::DownloadTarget {
            url: url.clone(),
            filename: filename.clone(),
            path,
        },
    )
}

/// Streams `url` to `path`.
pub fn start(client: &CampaignClient, url: String, path: PathBuf) -> Task<Message> {
    let client = client.clone();
    tracing::info!(%url, path = %path.display(), "starting download");
    Task::perform(
        {
            let path = path.clone();
            async move { client.download_to(&url, &path).await }
        },
        move |result| Message::DownloadFinished {
            path: path.clone(),
            result,
        },
    )
}

/// Notification reporting a finished download.
///
/// `fallback` is the localized text used when the server gave no detail.
#[must_use]
pub fn finished_notification(
    path: &Path,
    result: &Result<u64, ApiError>,
    fallback: &str,
) -> Notification {
    match result {
        Ok(_) => {
            let filename = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            Notification::success("notification-download-success").with_arg("filename", filename)
        }
        Err(err) => {
            tracing::error!(error = %err, path = %path.display(), "download failed");
            Notification::error("notification-download-error")
                .with_arg("detail", err.user_message(fallback))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Severity;

    #[test]
    fn existing_last_directory_is_reused() {
        let dir = tempfile::tempdir().expect("temp dir");
        assert_eq!(
            start_directory(Some(dir.path())),
            Some(dir.path().to_path_buf())
        );
    }

    #[test]
    fn vanished_last_directory_falls_back() {
        let missing = Path::new("/definitely/not/here");
        assert_ne!(start_directory(Some(missing)).as_deref(), Some(missing));
    }

    #[test]
    fn success_names_saved_file() {
        let notification =
            finished_notification(Path::new("/tmp/out/photo.png"), &Ok(1024), "unknown");
        assert_eq!(notification.severity(), Severity::Success);
        assert_eq!(notification.arg("filename"), Some("photo.png"));
    }

    #[test]
    fn failure_carries_detail_or_fallback() {
        let with_detail = finished_notification(
            Path::new("/tmp/a.png"),
            &Err(ApiError::Http {
                status: 404,
                detail: Some("Asset not found".into()),
            }),
            "unknown",
        );
        assert_eq!(with_detail.severity(), Severity::Error);
        assert_eq!(with_detail.arg("detail"), Some("Asset not found"));

        let without = finished_notification(
            Path::new("/tmp/a.png"),
            &Err(ApiError::Http {
                status: 500,
                detail: None,
            }),
            "unknown",
        );
        assert_eq!(without.arg("detail"), Some("unknown"));
    }
}
