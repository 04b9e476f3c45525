// SPDX-License-Identifier: MPL-2.0
//! Rules for turning generated-image URLs into displayable cards.
//!
//! The backend hands out share links whose `raw=1` query toggle renders the
//! image inline; swapping it for `dl=1` asks the host for an attachment.
//! Generated file names embed their pixel size as `_WIDTHxHEIGHT_`, which
//! becomes the card label.

use percent_encoding::percent_decode_str;
use regex::Regex;
use reqwest::Url;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Label shown when a file name carries no size marker.
pub const FALLBACK_LABEL: &str = "Creative";

const VIEW_TOGGLE: &str = "raw=1";
const DOWNLOAD_TOGGLE: &str = "dl=1";

static SIZE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"_([0-9]+x[0-9]+)_").expect("size marker pattern is a valid regex")
});

/// Rewrites a viewing URL into a download URL.
///
/// Only the first `raw=1` is replaced; URLs without it are returned as-is.
#[must_use]
pub fn download_url(url: &str) -> String {
    url.replacen(VIEW_TOGGLE, DOWNLOAD_TOGGLE, 1)
}

/// Returns the percent-decoded last path segment of `url`.
///
/// Undecodable segments are returned verbatim. Strings that do not parse as
/// absolute URLs fall back to the text before any query or fragment.
#[must_use]
pub fn display_filename(url: &str) -> String {
    let segment: Cow<'_, str> = match Url::parse(url) {
        Ok(parsed) => Cow::Owned(
            parsed
                .path_segments()
                .and_then(|mut segments| segments.next_back())
                .unwrap_or_default()
                .to_string(),
        ),
        Err(_) => {
            let path = url.split(['?', '#']).next().unwrap_or_default();
            Cow::Borrowed(path.rsplit('/').next().unwrap_or_default())
        }
    };

    match percent_decode_str(&segment).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => segment.into_owned(),
    }
}

/// Derives a `W:H` label from the `_WxH_` marker in a file name.
#[must_use]
pub fn aspect_label(filename: &str) -> String {
    SIZE_MARKER
        .captures(filename)
        .and_then(|caps| caps.get(1))
        .map_or_else(
            || FALLBACK_LABEL.to_string(),
            |size| size.as_str().replacen('x', ":", 1),
        )
}

/// A generated image returned by a brief submission, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCreative {
    pub url: String,
    pub filename: String,
    pub label: String,
    pub download_url: String,
}

impl GeneratedCreative {
    #[must_use]
    pub fn from_url(url: impl Into<String>) -> Self {
        let url = url.into();
        let filename = display_filename(&url);
        let label = aspect_label(&filename);
        let download_url = download_url(&url);
        Self {
            url,
            filename,
            label,
            download_url,
        }
    }
}
