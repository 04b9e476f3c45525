// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    Gallery,
    #[default]
    Brief,
}

impl Screen {
    pub const ALL: [Screen; 2] = [Screen::Gallery, Screen::Brief];

    /// i18n key of the tab label and window title.
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            Screen::Gallery => "screen-gallery",
            Screen::Brief => "screen-brief",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Screen::Gallery => "gallery",
            Screen::Brief => "brief",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a screen name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownScreen(pub String);

impl fmt::Display for UnknownScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown screen '{}' (expected 'gallery' or 'brief')", self.0)
    }
}

impl std::error::Error for UnknownScreen {}

impl FromStr for Screen {
    type Err = UnknownScreen;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gallery" => Ok(Screen::Gallery),
            "brief" | "create" => Ok(Screen::Brief),
            _ => Err(UnknownScreen(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Gallery".parse::<Screen>(), Ok(Screen::Gallery));
        assert_eq!(" brief ".parse::<Screen>(), Ok(Screen::Brief));
        assert!("catalog".parse::<Screen>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for screen in Screen::ALL {
            assert_eq!(screen.to_string().parse::<Screen>(), Ok(screen));
        }
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Screen::Brief).expect("serialize");
        assert_eq!(json, "\"brief\"");
    }
}
