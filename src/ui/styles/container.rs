// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Panel surface for form sections and the navbar.
///
/// Derived from the active theme background with a slight opacity so it
/// stays readable in light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Image card frame.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        text_color: Some(palette.background.weak.text),
        ..Default::default()
    }
}

/// Inline error banner (failed gallery load).
pub fn error_banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::ERROR_500
        })),
        border: Border {
            color: palette::ERROR_500,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        text_color: Some(palette::ERROR_500),
        ..Default::default()
    }
}

/// Pill around a brand color tag.
pub fn tag_chip(theme: &Theme) -> container::Style {
    let is_light = matches!(theme, Theme::Light);

    container::Style {
        background: Some(Background::Color(if is_light {
            palette::PRIMARY_100
        } else {
            palette::PRIMARY_700
        })),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_banner_uses_error_color() {
        let style = error_banner(&Theme::Dark);
        assert_eq!(style.border.color, palette::ERROR_500);
        assert_eq!(style.text_color, Some(palette::ERROR_500));
    }

    #[test]
    fn tag_chip_adapts_to_theme() {
        assert_ne!(
            tag_chip(&Theme::Light).background,
            tag_chip(&Theme::Dark).background
        );
    }
}
