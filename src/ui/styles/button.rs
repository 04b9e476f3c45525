// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action (Submit, Download).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => disabled(theme),
    }
}

/// Greyed out, non-interactive look (Submit while a request is in flight).
pub fn disabled(theme: &Theme) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    button::Style {
        background: Some(Background::Color(if is_light {
            palette::GRAY_200
        } else {
            palette::GRAY_700
        })),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Active navbar tab.
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Disabled => disabled(theme),
        _ => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
    }
}

/// Secondary actions and inactive navbar tabs.
/// Adapts to light/dark theme.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg_color, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(bg_color)),
            text_color,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => {
            let hover_bg = if is_light {
                palette::GRAY_200
            } else {
                Color::from_rgb(0.35, 0.35, 0.35)
            };
            button::Style {
                background: Some(Background::Color(hover_bg)),
                text_color,
                border: Border {
                    color: palette::PRIMARY_500,
                    width: 1.0,
                    radius: radius::SM.into(),
                },
                shadow: shadow::SM,
                snap: true,
            }
        }
        button::Status::Disabled => disabled(theme),
    }
}

/// Borderless button (toast dismiss, tag chip remove).
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_bg = |alpha: f32| {
        Some(Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };

    let (background, text_color) = match status {
        button::Status::Active => (None, base.text),
        button::Status::Hovered => (hover_bg(opacity::OVERLAY_SUBTLE), base.text),
        button::Status::Pressed => (hover_bg(opacity::OVERLAY_MEDIUM), base.text),
        button::Status::Disabled => (
            None,
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
        ),
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
