// SPDX-License-Identifier: MPL-2.0
//! Navigation bar switching between the gallery and the brief form.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Screen,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Select(Screen),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// Switch to this screen.
    Navigate(Screen),
}

/// Process a navbar message. Selecting the current screen again also
/// navigates, which reloads the gallery.
pub fn update(message: Message) -> Event {
    match message {
        Message::Select(screen) => Event::Navigate(screen),
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut tabs = Row::new()
        .spacing(spacing::XS)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            Text::new(ctx.i18n.tr("window-title"))
                .size(typography::TITLE_SM)
                .width(Length::Fill),
        );

    for screen in Screen::ALL {
        let label = Text::new(ctx.i18n.tr(screen.title_key())).size(typography::BODY);
        let tab = button(label)
            .on_press(Message::Select(screen))
            .padding([spacing::XXS, spacing::MD]);
        tabs = tabs.push(if screen == ctx.active {
            tab.style(styles::button::selected)
        } else {
            tab.style(styles::button::unselected)
        });
    }

    Container::new(tabs)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}
