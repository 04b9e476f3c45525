// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The active screen sits below the navbar; toasts float above both.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::brief_form;
use crate::ui::gallery;
use crate::ui::image_cache::ImageCache;
use crate::ui::navbar;
use crate::ui::notifications::{self, Toast};
use iced::{
    widget::{Column, Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub gallery: &'a gallery::State,
    pub brief_form: &'a brief_form::State,
    pub images: &'a ImageCache,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar = navbar::view(navbar::ViewContext {
        i18n: ctx.i18n,
        active: ctx.screen,
    })
    .map(Message::Navbar);

    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Gallery => gallery::view(
            ctx.gallery,
            gallery::ViewContext {
                i18n: ctx.i18n,
                images: ctx.images,
            },
        )
        .map(Message::Gallery),
        Screen::Brief => brief_form::view(
            ctx.brief_form,
            brief_form::ViewContext {
                i18n: ctx.i18n,
                images: ctx.images,
            },
        )
        .map(Message::BriefForm),
    };

    let column = Column::new().push(navbar).push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(column.width(Length::Fill).height(Length::Fill))
        .push(toasts)
        .into()
}
