// SPDX-License-Identifier: MPL-2.0
//! Image card shared by the gallery and the brief results.
//!
//! A card shows an optional header (the aspect label of a generated
//! creative), the image preview or a placeholder, an optional caption and a
//! single action button.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::components::card::ImageCard;
//!
//! ImageCard::new(cache.preview(&asset.url))
//!     .caption(&asset.filename)
//!     .placeholders("Loading preview...", "Preview unavailable")
//!     .action("Download", Message::Download(index))
//!     .view()
//! ```

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::image_cache::Preview;
use crate::ui::styles;
use iced::widget::{button, image, text, Column, Container, Text};
use iced::{alignment, ContentFit, Element, Length, Theme};

#[derive(Debug, Clone)]
pub struct ImageCard<Message> {
    preview: Preview,
    title: Option<String>,
    caption: Option<String>,
    loading_label: String,
    unavailable_label: String,
    action_label: Option<String>,
    action_message: Option<Message>,
}

impl<Message: Clone + 'static> ImageCard<Message> {
    pub fn new(preview: Preview) -> Self {
        Self {
            preview,
            title: None,
            caption: None,
            loading_label: String::new(),
            unavailable_label: String::new(),
            action_label: None,
            action_message: None,
        }
    }

    /// Sets the header shown above the image.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the caption shown below the image.
    #[must_use]
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Sets the localized placeholder texts.
    #[must_use]
    pub fn placeholders(mut self, loading: impl Into<String>, unavailable: impl Into<String>) -> Self {
        self.loading_label = loading.into();
        self.unavailable_label = unavailable.into();
        self
    }

    /// Sets the action button label and message.
    #[must_use]
    pub fn action(mut self, label: impl Into<String>, message: Message) -> Self {
        self.action_label = Some(label.into());
        self.action_message = Some(message);
        self
    }

    pub fn view(self) -> Element<'static, Message> {
        let mut content = Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill);

        if let Some(title) = self.title {
            content = content.push(Text::new(title).size(typography::TITLE_SM));
        }

        let preview: Element<'static, Message> = match self.preview {
            Preview::Ready(handle) => image(handle)
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
                .into(),
            Preview::Loading => placeholder(self.loading_label),
            Preview::Unavailable => placeholder(self.unavailable_label),
        };
        content = content.push(preview);

        if let Some(caption) = self.caption {
            content = content.push(
                Text::new(caption)
                    .size(typography::CAPTION)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.extended_palette().background.strong.text),
                    }),
            );
        }

        if let (Some(label), Some(message)) = (self.action_label, self.action_message) {
            content = content.push(
                button(Text::new(label).size(typography::BODY))
                    .on_press(message)
                    .padding([spacing::XXS, spacing::MD])
                    .style(styles::button::primary),
            );
        }

        Container::new(content)
            .width(Length::Fixed(sizing::CARD_WIDTH))
            .padding(spacing::SM)
            .style(styles::container::card)
            .into()
    }
}

fn placeholder<Message: 'static>(label: String) -> Element<'static, Message> {
    Container::new(Text::new(label).size(typography::BODY_SM))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
