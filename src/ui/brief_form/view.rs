// SPDX-License-Identifier: MPL-2.0
//! Brief form layout.

use super::messages::Message;
use super::{ProductRow, State};
use crate::domain::ImageSlot;
use crate::i18n::fluent::I18n;
use crate::ui::components::card::ImageCard;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::image_cache::ImageCache;
use crate::ui::styles;
use iced::widget::{button, rule, scrollable, text, text_input, Column, Container, Row, Text};
use iced::{alignment::Vertical, Element, Length, Theme};

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a ImageCache,
}

/// Render the brief form and, below it, the latest generated creatives.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let form = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(i18n.tr("brief-title")).size(typography::TITLE_LG))
        .push(labelled_input(
            i18n.tr("brief-campaign-name"),
            &state.campaign_name,
            Message::CampaignNameChanged,
        ))
        .push(labelled_input(
            i18n.tr("brief-region"),
            &state.region,
            Message::RegionChanged,
        ))
        .push(labelled_input(
            i18n.tr("brief-audience"),
            &state.audience,
            Message::AudienceChanged,
        ))
        .push(labelled_input(
            i18n.tr("brief-message"),
            &state.message,
            Message::MessageChanged,
        ))
        .push(rule::horizontal(1))
        .push(products_section(state, i18n))
        .push(rule::horizontal(1))
        .push(colors_section(state, i18n))
        .push(rule::horizontal(1))
        .push(base_images_section(state, i18n))
        .push(submit_button(state, i18n));

    let mut content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill)
        .push(
            Container::new(form)
                .max_width(sizing::FORM_MAX_WIDTH)
                .padding(spacing::LG)
                .style(styles::container::panel),
        );

    if !state.results().is_empty() {
        content = content.push(results_section(state, &ctx));
    }

    scrollable(content).into()
}

fn field_label<'a>(label: String) -> Element<'a, Message> {
    Text::new(label)
        .size(typography::BODY_SM)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.text),
        })
        .into()
}

fn labelled_input<'a>(
    label: String,
    value: &'a str,
    on_input: fn(String) -> Message,
) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(field_label(label.clone()))
        .push(
            text_input(&label, value)
                .on_input(on_input)
                .padding(spacing::XS)
                .size(typography::BODY),
        )
        .into()
}

fn products_section<'a>(state: &'a State, i18n: &I18n) -> Element<'a, Message> {
    let mut section = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("brief-products")).size(typography::TITLE_SM));

    for row in state.products() {
        section = section.push(product_row(row, i18n));
    }

    section
        .push(
            button(Text::new(i18n.tr("brief-add-product")).size(typography::BODY))
                .on_press(Message::AddProduct)
                .style(styles::button::unselected),
        )
        .into()
}

fn product_row<'a>(row: &'a ProductRow, i18n: &I18n) -> Element<'a, Message> {
    let id = row.id;
    let number = id.to_string();
    let label = i18n.tr_with_args("brief-product-label", &[("number", number.as_str())]);
    let name_placeholder = i18n.tr("brief-product-name-placeholder");
    let description_placeholder = i18n.tr("brief-product-description-placeholder");

    Column::new()
        .spacing(spacing::XXS)
        .push(field_label(label))
        .push(
            Row::new()
                .spacing(spacing::XS)
                .push(
                    text_input(&name_placeholder, &row.name)
                        .on_input(move |value| Message::ProductNameChanged(id, value))
                        .padding(spacing::XS)
                        .width(Length::FillPortion(1)),
                )
                .push(
                    text_input(&description_placeholder, &row.description)
                        .on_input(move |value| Message::ProductDescriptionChanged(id, value))
                        .padding(spacing::XS)
                        .width(Length::FillPortion(2)),
                ),
        )
        .into()
}

fn colors_section<'a>(state: &'a State, i18n: &I18n) -> Element<'a, Message> {
    let chips: Vec<Element<'a, Message>> = state
        .tags()
        .iter()
        .map(|tag| {
            let chip = Row::new()
                .spacing(spacing::XXS)
                .align_y(Vertical::Center)
                .push(Text::new(tag.text.as_str()).size(typography::BODY))
                .push(
                    button(Text::new("×").size(typography::BODY))
                        .on_press(Message::RemoveTag(tag.id))
                        .padding([0.0, spacing::XXS])
                        .style(styles::button::ghost),
                );
            Container::new(chip)
                .padding([spacing::XXS, spacing::XS])
                .style(styles::container::tag_chip)
                .into()
        })
        .collect();

    let placeholder = i18n.tr("brief-brand-colors-placeholder");

    Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("brief-brand-colors")).size(typography::TITLE_SM))
        .push(Row::with_children(chips).spacing(spacing::XS).wrap())
        .push(
            text_input(&placeholder, state.color_input())
                .on_input(Message::ColorInputChanged)
                .on_submit(Message::ColorInputSubmitted)
                .padding(spacing::XS),
        )
        .into()
}

fn base_images_section<'a>(state: &'a State, i18n: &I18n) -> Element<'a, Message> {
    let mut section = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("brief-base-images")).size(typography::TITLE_SM))
        .push(image_slot(state, ImageSlot::First, i18n));

    if state.second_slot_visible() {
        section = section.push(image_slot(state, ImageSlot::Second, i18n));
    } else {
        section = section.push(
            button(Text::new(i18n.tr("brief-add-image")).size(typography::BODY))
                .on_press(Message::RevealSecondSlot)
                .style(styles::button::unselected),
        );
    }

    section.into()
}

fn image_slot<'a>(state: &'a State, slot: ImageSlot, i18n: &I18n) -> Element<'a, Message> {
    let entry = state.slot(slot);
    let number = slot.to_string();
    let label = i18n.tr_with_args("brief-base-image-label", &[("number", number.as_str())]);
    let status = entry.file_name().unwrap_or_else(|| i18n.tr("brief-no-file"));
    let placeholder = i18n.tr("brief-image-description-placeholder");

    let mut file_row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            button(Text::new(i18n.tr("brief-choose-file")).size(typography::BODY))
                .on_press(Message::ChooseFile(slot))
                .style(styles::button::unselected),
        )
        .push(Text::new(status).size(typography::BODY_SM));

    if entry.path.is_some() {
        file_row = file_row.push(
            button(Text::new(i18n.tr("brief-clear-file")).size(typography::BODY_SM))
                .on_press(Message::ClearFile(slot))
                .style(styles::button::ghost),
        );
    }

    Column::new()
        .spacing(spacing::XXS)
        .push(field_label(label))
        .push(file_row)
        .push(
            text_input(&placeholder, &entry.description)
                .on_input(move |value| Message::ImageDescriptionChanged(slot, value))
                .padding(spacing::XS),
        )
        .into()
}

fn submit_button<'a>(state: &State, i18n: &I18n) -> Element<'a, Message> {
    if state.is_submitting() {
        button(Text::new(i18n.tr("brief-submitting")).size(typography::BODY_LG))
            .padding([spacing::XS, spacing::LG])
            .style(|theme: &Theme, _status| styles::button::disabled(theme))
            .into()
    } else {
        button(Text::new(i18n.tr("brief-submit")).size(typography::BODY_LG))
            .on_press(Message::Submit)
            .padding([spacing::XS, spacing::LG])
            .style(styles::button::primary)
            .into()
    }
}

fn results_section<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let loading = ctx.i18n.tr("card-image-loading");
    let unavailable = ctx.i18n.tr("card-image-unavailable");
    let download = ctx.i18n.tr("card-download");

    let cards: Vec<Element<'a, Message>> = state
        .results()
        .iter()
        .map(|creative| {
            ImageCard::new(ctx.images.preview(&creative.url))
                .title(creative.label.clone())
                .caption(creative.filename.clone())
                .placeholders(loading.clone(), unavailable.clone())
                .action(
                    download.clone(),
                    Message::Download {
                        url: creative.download_url.clone(),
                        filename: creative.filename.clone(),
                    },
                )
                .view()
        })
        .collect();

    Column::new()
        .spacing(spacing::SM)
        .push(Text::new(ctx.i18n.tr("brief-results-title")).size(typography::TITLE_MD))
        .push(rule::horizontal(1))
        .push(Row::with_children(cards).spacing(spacing::MD).wrap())
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_renders_idle_and_busy_forms() {
        let i18n = I18n::default();
        let images = ImageCache::default();
        let mut state = State::new();
        state.reveal_second_slot();
        let _ = view(&state, ViewContext { i18n: &i18n, images: &images });

        state.begin_submission();
        let _ = view(&state, ViewContext { i18n: &i18n, images: &images });
    }
}
