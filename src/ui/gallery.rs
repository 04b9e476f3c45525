// SPDX-License-Identifier: MPL-2.0
//! Gallery screen listing every generated campaign.
//!
//! Entering the screen issues one `GET /list-campaigns`. The answer is
//! rendered as one titled section per campaign that has assets, each
//! holding an image card with a Download action. A failed load shows an
//! inline error banner; the user may press Refresh or re-enter the screen.
//!
//! Each load carries a generation number so that a slow answer to an older
//! load never replaces a newer one.

use crate::api::{ApiError, CampaignClient};
use crate::domain::campaign::non_empty_campaigns;
use crate::domain::{creative, Asset, CampaignMap};
use crate::i18n::fluent::I18n;
use crate::ui::components::card::ImageCard;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::image_cache::ImageCache;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, rule, scrollable, Column, Container, Row, Text},
    Element, Length, Task,
};

/// Where the current load stands.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Loaded(CampaignMap),
    Failed(ApiError),
}

/// One rendered campaign: its display title and its assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GallerySection<'a> {
    pub name: &'a str,
    pub assets: &'a [Asset],
}

/// Gallery screen state.
#[derive(Debug)]
pub struct State {
    load: LoadState,
    generation: u64,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a ImageCache,
}

/// Messages emitted by the gallery screen.
#[derive(Debug, Clone)]
pub enum Message {
    Refresh,
    CampaignsLoaded {
        generation: u64,
        result: Result<CampaignMap, ApiError>,
    },
    Download {
        url: String,
        filename: String,
    },
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The user asked for a fresh listing.
    Reload,
    /// These asset previews should be fetched.
    FetchPreviews(Vec<String>),
    /// Save `url` to disk, suggesting `filename`.
    Download { url: String, filename: String },
}

impl State {
    /// Starts in the loading state with the indicator shown.
    #[must_use]
    pub fn new() -> Self {
        Self {
            load: LoadState::Loading,
            generation: 0,
        }
    }

    #[must_use]
    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading)
    }

    /// Resets to loading and starts a new generation.
    ///
    /// Returns the generation the next answer must carry.
    pub fn begin_load(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.load = LoadState::Loading;
        self.generation
    }

    /// Issues one `GET /list-campaigns`.
    pub fn load(&mut self, client: &CampaignClient) -> Task<Message> {
        let generation = self.begin_load();
        let client = client.clone();
        tracing::debug!(generation, "loading gallery");
        Task::perform(
            async move { client.list_campaigns().await },
            move |result| Message::CampaignsLoaded { generation, result },
        )
    }

    /// Non-empty campaigns in server order. Empty while loading or failed.
    pub fn sections(&self) -> Vec<GallerySection<'_>> {
        match &self.load {
            LoadState::Loaded(map) => non_empty_campaigns(map)
                .map(|(name, assets)| GallerySection { name, assets })
                .collect(),
            LoadState::Loading | LoadState::Failed(_) => Vec::new(),
        }
    }

    /// Whether the server reported no campaigns at all.
    #[must_use]
    pub fn is_empty_listing(&self) -> bool {
        matches!(&self.load, LoadState::Loaded(map) if map.is_empty())
    }

    /// Text for the error banner, if the load failed.
    #[must_use]
    pub fn error_message(&self, fallback: &str) -> Option<String> {
        match &self.load {
            LoadState::Failed(err) => Some(err.user_message(fallback)),
            LoadState::Loading | LoadState::Loaded(_) => None,
        }
    }

    /// URLs of every asset card, in display order.
    pub fn preview_urls(&self) -> Vec<String> {
        self.sections()
            .iter()
            .flat_map(|section| section.assets.iter().map(|asset| asset.url.clone()))
            .collect()
    }
}

/// Process a gallery message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Refresh => Event::Reload,
        Message::CampaignsLoaded { generation, result } => {
            if generation != state.generation {
                tracing::debug!(
                    generation,
                    current = state.generation,
                    "ignoring stale campaign listing"
                );
                return Event::None;
            }
            match result {
                Ok(map) => {
                    state.load = LoadState::Loaded(map);
                    Event::FetchPreviews(state.preview_urls())
                }
                Err(err) => {
                    tracing::error!(error = %err, "failed to fetch campaigns");
                    state.load = LoadState::Failed(err);
                    Event::None
                }
            }
        }
        Message::Download { url, filename } => Event::Download { url, filename },
    }
}

/// Render the gallery screen.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let refresh = if state.is_loading() {
        button(Text::new(ctx.i18n.tr("gallery-refresh")).size(typography::BODY))
            .style(styles::button::unselected)
    } else {
        button(Text::new(ctx.i18n.tr("gallery-refresh")).size(typography::BODY))
            .on_press(Message::Refresh)
            .style(styles::button::unselected)
    };

    let header = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(
            Text::new(ctx.i18n.tr("gallery-title"))
                .size(typography::TITLE_LG)
                .width(Length::Fill),
        )
        .push(refresh);

    let mut content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(header);

    match &state.load {
        LoadState::Loading => {
            content = content.push(
                Container::new(Text::new(ctx.i18n.tr("gallery-loading")).size(typography::BODY_LG))
                    .width(Length::Fill)
                    .align_x(Horizontal::Center),
            );
        }
        LoadState::Failed(_) => {
            let message = state
                .error_message(&ctx.i18n.tr("gallery-fetch-failed"))
                .unwrap_or_default();
            content = content.push(
                Container::new(
                    Text::new(ctx.i18n.tr_with_args("gallery-error", &[("message", message.as_str())]))
                        .size(typography::BODY),
                )
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(styles::container::error_banner),
            );
        }
        LoadState::Loaded(_) if state.is_empty_listing() => {
            content = content.push(
                Container::new(Text::new(ctx.i18n.tr("gallery-empty")).size(typography::TITLE_SM))
                    .width(Length::Fill)
                    .align_x(Horizontal::Center),
            );
        }
        LoadState::Loaded(_) => {
            for section in state.sections() {
                content = content.push(build_section(&section, &ctx));
            }
        }
    }

    scrollable(content).into()
}

fn build_section<'a>(section: &GallerySection<'_>, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let loading = ctx.i18n.tr("card-image-loading");
    let unavailable = ctx.i18n.tr("card-image-unavailable");
    let download = ctx.i18n.tr("card-download");

    let cards: Vec<Element<'a, Message>> = section
        .assets
        .iter()
        .map(|asset| {
            ImageCard::new(ctx.images.preview(&asset.url))
                .caption(asset.filename.clone())
                .placeholders(loading.clone(), unavailable.clone())
                .action(
                    download.clone(),
                    Message::Download {
                        url: creative::download_url(&asset.url),
                        filename: asset.filename.clone(),
                    },
                )
                .view()
        })
        .collect();

    Column::new()
        .spacing(spacing::SM)
        .push(Text::new(capitalize_words(section.name)).size(typography::TITLE_MD))
        .push(rule::horizontal(1))
        .push(Row::with_children(cards).spacing(spacing::MD).wrap())
        .into()
}

/// Upper-cases the first letter of every whitespace-separated word.
fn capitalize_words(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_word_start = true;
    for ch in name.chars() {
        if at_word_start && !ch.is_whitespace() {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = ch.is_whitespace();
    }
    out
}
