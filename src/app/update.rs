// SPDX-License-Identifier: MPL-2.0
//! Message handlers that turn component events into side effects.

use super::{downloads, Message, Screen};
use crate::api::{ApiError, CampaignClient};
use crate::domain::ImageSlot;
use crate::i18n::fluent::I18n;
use crate::ui::brief_form::{self, Event as BriefFormEvent};
use crate::ui::gallery::{self, Event as GalleryEvent};
use crate::ui::image_cache::ImageCache;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use iced::Task;
use std::path::PathBuf;

/// File extensions offered by the base image picker.
const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "webp", "gif", "bmp"];

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub screen: &'a mut Screen,
    pub client: &'a CampaignClient,
    pub gallery: &'a mut gallery::State,
    pub brief_form: &'a mut brief_form::State,
    pub images: &'a mut ImageCache,
    pub notifications: &'a mut notifications::Manager,
    pub last_download_dir: &'a mut Option<PathBuf>,
}

/// Switches screens. Entering the gallery always reloads it.
pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    *ctx.screen = target;
    tracing::debug!(screen = %target, "switching screen");
    match target {
        Screen::Gallery => ctx.gallery.load(ctx.client).map(Message::Gallery),
        Screen::Brief => Task::none(),
    }
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::Navigate(screen) => handle_screen_switch(ctx, screen),
    }
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    match gallery::update(ctx.gallery, message) {
        GalleryEvent::None => Task::none(),
        GalleryEvent::Reload => ctx.gallery.load(ctx.client).map(Message::Gallery),
        GalleryEvent::FetchPreviews(urls) => fetch_previews(ctx, urls),
        GalleryEvent::Download { url, filename } => request_download(ctx, url, filename),
    }
}

pub fn handle_brief_form_message(
    ctx: &mut UpdateContext<'_>,
    message: brief_form::Message,
) -> Task<Message> {
    match brief_form::update(ctx.brief_form, message) {
        BriefFormEvent::None => Task::none(),
        BriefFormEvent::Notify(notification) => {
            ctx.notifications.push(notification);
            Task::none()
        }
        BriefFormEvent::Submit(validated) => {
            ctx.notifications.clear();
            brief_form::submit(ctx.client, validated).map(Message::BriefForm)
        }
        BriefFormEvent::PickFile(slot) => pick_base_image(slot),
        BriefFormEvent::Generated(urls) => {
            ctx.notifications
                .push(Notification::success("notification-generation-success"));
            fetch_previews(ctx, urls)
        }
        BriefFormEvent::RequestFailed(err) => {
            ctx.notifications.push(request_failed_notification(&err, ctx.i18n));
            Task::none()
        }
        BriefFormEvent::Download { url, filename } => request_download(ctx, url, filename),
    }
}

/// "An error occurred: ..." with the server detail or the localized fallback.
pub fn request_failed_notification(err: &ApiError, i18n: &I18n) -> Notification {
    let fallback = i18n.tr("notification-unknown-error");
    Notification::error("notification-request-failed").with_arg("detail", err.user_message(&fallback))
}

pub fn handle_image_fetched(
    ctx: &mut UpdateContext<'_>,
    url: String,
    result: Result<Vec<u8>, ApiError>,
) -> Task<Message> {
    if let Err(err) = &result {
        tracing::warn!(%url, error = %err, "preview fetch failed");
    }
    match ctx.images.insert(url, result) {
        Some(evicted) if shown_previews(ctx).contains(&evicted) => {
            tracing::debug!(url = %evicted, "refetching evicted preview");
            fetch_previews(ctx, vec![evicted])
        }
        _ => Task::none(),
    }
}

pub fn handle_download_target(
    ctx: &mut UpdateContext<'_>,
    url: String,
    filename: String,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        tracing::debug!(%filename, "download cancelled");
        return Task::none();
    };
    if let Some(parent) = path.parent() {
        *ctx.last_download_dir = Some(parent.to_path_buf());
    }
    downloads::start(ctx.client, url, path)
}

pub fn handle_download_finished(
    ctx: &mut UpdateContext<'_>,
    path: PathBuf,
    result: Result<u64, ApiError>,
) -> Task<Message> {
    let fallback = ctx.i18n.tr("notification-unknown-error");
    ctx.notifications
        .push(downloads::finished_notification(&path, &result, &fallback));
    Task::none()
}

/// Preview URLs of every card the gallery and the brief results can show.
fn shown_previews(ctx: &UpdateContext<'_>) -> Vec<String> {
    let mut urls = ctx.gallery.preview_urls();
    urls.extend(ctx.brief_form.results().iter().map(|creative| creative.url.clone()));
    urls
}

/// Starts one fetch per preview that is neither cached nor in flight.
fn fetch_previews(ctx: &mut UpdateContext<'_>, urls: Vec<String>) -> Task<Message> {
    let shown = shown_previews(ctx).len();
    ctx.images.reserve(shown);
    let missing = ctx.images.claim_missing(urls.iter().map(String::as_str));
    if missing.is_empty() {
        return Task::none();
    }
    tracing::debug!(count = missing.len(), "fetching previews");

    Task::batch(missing.into_iter().map(|url| {
        let client = ctx.client.clone();
        let key = url.clone();
        Task::perform(async move { client.fetch_bytes(&url).await }, move |result| {
            Message::ImageFetched {
                url: key.clone(),
                result,
            }
        })
    }))
}

fn request_download(ctx: &mut UpdateContext<'_>, url: String, filename: String) -> Task<Message> {
    let directory = downloads::start_directory(ctx.last_download_dir.as_deref());
    downloads::pick_target(url, filename, directory)
}

fn pick_base_image(slot: ImageSlot) -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter("Images", &IMAGE_EXTENSIONS)
                .pick_file()
                .await
                .map(|h| h.path().to_path_buf())
        },
        move |path| Message::BriefForm(brief_form::Message::FileChosen(slot, path)),
    )
}
