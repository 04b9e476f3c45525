// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery and the
//! brief form.
//!
//! The `App` struct wires together the backend client, localization and
//! preferences, and translates component events into side effects such as
//! HTTP requests, file dialogs and notifications.

pub mod config;
mod downloads;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::{Screen, UnknownScreen};

use crate::api::{ApiError, CampaignClient};
use crate::i18n::fluent::I18n;
use crate::ui::brief_form;
use crate::ui::gallery;
use crate::ui::image_cache::ImageCache;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    client: CampaignClient,
    gallery: gallery::State,
    brief_form: brief_form::State,
    /// Decoded previews shared by gallery cards and generated creatives.
    images: ImageCache,
    notifications: notifications::Manager,
    theme_mode: ThemeMode,
    /// Directory of the last saved download, for the next save dialog.
    last_download_dir: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("server", &self.client.base_url())
            .field("notifications", &self.notifications.visible_count())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 500;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Builds the backend client for `base_url`.
///
/// An unusable URL falls back to the default server so the window still
/// opens; the error is returned alongside for reporting.
fn build_client(base_url: &str, config: &Config) -> (CampaignClient, Option<ApiError>) {
    let mut builder = CampaignClient::builder(base_url);
    if let Some(timeout) = config.request_timeout() {
        builder = builder.timeout(timeout);
    }
    match builder.build() {
        Ok(client) => (client, None),
        Err(err) => {
            tracing::warn!(url = base_url, error = %err, "falling back to default server");
            let client = CampaignClient::from_parts(
                reqwest::Client::new(),
                config::DEFAULT_SERVER_URL,
            );
            (client, Some(err))
        }
    }
}

impl Default for App {
    fn default() -> Self {
        let config = Config::default();
        let (client, _) = build_client(config::DEFAULT_SERVER_URL, &config);
        Self {
            i18n: I18n::default(),
            screen: Screen::default(),
            client,
            gallery: gallery::State::new(),
            brief_form: brief_form::State::new(),
            images: ImageCache::new(config.image_cache_capacity()),
            notifications: notifications::Manager::new(config.notification_dismiss_delay()),
            theme_mode: ThemeMode::System,
            last_download_dir: None,
        }
    }
}

impl App {
    /// Initializes application state from the config file and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let defaults_error = config::write_defaults_if_missing()
            .inspect_err(|err| tracing::warn!(error = %err, "could not write default settings"))
            .err();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let server_url = config::resolve_server_url(flags.server.clone(), &config);
        let (client, client_error) = build_client(&server_url, &config);
        tracing::info!(server = client.base_url(), "campaign studio starting");

        let mut app = App {
            i18n,
            client,
            images: ImageCache::new(config.image_cache_capacity()),
            notifications: notifications::Manager::new(config.notification_dismiss_delay()),
            theme_mode: config.general.theme_mode,
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        } else if let Some(err) = defaults_error {
            app.notifications.push(Notification::warning(err.i18n_key()));
        }
        if let Some(err) = client_error {
            app.notifications.push(
                Notification::error("notification-server-url-invalid")
                    .with_arg("url", server_url)
                    .with_arg("detail", err.to_string()),
            );
        }

        let start_screen = flags
            .screen
            .or(config.general.start_screen)
            .unwrap_or_default();
        let task = app.switch_screen(start_screen);
        (app, task)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &self.i18n,
            screen: &mut self.screen,
            client: &self.client,
            gallery: &mut self.gallery,
            brief_form: &mut self.brief_form,
            images: &mut self.images,
            notifications: &mut self.notifications,
            last_download_dir: &mut self.last_download_dir,
        }
    }

    fn switch_screen(&mut self, target: Screen) -> Task<Message> {
        update::handle_screen_switch(&mut self.update_context(), target)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let screen_name = self.i18n.tr(self.screen.title_key());
        format!("{screen_name} - {app_name}")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::Navbar(navbar_message) => update::handle_navbar_message(&mut ctx, navbar_message),
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::BriefForm(form_message) => {
                update::handle_brief_form_message(&mut ctx, form_message)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::ImageFetched { url, result } => {
                update::handle_image_fetched(&mut ctx, url, result)
            }
            Message::DownloadTarget {
                url,
                filename,
                path,
            } => update::handle_download_target(&mut ctx, url, filename, path),
            Message::DownloadFinished { path, result } => {
                update::handle_download_finished(&mut ctx, path, result)
            }
            Message::Tick(now) => {
                ctx.notifications.tick_at(now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            gallery: &self.gallery,
            brief_form: &self.brief_form,
            images: &self.images,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::BriefOutcome;
    use crate::domain::CampaignMap;
    use crate::ui::navbar;
    use crate::ui::notifications::Severity;
    use std::time::{Duration, Instant};

    const SAMPLE_URL: &str = "https://x/y/photo_1024x768_a.png?raw=1";

    fn english_app() -> App {
        App {
            i18n: I18n::new(Some("en-US".into()), &Config::default()),
            ..App::default()
        }
    }

    fn submit(app: &mut App) {
        let _ = app.update(Message::BriefForm(brief_form::Message::Submit));
        assert!(app.brief_form.is_submitting());
    }

    fn last_notification(app: &App) -> &Notification {
        app.notifications.visible().last().expect("a notification")
    }

    #[test]
    fn default_app_starts_on_brief_screen() {
        let app = english_app();
        assert_eq!(app.screen, Screen::Brief);
        assert_eq!(app.title(), "Create Brief - Campaign Studio");
    }

    #[test]
    fn entering_gallery_starts_a_new_load() {
        let mut app = english_app();
        let before = app.gallery.generation();

        let _ = app.update(Message::Navbar(navbar::Message::Select(Screen::Gallery)));

        assert_eq!(app.screen, Screen::Gallery);
        assert!(app.gallery.is_loading());
        assert_eq!(app.gallery.generation(), before + 1);
    }

    #[test]
    fn entering_brief_keeps_draft() {
        let mut app = english_app();
        let _ = app.update(Message::BriefForm(brief_form::Message::CampaignNameChanged(
            "Autumn".into(),
        )));
        let _ = app.update(Message::Navbar(navbar::Message::Select(Screen::Gallery)));
        let _ = app.update(Message::Navbar(navbar::Message::Select(Screen::Brief)));

        assert_eq!(app.brief_form.campaign_name, "Autumn");
    }

    #[test]
    fn gallery_listing_claims_previews() {
        let mut app = english_app();
        let _ = app.update(Message::Navbar(navbar::Message::Select(Screen::Gallery)));

        let mut map = CampaignMap::new();
        map.insert(
            "summer".into(),
            vec![crate::domain::Asset {
                url: SAMPLE_URL.into(),
                filename: "photo_1024x768_a.png".into(),
            }],
        );
        let _ = app.update(Message::Gallery(gallery::Message::CampaignsLoaded {
            generation: app.gallery.generation(),
            result: Ok(map),
        }));

        assert!(app.images.is_pending(SAMPLE_URL));
    }

    fn load_gallery(app: &mut App, asset_count: usize) -> Vec<String> {
        let _ = app.update(Message::Navbar(navbar::Message::Select(Screen::Gallery)));
        let assets: Vec<crate::domain::Asset> = (0..asset_count)
            .map(|i| crate::domain::Asset {
                url: format!("https://cdn.example.com/summer_{i}_1024x768_v1.png"),
                filename: format!("summer_{i}_1024x768_v1.png"),
            })
            .collect();
        let urls = assets.iter().map(|asset| asset.url.clone()).collect();
        let mut map = CampaignMap::new();
        map.insert("summer".into(), assets);
        let _ = app.update(Message::Gallery(gallery::Message::CampaignsLoaded {
            generation: app.gallery.generation(),
            result: Ok(map),
        }));
        urls
    }

    #[test]
    fn gallery_larger_than_cache_shows_every_preview() {
        let mut app = App {
            images: ImageCache::new(8),
            ..english_app()
        };
        let urls = load_gallery(&mut app, 20);

        for url in &urls {
            let _ = app.update(Message::ImageFetched {
                url: url.clone(),
                result: Ok(vec![0x89, b'P', b'N', b'G']),
            });
        }

        assert!(app.images.capacity() >= urls.len());
        assert!(urls.iter().all(|url| matches!(
            app.images.preview(url),
            crate::ui::image_cache::Preview::Ready(_)
        )));
    }

    #[test]
    fn evicted_preview_still_on_screen_is_fetched_again() {
        let mut app = english_app();
        let urls = load_gallery(&mut app, 3);
        app.images = ImageCache::new(2);

        for url in &urls {
            let _ = app.update(Message::ImageFetched {
                url: url.clone(),
                result: Ok(vec![0x89, b'P', b'N', b'G']),
            });
        }

        assert!(app.images.is_pending(&urls[0]));
        assert!(app.images.capacity() >= urls.len());
    }

    #[test]
    fn submit_clears_existing_notifications() {
        let mut app = english_app();
        app.notifications.push(Notification::info("notification-no-images"));

        submit(&mut app);

        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn successful_generation_notifies_and_fetches_previews() {
        let mut app = english_app();
        submit(&mut app);

        let _ = app.update(Message::BriefForm(brief_form::Message::SubmissionFinished(Ok(
            BriefOutcome {
                image_urls: vec![SAMPLE_URL.into()],
                message: None,
            },
        ))));

        let notification = last_notification(&app);
        assert_eq!(notification.severity(), Severity::Success);
        assert_eq!(
            notification.message_key(),
            "notification-generation-success"
        );
        assert!(app.images.is_pending(SAMPLE_URL));
        assert_eq!(app.brief_form.results()[0].label, "1024:768");
    }

    #[test]
    fn failed_generation_uses_localized_fallback() {
        let mut app = english_app();
        submit(&mut app);

        let _ = app.update(Message::BriefForm(brief_form::Message::SubmissionFinished(Err(
            ApiError::Http {
                status: 500,
                detail: None,
            },
        ))));

        let notification = last_notification(&app);
        assert_eq!(notification.severity(), Severity::Error);
        assert_eq!(
            notifications::Toast::message_text(notification, &app.i18n),
            "An error occurred: An unknown error occurred."
        );
    }

    #[test]
    fn cancelled_download_dialog_does_nothing() {
        let mut app = english_app();
        let _ = app.update(Message::DownloadTarget {
            url: SAMPLE_URL.into(),
            filename: "photo.png".into(),
            path: None,
        });
        assert!(app.last_download_dir.is_none());
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn chosen_download_path_is_remembered() {
        let mut app = english_app();
        let _ = app.update(Message::DownloadTarget {
            url: SAMPLE_URL.into(),
            filename: "photo.png".into(),
            path: Some(PathBuf::from("/tmp/creatives/photo.png")),
        });
        assert_eq!(
            app.last_download_dir.as_deref(),
            Some(std::path::Path::new("/tmp/creatives"))
        );
    }

    #[test]
    fn finished_download_is_reported() {
        let mut app = english_app();
        let _ = app.update(Message::DownloadFinished {
            path: PathBuf::from("/tmp/photo.png"),
            result: Ok(42),
        });
        assert_eq!(
            last_notification(&app).message_key(),
            "notification-download-success"
        );
    }

    #[test]
    fn tick_expires_old_notifications() {
        let mut app = english_app();
        app.notifications.push(Notification::warning("notification-no-images"));

        let _ = app.update(Message::Tick(Instant::now() + Duration::from_secs(9)));

        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn preview_result_lands_in_cache() {
        let mut app = english_app();
        let _ = app.update(Message::ImageFetched {
            url: SAMPLE_URL.into(),
            result: Err(ApiError::Connection("refused".into())),
        });
        assert!(matches!(
            app.images.preview(SAMPLE_URL),
            crate::ui::image_cache::Preview::Unavailable
        ));
    }
}
