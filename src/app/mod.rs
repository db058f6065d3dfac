// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct owns the catalog, the HTTP adapters, the image cache and
//! every screen's state. It translates component effects into side effects
//! like plan fetches, image downloads, quote submission, or notifications.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::application::port::{CatalogSection, PlanCatalog, QuoteSubmitter};
use crate::application::query::PlanLookup;
use crate::diagnostics::{AppEvent, DiagnosticsHandle};
use crate::domain::plan::PlanId;
use crate::infrastructure::http::{self, ApiEndpoints, HttpPlanSource, HttpQuoteSubmitter};
use crate::infrastructure::EmbeddedCatalog;
use crate::media::ImageCache;
use crate::ui::gallery;
use crate::ui::notifications::{self, Notification};
use crate::ui::plan_details;
use crate::ui::quote;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

const APP_TITLE: &str = "Cedric House Plans";

/// Root Iced application state.
pub struct App {
    screen: Screen,
    theme_mode: ThemeMode,
    catalog: Arc<dyn PlanCatalog>,
    lookup: PlanLookup,
    quote_submitter: Arc<dyn QuoteSubmitter>,
    client: reqwest::Client,
    endpoints: ApiEndpoints,
    images: ImageCache,
    /// Listing gallery modal.
    gallery: gallery::State,
    /// Present while the detail page is shown.
    plan_details: Option<plan_details::State>,
    quote: quote::State,
    notifications: notifications::Manager,
    diagnostics: DiagnosticsHandle,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("images", &self.images)
            .field(
                "plan",
                &self.plan_details.as_ref().map(plan_details::State::plan_id),
            )
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon: crate::icon::load_window_icon(),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(mut flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.take());
    let report_path = flags.diagnostics.take();
    let diagnostics = DiagnosticsHandle::default();

    // iced 0.14 requires a `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot_diagnostics = diagnostics.clone();
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags, boot_diagnostics.clone())
    };

    let result = iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run();

    if let Some(path) = report_path {
        match diagnostics.write_report(&path) {
            Ok(events) => {
                tracing::info!(path = %path.display(), events, "diagnostics report written");
            }
            Err(err) => {
                tracing::error!(
                    path = %path.display(),
                    error = %err,
                    "diagnostics report not written"
                );
            }
        }
    }

    result
}

impl App {
    /// Loads settings, wires the adapters, and opens the first screen.
    fn new(flags: Flags, diagnostics: DiagnosticsHandle) -> (Self, Task<Message>) {
        let (mut config, config_warning) = config::load();
        config.apply_env();
        if let Some(base) = flags.api_base.filter(|b| !b.trim().is_empty()) {
            config.api.base_url = Some(base);
        }

        let mut notifications = notifications::Manager::new();

        if let Some(message) = config_warning {
            diagnostics.log_event(AppEvent::ConfigWarning {
                message: message.clone(),
            });
            notifications.push(Notification::warning(message));
        }

        let catalog: Arc<dyn PlanCatalog> = match EmbeddedCatalog::load() {
            Ok(catalog) => Arc::new(catalog),
            Err(err) => {
                tracing::error!(error = %err, "bundled catalog unreadable");
                notifications.push(
                    Notification::error("The bundled plan catalog could not be read.")
                        .with_title("Catalog unavailable"),
                );
                Arc::new(EmbeddedCatalog::from_records(Vec::new(), Vec::new()))
            }
        };

        let endpoints = config.api.endpoints();
        let client = http::build_client(config.api.request_timeout()).unwrap_or_else(|err| {
            tracing::error!(error = %err, "HTTP client setup failed, using defaults");
            reqwest::Client::default()
        });
        tracing::info!(
            plan_detail = endpoints.plan_detail.as_deref().unwrap_or("<unset>"),
            quotes = endpoints.quotes.as_deref().unwrap_or("<unset>"),
            catalog_plans = catalog.section(CatalogSection::HousePlans).len(),
            "storefront configured"
        );

        let lookup = PlanLookup::new(
            Arc::new(HttpPlanSource::new(client.clone(), endpoints.clone())),
            Arc::clone(&catalog),
        );
        let quote_submitter: Arc<dyn QuoteSubmitter> =
            Arc::new(HttpQuoteSubmitter::new(client.clone(), endpoints.clone()));

        let mut app = App {
            screen: Screen::Listing,
            theme_mode: config.general.theme_mode,
            catalog,
            lookup,
            quote_submitter,
            client,
            endpoints,
            images: ImageCache::new(config.gallery.cache_capacity()),
            gallery: gallery::State::default(),
            plan_details: None,
            quote: quote::State::default(),
            notifications,
            diagnostics,
        };

        let mut ctx = app.update_context();
        let task = match flags.plan.filter(|id| !id.trim().is_empty()) {
            Some(id) => update::open_plan(&mut ctx, PlanId::new(id)),
            None => update::show_listing(&mut ctx),
        };

        (app, task)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            screen: &mut self.screen,
            theme_mode: &mut self.theme_mode,
            catalog: &self.catalog,
            lookup: &self.lookup,
            quote_submitter: &self.quote_submitter,
            client: &self.client,
            endpoints: &self.endpoints,
            images: &mut self.images,
            gallery: &mut self.gallery,
            plan_details: &mut self.plan_details,
            quote: &mut self.quote,
            notifications: &mut self.notifications,
            diagnostics: &self.diagnostics,
        }
    }

    fn title(&self) -> String {
        match self.screen {
            Screen::Listing => APP_TITLE.to_string(),
            Screen::PlanDetails => match self.plan_details.as_ref().and_then(|d| d.plan()) {
                Some(plan) => format!("{} - {APP_TITLE}", plan.title),
                None => APP_TITLE.to_string(),
            },
            Screen::GetQuote => format!("Get a Quote - {APP_TITLE}"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn overlay_open(&self) -> bool {
        self.gallery.is_open()
            || self
                .plan_details
                .as_ref()
                .is_some_and(|details| details.overlay().is_open())
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_overlay_keys_subscription(self.overlay_open()),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();
        match message {
            Message::Navbar(msg) => update::handle_navbar_message(&mut ctx, msg),
            Message::Listing(msg) => update::handle_listing_message(&mut ctx, msg),
            Message::PlanDetails(msg) => update::handle_plan_details_message(&mut ctx, msg),
            Message::Gallery(msg) => update::handle_gallery_message(&mut ctx, msg),
            Message::Quote(msg) => update::handle_quote_message(&mut ctx, msg),
            Message::Notification(msg) => {
                ctx.notifications.handle_message(&msg);
                Task::none()
            }
            Message::ImageLoaded { reference, result } => {
                update::handle_image_loaded(&mut ctx, reference, result);
                Task::none()
            }
            Message::Key(key) => update::handle_key(&mut ctx, key),
            Message::Tick(now) => {
                ctx.notifications.tick_at(now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            screen: self.screen,
            theme_mode: self.theme_mode,
            catalog: self.catalog.as_ref(),
            images: &self.images,
            gallery: &self.gallery,
            plan_details: self.plan_details.as_ref(),
            quote: &self.quote,
            notifications: &self.notifications,
        })
    }
}
