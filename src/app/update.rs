// SPDX-License-Identifier: MPL-2.0
//! Update handlers for the application.
//!
//! Components change their own state and hand back an effect; the handlers
//! here turn effects into tasks, notifications, and diagnostic records.

use super::{config, Message, Screen};
use crate::application::port::{FetchError, PlanCatalog, QuoteSubmitter};
use crate::application::query::PlanLookup;
use crate::diagnostics::{AppEvent, DiagnosticsHandle, UserAction};
use crate::domain::plan::PlanId;
use crate::domain::purchase::{ContactField, WizardStage};
use crate::domain::quote::MissingInput;
use crate::infrastructure::http::{images, ApiEndpoints};
use crate::media::ImageCache;
use crate::ui::gallery::{self, NavKey};
use crate::ui::navbar::{self, Destination, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::plan_details::{self, ActiveOverlay};
use crate::ui::theming::ThemeMode;
use crate::ui::{listing, quote};
use iced::widget::image;
use iced::Task;
use std::sync::Arc;
use std::time::Duration;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub theme_mode: &'a mut ThemeMode,
    pub catalog: &'a Arc<dyn PlanCatalog>,
    pub lookup: &'a PlanLookup,
    pub quote_submitter: &'a Arc<dyn QuoteSubmitter>,
    pub client: &'a reqwest::Client,
    pub endpoints: &'a ApiEndpoints,
    pub images: &'a mut ImageCache,
    pub gallery: &'a mut gallery::State,
    pub plan_details: &'a mut Option<plan_details::State>,
    pub quote: &'a mut quote::State,
    pub notifications: &'a mut notifications::Manager,
    pub diagnostics: &'a DiagnosticsHandle,
}

// =============================================================================
// Navigation
// =============================================================================

/// Leaves the current screen, cancelling any in-flight plan fetch.
fn leave_plan_details(ctx: &mut UpdateContext<'_>) {
    if let Some(mut details) = ctx.plan_details.take() {
        details.teardown();
    }
}

/// Switches to the listing and requests its cover images.
pub fn show_listing(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    leave_plan_details(ctx);
    *ctx.screen = Screen::Listing;
    ctx.diagnostics.log_action(UserAction::OpenListing);
    let covers = listing::cover_images(ctx.catalog.as_ref());
    load_images(ctx, covers)
}

pub fn show_quote(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    leave_plan_details(ctx);
    let _ = ctx.gallery.handle(gallery::Message::Close);
    *ctx.screen = Screen::GetQuote;
    ctx.diagnostics.log_action(UserAction::OpenQuote);
    Task::none()
}

/// Opens the detail page for `id` and starts resolving it.
pub fn open_plan(ctx: &mut UpdateContext<'_>, id: PlanId) -> Task<Message> {
    leave_plan_details(ctx);
    let _ = ctx.gallery.handle(gallery::Message::Close);
    ctx.diagnostics.log_action(UserAction::OpenPlan {
        plan_id: id.as_str().to_string(),
    });

    let details = plan_details::State::new(id.clone());
    let request = details.request();
    let cancel = details.cancel_token();
    *ctx.plan_details = Some(details);
    *ctx.screen = Screen::PlanDetails;

    let lookup = ctx.lookup.clone();
    Task::perform(
        async move { lookup.resolve(&id, &cancel).await },
        move |resolution| {
            Message::PlanDetails(plan_details::Message::Resolved {
                request,
                resolution,
            })
        },
    )
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, ctx.theme_mode) {
        NavbarEvent::Navigate(Destination::Listing) => show_listing(ctx),
        NavbarEvent::Navigate(Destination::Quote) => show_quote(ctx),
        NavbarEvent::ThemeChanged(mode) => {
            ctx.diagnostics.log_action(UserAction::ChangeTheme { mode: mode.label() });
            persist_theme(ctx, mode);
            Task::none()
        }
    }
}

/// Writes the theme choice back to the settings file. Environment and CLI
/// overrides are not written, since the file is reloaded from disk first.
fn persist_theme(ctx: &mut UpdateContext<'_>, mode: ThemeMode) {
    let (mut stored, _) = config::load();
    stored.general.theme_mode = mode;
    if let Err(err) = config::save(&stored) {
        tracing::warn!(error = %err, "theme preference not saved");
        ctx.notifications
            .push(Notification::warning("Theme preference could not be saved"));
    }
}

// =============================================================================
// Images
// =============================================================================

/// Starts downloads for every reference not already cached or in flight.
///
/// Only the first `capacity` references are considered, so one batch never
/// evicts images it asked for itself. Callers list the nearest images first.
/// References that cannot be turned into a URL are marked failed at once,
/// which draws the placeholder.
pub fn load_images(ctx: &mut UpdateContext<'_>, references: Vec<String>) -> Task<Message> {
    let budget = ctx.images.capacity();
    let mut tasks = Vec::new();
    for reference in references.into_iter().take(budget) {
        if !ctx.images.begin_load(&reference) {
            continue;
        }
        let Some(url) = ctx.endpoints.media_url(&reference) else {
            ctx.images.insert_failed(reference);
            continue;
        };
        let client = ctx.client.clone();
        tasks.push(Task::perform(
            images::fetch_and_decode(client, url),
            move |result| Message::ImageLoaded {
                reference,
                result: result.map(|decoded| {
                    image::Handle::from_rgba(decoded.width, decoded.height, decoded.rgba)
                }),
            },
        ));
    }
    Task::batch(tasks)
}

pub fn handle_image_loaded(
    ctx: &mut UpdateContext<'_>,
    reference: String,
    result: Result<image::Handle, FetchError>,
) {
    match result {
        Ok(handle) => ctx.images.insert_ready(reference, handle),
        Err(reason) => {
            ctx.diagnostics.log_event(AppEvent::ImageLoadFailed {
                reason: reason.to_string(),
            });
            ctx.images.insert_failed(reference);
        }
    }
}

// =============================================================================
// Listing and gallery
// =============================================================================

pub fn handle_listing_message(
    ctx: &mut UpdateContext<'_>,
    message: listing::Message,
) -> Task<Message> {
    match message {
        listing::Message::OpenPlan(id) => open_plan(ctx, id),
        listing::Message::OpenGallery(id) => {
            let Some(plan) = ctx.catalog.find(&id) else {
                return Task::none();
            };
            let open = gallery::Message::Open {
                images: plan.images.clone(),
                initial: 0,
                title: Some(plan.title.clone()),
            };
            ctx.diagnostics.log_action(UserAction::OpenGallery);
            handle_gallery_message(ctx, open)
        }
    }
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    match &message {
        gallery::Message::Next | gallery::Message::Key(NavKey::Next) => {
            ctx.diagnostics.log_action(UserAction::NextImage);
        }
        gallery::Message::Previous | gallery::Message::Key(NavKey::Previous) => {
            ctx.diagnostics.log_action(UserAction::PreviousImage);
        }
        gallery::Message::Select(index) => {
            ctx.diagnostics
                .log_action(UserAction::SelectImage { index: *index });
        }
        _ => {}
    }

    match ctx.gallery.handle(message) {
        gallery::Effect::None => Task::none(),
        gallery::Effect::LoadImages(references) => load_images(ctx, references),
        gallery::Effect::Closed => {
            ctx.diagnostics.log_action(UserAction::CloseGallery);
            Task::none()
        }
    }
}

/// Sends a navigation key to whichever overlay is on top.
pub fn handle_key(ctx: &mut UpdateContext<'_>, key: NavKey) -> Task<Message> {
    if ctx.gallery.is_open() {
        return handle_gallery_message(ctx, gallery::Message::Key(key));
    }
    if *ctx.screen == Screen::PlanDetails {
        return handle_plan_details_message(ctx, plan_details::Message::Key(key));
    }
    Task::none()
}

// =============================================================================
// Plan details
// =============================================================================

fn stage_label(stage: WizardStage) -> &'static str {
    match stage {
        WizardStage::Closed => "closed",
        WizardStage::BuyIntent => "buy_intent",
        WizardStage::Payment => "payment",
        WizardStage::Success => "success",
    }
}

fn field_names(fields: &[ContactField]) -> String {
    fields
        .iter()
        .map(|field| field.placeholder().trim_start_matches("Your "))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn handle_plan_details_message(
    ctx: &mut UpdateContext<'_>,
    message: plan_details::Message,
) -> Task<Message> {
    let Some(details) = ctx.plan_details.as_mut() else {
        return Task::none();
    };

    let fullscreen = details.overlay() == ActiveOverlay::Fullscreen;
    match &message {
        plan_details::Message::CarouselNext => {
            ctx.diagnostics.log_action(UserAction::NextImage);
        }
        plan_details::Message::CarouselPrevious => {
            ctx.diagnostics.log_action(UserAction::PreviousImage);
        }
        plan_details::Message::Key(NavKey::Next) if fullscreen => {
            ctx.diagnostics.log_action(UserAction::NextImage);
        }
        plan_details::Message::Key(NavKey::Previous) if fullscreen => {
            ctx.diagnostics.log_action(UserAction::PreviousImage);
        }
        plan_details::Message::CarouselSelect(index) => {
            ctx.diagnostics
                .log_action(UserAction::SelectImage { index: *index });
        }
        _ => {}
    }

    let plan_id = details.plan_id().as_str().to_string();
    match details.handle(message) {
        plan_details::Effect::None => Task::none(),
        plan_details::Effect::PlanShown { origin, images } => {
            ctx.diagnostics.log_event(AppEvent::PlanResolved {
                plan_id,
                source: origin.label(),
            });
            load_images(ctx, images)
        }
        plan_details::Effect::LoadImages(references) => load_images(ctx, references),
        plan_details::Effect::PlanMissing { reason } => {
            tracing::info!(plan_id = %plan_id, reason = %reason, "plan not found");
            Task::none()
        }
        plan_details::Effect::CopyToClipboard(link) => {
            ctx.diagnostics.log_action(UserAction::CopyVideoLink);
            ctx.notifications
                .push(Notification::success("Video link copied to the clipboard"));
            iced::clipboard::write(link)
        }
        plan_details::Effect::BackToListing => show_listing(ctx),
        plan_details::Effect::StageEntered(stage) => {
            ctx.diagnostics.log_action(UserAction::PurchaseStep {
                stage: stage_label(stage),
            });
            Task::none()
        }
        plan_details::Effect::MissingContact(fields) => {
            ctx.notifications.push(
                Notification::warning(format!("Please fill in: {}", field_names(&fields)))
                    .with_title("Missing contact details"),
            );
            Task::none()
        }
        plan_details::Effect::OverlayOpened(overlay) => {
            match overlay {
                ActiveOverlay::Fullscreen => ctx.diagnostics.log_action(UserAction::OpenFullscreen),
                ActiveOverlay::Video => ctx.diagnostics.log_action(UserAction::OpenVideo),
                ActiveOverlay::None | ActiveOverlay::Purchase(_) => {}
            }
            Task::none()
        }
        plan_details::Effect::OverlayClosed(overlay) => {
            match overlay {
                ActiveOverlay::Fullscreen => {
                    ctx.diagnostics.log_action(UserAction::CloseFullscreen);
                }
                ActiveOverlay::Video => ctx.diagnostics.log_action(UserAction::CloseVideo),
                ActiveOverlay::None | ActiveOverlay::Purchase(_) => {}
            }
            Task::none()
        }
        plan_details::Effect::FavouriteToggled(on) => {
            ctx.diagnostics.log_action_with_details(
                UserAction::ToggleFavourite,
                Some(if on { "on" } else { "off" }.to_string()),
            );
            Task::none()
        }
    }
}

// =============================================================================
// Quote
// =============================================================================

fn missing_names(missing: &[MissingInput]) -> String {
    missing
        .iter()
        .map(MissingInput::label)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn handle_quote_message(ctx: &mut UpdateContext<'_>, message: quote::Message) -> Task<Message> {
    if matches!(message, quote::Message::Submit) {
        ctx.diagnostics.log_action(UserAction::SubmitQuote);
    }

    match ctx.quote.handle(message) {
        quote::Effect::None => Task::none(),
        quote::Effect::Submit(request) => {
            let submitter = Arc::clone(ctx.quote_submitter);
            Task::perform(
                async move { submitter.submit_quote(&request).await },
                |result| Message::Quote(quote::Message::Submitted(result)),
            )
        }
        quote::Effect::Missing(missing) => {
            ctx.notifications.push(
                Notification::warning(format!("Please fill in: {}", missing_names(&missing)))
                    .with_title("Missing details"),
            );
            Task::none()
        }
        quote::Effect::Sent => {
            ctx.diagnostics.log_event(AppEvent::QuoteSubmitted);
            ctx.notifications.push(Notification::success(
                "Quote request sent. We'll be in touch within 24 hours.",
            ));
            Task::perform(
                tokio::time::sleep(Duration::from_millis(config::QUOTE_RESET_DELAY_MS)),
                |()| Message::Quote(quote::Message::ResetAfterSent),
            )
        }
        quote::Effect::Failed(reason) => {
            ctx.diagnostics.log_event(AppEvent::QuoteFailed {
                reason: reason.to_string(),
            });
            ctx.notifications.push(
                Notification::error(
                    "Error submitting quote. Please check your connection and try again.",
                )
                .with_title("Submission Failed"),
            );
            Task::none()
        }
    }
}
