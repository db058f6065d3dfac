// SPDX-License-Identifier: MPL-2.0
//! Detail page state and message handling.

use super::overlay::ActiveOverlay;
use crate::application::port::{CancellationToken, FetchError};
use crate::application::query::PlanResolution;
use crate::domain::gallery::GalleryIndex;
use crate::domain::plan::{PlanId, PlanRecord};
use crate::domain::purchase::{
    Checkout, ContactField, PaymentField, Rejection, WizardAction, WizardStage,
};
use crate::domain::video;
use crate::ui::gallery::{load_order, NavKey};
use std::sync::atomic::{AtomicU64, Ordering};

/// Where the shown plan came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanOrigin {
    Api,
    Catalog,
}

impl PlanOrigin {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PlanOrigin::Api => "api",
            PlanOrigin::Catalog => "catalog",
        }
    }
}

/// Loading state of the page.
#[derive(Debug, Clone)]
pub enum Load {
    Loading,
    Ready {
        plan: Box<PlanRecord>,
        origin: PlanOrigin,
        /// Carousel position; `None` when the plan has no images.
        carousel: Option<GalleryIndex>,
    },
    NotFound,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Result of the fetch started with request number `request`.
    Resolved {
        request: u64,
        resolution: PlanResolution,
    },
    CarouselNext,
    CarouselPrevious,
    CarouselSelect(usize),
    OpenFullscreen,
    OpenVideo,
    CopyVideoLink,
    CloseOverlay,
    Key(NavKey),
    Wizard(WizardAction),
    ContactChanged(ContactField, String),
    PaymentChanged(PaymentField, String),
    ToggleDescription,
    ToggleFloor(usize),
    ToggleFavourite,
    BackToListing,
}

/// Effects produced by detail page changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// The plan is on screen; fetch its images.
    PlanShown {
        origin: PlanOrigin,
        images: Vec<String>,
    },
    /// Neither the API nor the catalog had the plan.
    PlanMissing { reason: FetchError },
    /// The carousel moved; fetch these images again if they were evicted.
    LoadImages(Vec<String>),
    CopyToClipboard(String),
    BackToListing,
    /// A wizard action was accepted and `stage` entered.
    StageEntered(WizardStage),
    /// "Proceed" was refused because these fields are blank.
    MissingContact(Vec<ContactField>),
    OverlayOpened(ActiveOverlay),
    OverlayClosed(ActiveOverlay),
    FavouriteToggled(bool),
}

/// Detail page state for one plan identity.
#[derive(Debug)]
pub struct State {
    plan_id: PlanId,
    request: u64,
    cancel: CancellationToken,
    load: Load,
    overlay: ActiveOverlay,
    checkout: Checkout,
    missing_contact: Vec<ContactField>,
    show_full_description: bool,
    /// Expanded flag per floor; the first floor starts expanded.
    expanded_floors: Vec<bool>,
    favourite: bool,
}

impl State {
    /// Starts loading `plan_id`. The caller runs the fetch with the returned
    /// request number and token.
    #[must_use]
    pub fn new(plan_id: PlanId) -> Self {
        static NEXT_REQUEST: AtomicU64 = AtomicU64::new(1);
        Self {
            plan_id,
            request: NEXT_REQUEST.fetch_add(1, Ordering::Relaxed),
            cancel: CancellationToken::new(),
            load: Load::Loading,
            overlay: ActiveOverlay::None,
            checkout: Checkout::default(),
            missing_contact: Vec::new(),
            show_full_description: false,
            expanded_floors: Vec::new(),
            favourite: false,
        }
    }

    #[must_use]
    pub fn plan_id(&self) -> &PlanId {
        &self.plan_id
    }

    #[must_use]
    pub fn request(&self) -> u64 {
        self.request
    }

    /// Token passed to the fetch; cancelled by [`State::teardown`].
    #[must_use]
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Cancels the in-flight fetch and drops any purchase details. Called
    /// when the page is left.
    pub fn teardown(&mut self) {
        self.cancel.cancel();
        self.checkout.clear();
        self.overlay = ActiveOverlay::None;
    }

    #[must_use]
    pub fn load(&self) -> &Load {
        &self.load
    }

    #[must_use]
    pub fn plan(&self) -> Option<&PlanRecord> {
        match &self.load {
            Load::Ready { plan, .. } => Some(plan.as_ref()),
            Load::Loading | Load::NotFound => None,
        }
    }

    #[must_use]
    pub fn carousel(&self) -> Option<GalleryIndex> {
        match &self.load {
            Load::Ready { carousel, .. } => *carousel,
            Load::Loading | Load::NotFound => None,
        }
    }

    #[must_use]
    pub fn overlay(&self) -> ActiveOverlay {
        self.overlay
    }

    #[must_use]
    pub fn checkout(&self) -> &Checkout {
        &self.checkout
    }

    #[must_use]
    pub fn missing_contact(&self) -> &[ContactField] {
        &self.missing_contact
    }

    #[must_use]
    pub fn shows_full_description(&self) -> bool {
        self.show_full_description
    }

    #[must_use]
    pub fn is_floor_expanded(&self, index: usize) -> bool {
        self.expanded_floors.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn is_favourite(&self) -> bool {
        self.favourite
    }

    /// Embed link for the plan video, if any.
    #[must_use]
    pub fn embed_link(&self) -> Option<String> {
        self.plan()
            .filter(|plan| plan.has_video())
            .and_then(|plan| plan.video.as_deref())
            .map(video::embed_url)
    }

    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Resolved {
                request,
                resolution,
            } => self.resolve(request, resolution),
            Message::CarouselNext => self.step(GalleryIndex::next),
            Message::CarouselPrevious => self.step(GalleryIndex::previous),
            Message::CarouselSelect(i) => self.step(|index| index.select(i)),
            Message::OpenFullscreen => {
                if self.carousel().is_some() {
                    self.open_overlay(ActiveOverlay::Fullscreen)
                } else {
                    Effect::None
                }
            }
            Message::OpenVideo => {
                if self.embed_link().is_some() {
                    self.open_overlay(ActiveOverlay::Video)
                } else {
                    Effect::None
                }
            }
            Message::CopyVideoLink => match (self.overlay, self.embed_link()) {
                (ActiveOverlay::Video, Some(link)) => Effect::CopyToClipboard(link),
                _ => Effect::None,
            },
            Message::CloseOverlay => self.close_overlay(),
            Message::Key(key) => self.handle_key(key),
            Message::Wizard(action) => self.apply_wizard(action),
            Message::ContactChanged(field, value) => {
                if matches!(self.overlay, ActiveOverlay::Purchase(WizardStage::BuyIntent)) {
                    self.checkout.contact.set(field, value);
                    self.missing_contact.retain(|f| *f != field);
                }
                Effect::None
            }
            Message::PaymentChanged(field, raw) => {
                if matches!(self.overlay, ActiveOverlay::Purchase(WizardStage::Payment)) {
                    self.checkout.payment.set(field, &raw);
                }
                Effect::None
            }
            Message::ToggleDescription => {
                self.show_full_description = !self.show_full_description;
                Effect::None
            }
            Message::ToggleFloor(index) => {
                if let Some(expanded) = self.expanded_floors.get_mut(index) {
                    *expanded = !*expanded;
                }
                Effect::None
            }
            Message::ToggleFavourite => {
                self.favourite = !self.favourite;
                Effect::FavouriteToggled(self.favourite)
            }
            Message::BackToListing => Effect::BackToListing,
        }
    }

    fn resolve(&mut self, request: u64, resolution: PlanResolution) -> Effect {
        if request != self.request || self.cancel.is_cancelled() {
            tracing::debug!(request, current = self.request, "discarding stale plan result");
            return Effect::None;
        }
        if !matches!(self.load, Load::Loading) {
            return Effect::None;
        }

        let (plan, origin) = match resolution {
            PlanResolution::Fetched(plan) => (plan, PlanOrigin::Api),
            PlanResolution::Fallback { plan, .. } => (plan, PlanOrigin::Catalog),
            PlanResolution::NotFound { reason } => {
                self.load = Load::NotFound;
                return Effect::PlanMissing { reason };
            }
            PlanResolution::Cancelled => return Effect::None,
        };

        let carousel = GalleryIndex::new(plan.images.len(), 0);
        let images = carousel.map_or_else(Vec::new, |index| load_order(&plan.images, index));
        self.expanded_floors = (0..plan.floors.len()).map(|i| i == 0).collect();
        self.load = Load::Ready {
            carousel,
            plan: Box::new(plan),
            origin,
        };
        Effect::PlanShown { origin, images }
    }

    fn step(&mut self, f: impl FnOnce(GalleryIndex) -> GalleryIndex) -> Effect {
        match &mut self.load {
            Load::Ready {
                carousel: Some(index),
                plan,
                ..
            } => {
                *index = f(*index);
                Effect::LoadImages(load_order(&plan.images, *index))
            }
            _ => Effect::None,
        }
    }

    fn open_overlay(&mut self, overlay: ActiveOverlay) -> Effect {
        if self.overlay.is_open() {
            return Effect::None;
        }
        self.overlay = overlay;
        Effect::OverlayOpened(overlay)
    }

    fn close_overlay(&mut self) -> Effect {
        match self.overlay {
            ActiveOverlay::None => Effect::None,
            ActiveOverlay::Purchase(_) => self.apply_wizard(WizardAction::Cancel),
            closed @ (ActiveOverlay::Fullscreen | ActiveOverlay::Video) => {
                self.overlay = ActiveOverlay::None;
                Effect::OverlayClosed(closed)
            }
        }
    }

    fn handle_key(&mut self, key: NavKey) -> Effect {
        match (self.overlay, key) {
            (ActiveOverlay::None, _) => Effect::None,
            (_, NavKey::Close) => self.close_overlay(),
            (ActiveOverlay::Fullscreen, NavKey::Next) => self.step(GalleryIndex::next),
            (ActiveOverlay::Fullscreen, NavKey::Previous) => self.step(GalleryIndex::previous),
            _ => Effect::None,
        }
    }

    fn apply_wizard(&mut self, action: WizardAction) -> Effect {
        if self.plan().is_none() {
            return Effect::None;
        }
        // Buying is only offered while no other overlay is up.
        if action == WizardAction::Buy && self.overlay.is_open() {
            return Effect::None;
        }

        match self.checkout.apply(self.overlay.wizard_stage(), action) {
            Ok(stage) => {
                self.overlay = ActiveOverlay::from_stage(stage);
                self.missing_contact.clear();
                Effect::StageEntered(stage)
            }
            Err(Rejection::MissingContact(fields)) => {
                self.missing_contact.clone_from(&fields);
                Effect::MissingContact(fields)
            }
            Err(Rejection::InvalidTransition) => Effect::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::plan::FloorDescriptor;

    fn plan(images: usize, video: Option<&str>) -> PlanRecord {
        PlanRecord {
            id: PlanId::from("1"),
            title: "Marula".into(),
            price: 18_500,
            bedrooms: 4,
            bathrooms: 3,
            garage: 2,
            floor_area: 245,
            levels: 2,
            width: 18.0,
            depth: 22.0,
            styles: vec!["Modern".into()],
            is_new: true,
            is_popular: false,
            pet_friendly: true,
            images: (0..images).map(|i| format!("/media/{i}.jpg")).collect(),
            description: "A home.".into(),
            features: vec![],
            amenities: vec![],
            floors: vec![
                FloorDescriptor {
                    level: "ground".into(),
                    area: 135,
                    bedrooms: 1,
                    bathrooms: 1.0,
                    lounges: 1,
                    dining_areas: 1,
                    notes: None,
                },
                FloorDescriptor {
                    level: "first".into(),
                    area: 110,
                    bedrooms: 3,
                    bathrooms: 2.0,
                    lounges: 1,
                    dining_areas: 0,
                    notes: None,
                },
            ],
            video: video.map(str::to_string),
        }
    }

    fn ready(images: usize, video: Option<&str>) -> State {
        let mut state = State::new(PlanId::from("1"));
        let request = state.request();
        state.handle(Message::Resolved {
            request,
            resolution: PlanResolution::Fetched(plan(images, video)),
        });
        state
    }

    fn fill_contact(state: &mut State) {
        for (field, value) in [
            (ContactField::Name, "Thandi"),
            (ContactField::Email, "thandi@example.com"),
            (ContactField::Phone, "0821234567"),
        ] {
            state.handle(Message::ContactChanged(field, value.into()));
        }
    }

    #[test]
    fn resolution_shows_plan_and_requests_images() {
        let mut state = State::new(PlanId::from("1"));
        let request = state.request();
        let effect = state.handle(Message::Resolved {
            request,
            resolution: PlanResolution::Fallback {
                plan: plan(2, None),
                reason: FetchError::Status(500),
            },
        });
        assert_eq!(
            effect,
            Effect::PlanShown {
                origin: PlanOrigin::Catalog,
                images: vec!["/media/0.jpg".into(), "/media/1.jpg".into()],
            }
        );
        assert_eq!(state.plan().map(|p| p.title.as_str()), Some("Marula"));
        assert!(state.is_floor_expanded(0));
        assert!(!state.is_floor_expanded(1));
    }

    #[test]
    fn stale_results_are_discarded() {
        let mut state = State::new(PlanId::from("1"));
        let stale = state.request().wrapping_sub(1);
        let effect = state.handle(Message::Resolved {
            request: stale,
            resolution: PlanResolution::Fetched(plan(1, None)),
        });
        assert_eq!(effect, Effect::None);
        assert!(matches!(state.load(), Load::Loading));
    }

    #[test]
    fn results_after_teardown_are_discarded() {
        let mut state = State::new(PlanId::from("1"));
        let request = state.request();
        let token = state.cancel_token();
        state.teardown();
        assert!(token.is_cancelled());
        state.handle(Message::Resolved {
            request,
            resolution: PlanResolution::Fetched(plan(1, None)),
        });
        assert!(state.plan().is_none());
    }

    #[test]
    fn not_found_state() {
        let mut state = State::new(PlanId::from("404"));
        let request = state.request();
        let effect = state.handle(Message::Resolved {
            request,
            resolution: PlanResolution::NotFound {
                reason: FetchError::Status(404),
            },
        });
        assert_eq!(
            effect,
            Effect::PlanMissing {
                reason: FetchError::Status(404)
            }
        );
        assert!(matches!(state.load(), Load::NotFound));
    }

    #[test]
    fn full_purchase_flow_clears_details() {
        let mut state = ready(2, None);
        assert_eq!(
            state.handle(Message::Wizard(WizardAction::Buy)),
            Effect::StageEntered(WizardStage::BuyIntent)
        );
        fill_contact(&mut state);
        state.handle(Message::Wizard(WizardAction::Proceed));
        state.handle(Message::PaymentChanged(
            PaymentField::CardNumber,
            "4111111111111111".into(),
        ));
        assert_eq!(
            state.checkout().payment.card_number(),
            "4111 1111 1111 1111"
        );
        state.handle(Message::Wizard(WizardAction::Complete));
        assert_eq!(state.overlay(), ActiveOverlay::Purchase(WizardStage::Success));

        let effect = state.handle(Message::Wizard(WizardAction::ContinueShopping));
        assert_eq!(effect, Effect::StageEntered(WizardStage::Closed));
        assert_eq!(state.overlay(), ActiveOverlay::None);
        assert_eq!(*state.checkout(), Checkout::default());
    }

    #[test]
    fn proceed_without_contact_is_refused() {
        let mut state = ready(1, None);
        state.handle(Message::Wizard(WizardAction::Buy));
        let effect = state.handle(Message::Wizard(WizardAction::Proceed));
        assert_eq!(
            effect,
            Effect::MissingContact(vec![
                ContactField::Name,
                ContactField::Email,
                ContactField::Phone
            ])
        );
        assert_eq!(state.overlay(), ActiveOverlay::Purchase(WizardStage::BuyIntent));

        state.handle(Message::ContactChanged(ContactField::Name, "A".into()));
        assert_eq!(
            state.missing_contact(),
            &[ContactField::Email, ContactField::Phone]
        );
    }

    #[test]
    fn contact_is_frozen_once_payment_starts() {
        let mut state = ready(1, None);
        state.handle(Message::Wizard(WizardAction::Buy));
        fill_contact(&mut state);
        state.handle(Message::Wizard(WizardAction::Proceed));
        assert_eq!(state.overlay(), ActiveOverlay::Purchase(WizardStage::Payment));

        state.handle(Message::ContactChanged(ContactField::Email, String::new()));
        assert_eq!(state.checkout().contact.name, "Thandi");
        assert_eq!(state.checkout().contact.email, "thandi@example.com");
    }

    #[test]
    fn escape_cancels_wizard_and_clears_contact() {
        let mut state = ready(1, None);
        state.handle(Message::Wizard(WizardAction::Buy));
        fill_contact(&mut state);
        state.handle(Message::Key(NavKey::Close));
        assert_eq!(state.overlay(), ActiveOverlay::None);
        assert!(state.checkout().contact.is_empty());
    }

    #[test]
    fn only_one_overlay_at_a_time() {
        let mut state = ready(3, Some("https://youtu.be/abc"));
        state.handle(Message::OpenFullscreen);
        assert_eq!(state.handle(Message::OpenVideo), Effect::None);
        assert_eq!(state.handle(Message::Wizard(WizardAction::Buy)), Effect::None);
        assert_eq!(state.overlay(), ActiveOverlay::Fullscreen);
    }

    #[test]
    fn fullscreen_keys_move_carousel() {
        let mut state = ready(3, None);
        state.handle(Message::OpenFullscreen);
        state.handle(Message::Key(NavKey::Previous));
        assert_eq!(state.carousel().map(GalleryIndex::current), Some(2));
        state.handle(Message::Key(NavKey::Close));
        assert_eq!(state.overlay(), ActiveOverlay::None);
        // Keys are ignored with no overlay.
        state.handle(Message::Key(NavKey::Next));
        assert_eq!(state.carousel().map(GalleryIndex::current), Some(2));
    }

    #[test]
    fn carousel_moves_request_nearest_images() {
        let mut state = ready(10, None);
        let Effect::LoadImages(references) = state.handle(Message::CarouselSelect(4)) else {
            panic!("carousel move should request images");
        };
        assert_eq!(references.len(), 10);
        assert_eq!(references[..3], ["/media/4.jpg", "/media/5.jpg", "/media/3.jpg"]);
    }

    #[test]
    fn video_overlay_needs_a_video() {
        let mut state = ready(1, None);
        assert_eq!(state.handle(Message::OpenVideo), Effect::None);

        let mut state = ready(1, Some("https://youtu.be/abc123?t=3"));
        state.handle(Message::OpenVideo);
        assert_eq!(
            state.handle(Message::CopyVideoLink),
            Effect::CopyToClipboard(
                "https://www.youtube.com/embed/abc123?autoplay=1&mute=1&loop=1&playlist=abc123"
                    .into()
            )
        );
    }

    #[test]
    fn plan_without_images_has_no_fullscreen() {
        let mut state = ready(0, None);
        assert!(state.carousel().is_none());
        assert_eq!(state.handle(Message::OpenFullscreen), Effect::None);
    }

    #[test]
    fn payment_edits_ignored_outside_payment_stage() {
        let mut state = ready(1, None);
        state.handle(Message::PaymentChanged(PaymentField::Cvv, "123".into()));
        assert!(state.checkout().payment.is_empty());
    }
}
