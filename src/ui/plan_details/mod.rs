// SPDX-License-Identifier: MPL-2.0
//! Plan detail page: carousel, specifications, floors, and the overlays
//! layered on top of it (fullscreen image, video link, purchase wizard).
//!
//! At most one overlay is open at a time; see [`ActiveOverlay`].

mod component;
mod overlay;
mod purchase;
mod view;

pub use component::{Effect, Load, Message, PlanOrigin, State};
pub use overlay::ActiveOverlay;
pub use view::view;
