// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Screens follow the Elm-style "state down, messages up" pattern: each
//! component owns its state, handles its own messages, and returns an effect
//! for the application to act on.
//!
//! # Screens
//!
//! - [`listing`] - Catalog cards for house plans and built homes
//! - [`plan_details`] - Detail page with carousel and its overlays
//! - [`quote`] - Custom quote request form
//!
//! # Shared Infrastructure
//!
//! - [`gallery`] - Modal image carousel and shared overlay widgets
//! - [`image_frame`] - Cached image or placeholder at a fixed size
//! - [`navbar`] - Top navigation and theme toggle
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Inline SVG icons

pub mod design_tokens;
pub mod gallery;
pub mod icons;
pub mod image_frame;
pub mod listing;
pub mod navbar;
pub mod notifications;
pub mod plan_details;
pub mod quote;
pub mod styles;
pub mod theming;
