//! Pointer interaction system for the inspector.
//!
//! Clickable regions are registered into a [`HitAreaRegistry`] during
//! rendering; the event loop hit-tests mouse events against it and
//! dispatches the resulting [`ClickAction`] through
//! [`handle_click_action`].

mod click_handler;
mod hit_area;

pub use click_handler::handle_click_action;
pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};
