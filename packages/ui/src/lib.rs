//! Shared "view more" widget: a trigger button that opens nested content in
//! a modal dialog.

use dioxus::prelude::*;

pub mod components;
pub use components::{Breakpoint, ButtonVariant, ParseTokenError, ViewDialog};

pub mod config;
pub use config::ViewMoreConfig;

pub mod propagation;
pub use propagation::{stop_event_propagation, StopPropagation};

mod view_more;
pub use view_more::{
    activate_trigger, ConfiguredViewMore, OpenState, ViewMore, VIEW_MORE_MARKER,
};

/// Styles for the trigger button and the dialog. Include once per app.
pub const VIEW_MORE_CSS: Asset = asset!("/assets/view_more.css");

#[cfg(test)]
mod testing;

#[cfg(test)]
pub(crate) fn render_to_html(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
