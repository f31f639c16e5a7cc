//! "View more" trigger button that opens its content in a dialog.

use dioxus::prelude::*;

use crate::components::{button_class, Breakpoint, ButtonVariant, ViewDialog};
use crate::config::ViewMoreConfig;
use crate::propagation::{stop_event_propagation, StopPropagation};

/// Attribute marking the trigger so tooling can find it without relying on
/// its visible label.
pub const VIEW_MORE_MARKER: &str = "data-is-view-more-button";

/// Whether a ViewMore dialog is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpenState {
    #[default]
    Closed,
    Open,
}

impl OpenState {
    pub fn is_open(self) -> bool {
        self == OpenState::Open
    }

    /// Trigger activated. Stays open if already open.
    pub fn activate(&mut self) {
        *self = OpenState::Open;
    }

    /// Close requested. No-op when already closed.
    pub fn close(&mut self) {
        *self = OpenState::Closed;
    }
}

/// Handle a click on the trigger: open the dialog and keep the click from
/// reaching any clickable ancestor.
pub fn activate_trigger<E: StopPropagation + ?Sized>(state: &mut OpenState, event: &E) {
    state.activate();
    stop_event_propagation(event);
}

/// A small button that opens `children` in a modal dialog.
///
/// Safe to place inside clickable containers: the click that opens the
/// dialog, and every click inside the dialog, stays out of the container's
/// handlers.
///
/// ```rust,ignore
/// ViewMore {
///     button_text: "Details",
///     max_width: Breakpoint::Md,
///     RecordDetail { id }
/// }
/// ```
#[component]
pub fn ViewMore(
    button_text: String,
    #[props(default)] full_screen: bool,
    /// Defaults to `button_text`.
    title: Option<String>,
    #[props(default)] variant: ButtonVariant,
    max_width: Option<Breakpoint>,
    children: Element,
) -> Element {
    let config = ViewMoreConfig::new(button_text)
        .with_title(title)
        .with_full_screen(full_screen)
        .with_variant(variant)
        .with_max_width(max_width);

    rsx! {
        ConfiguredViewMore { config, {children} }
    }
}

/// [`ViewMore`] driven by an already resolved [`ViewMoreConfig`].
#[component]
pub fn ConfiguredViewMore(
    config: ViewMoreConfig,
    /// Start with the dialog showing.
    #[props(default)]
    default_open: bool,
    children: Element,
) -> Element {
    let mut state = use_signal(move || {
        if default_open {
            OpenState::Open
        } else {
            OpenState::Closed
        }
    });

    let label = config.button_text.clone();
    let title = config.title().to_string();
    let log_title = title.clone();

    let on_trigger = move |evt: MouseEvent| {
        activate_trigger(&mut *state.write(), &evt);
        tracing::debug!(title = %log_title, "view more opened");
    };

    let on_close = move |_: ()| {
        if state().is_open() {
            state.write().close();
            tracing::debug!("view more closed");
        }
    };

    rsx! {
        button {
            class: button_class(config.variant),
            r#type: "button",
            "data-is-view-more-button": "true",
            onclick: on_trigger,
            "{label}"
        }
        ViewDialog {
            open: state().is_open(),
            on_close,
            title,
            max_width: config.max_width,
            full_screen: config.full_screen,
            {children}
        }
    }
}
