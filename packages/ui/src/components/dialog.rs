use std::fmt;
use std::str::FromStr;

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaXmark;
use dioxus_free_icons::Icon;
use serde::{Deserialize, Serialize};

use super::ParseTokenError;
use crate::propagation::stop_event_propagation;

/// Named width tier capping a dialog's maximum width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Breakpoint::Xs => "vm-dialog--xs",
            Breakpoint::Sm => "vm-dialog--sm",
            Breakpoint::Md => "vm-dialog--md",
            Breakpoint::Lg => "vm-dialog--lg",
            Breakpoint::Xl => "vm-dialog--xl",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Breakpoint {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|bp| bp.as_str() == s)
            .ok_or_else(|| ParseTokenError::Breakpoint(s.to_string()))
    }
}

/// Class list for the dialog panel. Full screen takes precedence over the
/// width tier; with neither set the panel keeps its natural width.
pub fn panel_class(max_width: Option<Breakpoint>, full_screen: bool) -> String {
    match (full_screen, max_width) {
        (true, _) => "vm-dialog vm-dialog--full-screen".to_string(),
        (false, Some(bp)) => format!("vm-dialog {}", bp.class()),
        (false, None) => "vm-dialog".to_string(),
    }
}

/// Modal dialog with a title bar, a close control and free-form body.
///
/// Controlled: visibility follows `open` and every close request (close
/// control, backdrop click, Escape) goes through `on_close`. Events raised
/// inside the dialog stop at its backdrop so they never reach whatever
/// element the dialog was declared in.
#[component]
pub fn ViewDialog(
    open: bool,
    on_close: EventHandler<()>,
    title: String,
    max_width: Option<Breakpoint>,
    #[props(default)] full_screen: bool,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    let class = panel_class(max_width, full_screen);

    rsx! {
        div {
            class: "vm-dialog-backdrop",
            tabindex: "-1",
            // Focus stays on the trigger otherwise, and its keydowns bubble
            // past the dialog.
            onmounted: move |evt: MountedEvent| async move {
                if let Err(e) = evt.set_focus(true).await {
                    tracing::debug!("could not focus dialog: {:?}", e);
                }
            },
            onclick: move |evt: MouseEvent| {
                stop_event_propagation(&evt);
                on_close.call(());
            },
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    stop_event_propagation(&evt);
                    on_close.call(());
                }
            },
            div {
                class: "{class}",
                role: "dialog",
                "aria-modal": "true",
                "aria-label": "{title}",
                "data-max-width": max_width.map(|bp| bp.as_str()),
                "data-full-screen": if full_screen { "true" } else { "false" },
                onclick: move |evt: MouseEvent| stop_event_propagation(&evt),
                div {
                    class: "vm-dialog-header",
                    h2 { class: "vm-dialog-title", "{title}" }
                    button {
                        class: "vm-dialog-close",
                        r#type: "button",
                        title: "Close",
                        "aria-label": "Close",
                        onclick: move |_| on_close.call(()),
                        Icon { icon: FaXmark, width: 14, height: 14 }
                    }
                }
                div {
                    class: "vm-dialog-body",
                    {children}
                }
            }
        }
    }
}
