//! # ViewMore configuration
//!
//! [`ViewMoreConfig`] is the resolved configuration of one
//! [`ViewMore`](crate::ViewMore) widget. Every optional setting has its
//! default applied here, once, so rendering code never re-derives defaults.
//!
//! | Field | Default |
//! |-------|---------|
//! | `button_text` | required |
//! | `title` | the button text |
//! | `full_screen` | `false` |
//! | `variant` | [`ButtonVariant::Outlined`] |
//! | `max_width` | unset |
//!
//! The structure can also be declared in TOML, which is how apps keep the
//! labels of their "view more" columns out of the markup:
//!
//! ```toml
//! button_text = "Details"
//! title = "Full Record"   # optional
//! variant = "contained"   # text | outlined | contained
//! max_width = "md"        # xs | sm | md | lg | xl
//! full_screen = false
//! ```

use serde::{Deserialize, Serialize};

use crate::components::{Breakpoint, ButtonVariant};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewMoreConfig {
    /// Label of the trigger button.
    pub button_text: String,
    /// Dialog title override. `None` means the button text is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub full_screen: bool,
    #[serde(default)]
    pub variant: ButtonVariant,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<Breakpoint>,
}

impl ViewMoreConfig {
    /// Create a config with the given button text and every other setting at
    /// its default.
    pub fn new(button_text: impl Into<String>) -> Self {
        Self {
            button_text: button_text.into(),
            title: None,
            full_screen: false,
            variant: ButtonVariant::default(),
            max_width: None,
        }
    }

    /// Builder method to override the dialog title. `None` restores the default.
    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn with_full_screen(mut self, full_screen: bool) -> Self {
        self.full_screen = full_screen;
        self
    }

    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_max_width(mut self, max_width: Option<Breakpoint>) -> Self {
        self.max_width = max_width;
        self
    }

    /// The dialog title: the override if one was given, else the button text.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.button_text)
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
