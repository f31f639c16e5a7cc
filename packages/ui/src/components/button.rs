//! Button styling primitives.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ParseTokenError;

/// Visual emphasis of a button.
///
/// Serialised as the lowercase tokens `text`, `outlined` and `contained`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Label only, no border or fill.
    Text,
    /// Bordered, transparent fill.
    #[default]
    Outlined,
    /// Filled with the primary colour.
    Contained,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 3] = [
        ButtonVariant::Text,
        ButtonVariant::Outlined,
        ButtonVariant::Contained,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonVariant::Text => "text",
            ButtonVariant::Outlined => "outlined",
            ButtonVariant::Contained => "contained",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Text => "vm-button--text",
            ButtonVariant::Outlined => "vm-button--outlined",
            ButtonVariant::Contained => "vm-button--contained",
        }
    }
}

impl fmt::Display for ButtonVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonVariant {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ParseTokenError::Variant(s.to_string()))
    }
}

/// Full class list for a button element. Buttons are rendered at the
/// compact size used inside tables and lists.
pub fn button_class(variant: ButtonVariant) -> String {
    format!("vm-button {} vm-button--small", variant.class())
}
