//! Primitives the widgets are composed from.

pub mod button;
pub mod dialog;

pub use button::{button_class, ButtonVariant};
pub use dialog::{Breakpoint, ViewDialog};

/// A string that does not name any known styling token.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseTokenError {
    #[error("unknown button variant `{0}` (expected text, outlined or contained)")]
    Variant(String),
    #[error("unknown breakpoint `{0}` (expected xs, sm, md, lg or xl)")]
    Breakpoint(String),
}
