//! Theme model and construction.
//!
//! A [`Theme`] is built from the [`Environment`](crate::Environment) an
//! executed script leaves behind. Construction is lenient: the builder never
//! fails, and every slot the script did not declare (or declared with the
//! wrong type) holds [`ThemeProperty::default`].
//!
//! ## Script shape
//!
//! ```lua
//! Description = "Night owl"
//! Categories  = { "dark" }
//!
//! Default = { Colour = "#d6deeb" }
//! Canvas  = { Colour = "#011627" }
//! String  = { Colour = "#ecc48d", Italic = true }
//!
//! Keywords = {
//!   { Colour = "#c792ea", Bold = true },   -- kwa
//!   { Colour = "#7fdbca" },                -- kwb
//! }
//! ```
//!
//! Base16 themes set `base00`..`base0F` instead of a canvas; see
//! [`Base16Palette`].

pub mod builder;
pub mod extract;
mod property;
#[allow(clippy::module_inception)]
mod theme;

pub use property::{KeywordClass, KeywordStyle, StyleSlot, ThemeProperties, ThemeProperty};
pub use theme::{Base16Palette, Theme};
