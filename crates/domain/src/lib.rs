//! # Domain
//!
//! Pure listing logic with no I/O:
//!
//! - [`model`]: the [`FileRecord`] snapshot handed over by a metadata source
//! - [`classify`]: icon glyph and color selection from ordered rule tables
//! - [`render`]: header, row and footer lines with fixed-width columns
//!
//! Every function here is total; nothing in this crate returns an error.

#![allow(clippy::multiple_crate_versions)]

pub mod classify;
pub mod model;
pub mod render;

pub use classify::{Classification, Classifier, ColorCode};
pub use model::FileRecord;
pub use render::{Formatter, Layout, LayoutBuilder};
