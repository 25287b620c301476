pub mod abbreviate;
pub mod formatter;
pub mod layout;

pub use abbreviate::{abbreviate, abbreviate_full};
pub use formatter::Formatter;
pub use layout::{Layout, LayoutBuilder, LayoutBuilderError};
