use derive_builder::Builder;

pub const DEFAULT_FILENAME_WIDTH: usize = 30;
pub const DEFAULT_MAX_WIDTH: usize = 80;

/// Narrowest name column that still fits one character plus `...`.
pub const MIN_FILENAME_WIDTH: usize = 4;
/// Narrowest header that can hold `...` on both sides of a character.
pub const MIN_MAX_WIDTH: usize = 7;

/// Column widths used by the [`Formatter`](super::Formatter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct Layout {
    /// Width of the name column; longer names are abbreviated.
    #[builder(default = "DEFAULT_FILENAME_WIDTH")]
    pub filename_width: usize,
    /// Widest header path before it gets abbreviated.
    #[builder(default = "DEFAULT_MAX_WIDTH")]
    pub max_width: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self { filename_width: DEFAULT_FILENAME_WIDTH, max_width: DEFAULT_MAX_WIDTH }
    }
}

impl LayoutBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(width) = self.filename_width.filter(|w| *w < MIN_FILENAME_WIDTH) {
            return Err(format!("filename width must be at least {MIN_FILENAME_WIDTH}, got {width}"));
        }
        if let Some(width) = self.max_width.filter(|w| *w < MIN_MAX_WIDTH) {
            return Err(format!("max width must be at least {MIN_MAX_WIDTH}, got {width}"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_default() {
        assert_eq!(LayoutBuilder::default().build().unwrap(), Layout::default());
    }

    #[test]
    fn builder_overrides_one_width() {
        let layout = LayoutBuilder::default().filename_width(12usize).build().unwrap();
        assert_eq!(layout.filename_width, 12);
        assert_eq!(layout.max_width, DEFAULT_MAX_WIDTH);
    }

    #[test]
    fn builder_rejects_unusable_widths() {
        let err = LayoutBuilder::default().filename_width(3usize).build().unwrap_err();
        assert!(err.to_string().contains("filename width"));
        assert!(LayoutBuilder::default().max_width(6usize).build().is_err());
    }
}
