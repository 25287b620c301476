pub mod rules;

use std::fmt;

use rules::GlyphRule;

use crate::model::FileRecord;

/// Terminal color applied around a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorCode {
    /// No escape sequence at all.
    #[default]
    Plain,
    Red,
    Yellow,
}

impl ColorCode {
    pub const RESET: &'static str = "\x1b[0m";

    pub const fn ansi(self) -> Option<&'static str> {
        match self {
            Self::Plain => None,
            Self::Red => Some("\x1b[0;31m"),
            Self::Yellow => Some("\x1b[0;33m"),
        }
    }
}

/// Rendering decision for one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Classification {
    pub glyph: char,
    pub color: ColorCode,
}

impl Classification {
    pub const fn new(glyph: char, color: ColorCode) -> Self {
        Self { glyph, color }
    }
}

/// Writes the glyph wrapped in its color escape.
impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color.ansi() {
            Some(start) => write!(f, "{start}{}{}", self.glyph, ColorCode::RESET),
            None => write!(f, "{}", self.glyph),
        }
    }
}

/// Picks an icon for a record from ordered rule tables.
///
/// Precedence: directory, symlink, exact file name, extension, then the
/// no-extension / unknown defaults. Color is yellow for directories and links,
/// red for anything with the owner execute bit.
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    name_rules: &'static [GlyphRule],
    extension_rules: &'static [GlyphRule],
}

impl Default for Classifier {
    fn default() -> Self {
        Self::with_rules(rules::NAME_RULES, rules::EXTENSION_RULES)
    }
}

impl Classifier {
    pub const fn with_rules(
        name_rules: &'static [GlyphRule],
        extension_rules: &'static [GlyphRule],
    ) -> Self {
        Self { name_rules, extension_rules }
    }

    pub fn classify(&self, record: &FileRecord) -> Classification {
        if record.is_dir {
            return Classification::new(rules::CLOSED_FOLDER, ColorCode::Yellow);
        }
        // Links win over name rules: a symlink called `Makefile` is still a link.
        if record.is_symlink {
            return Classification::new(rules::LINK, ColorCode::Yellow);
        }

        let color = if record.executable { ColorCode::Red } else { ColorCode::Plain };
        Classification::new(self.glyph_for(record), color)
    }

    fn glyph_for(&self, record: &FileRecord) -> char {
        if let Some(glyph) = rules::lookup(self.name_rules, record.name.as_str()) {
            return glyph;
        }
        match record.extension() {
            None => rules::NO_EXTENSION,
            Some(ext) => rules::lookup(self.extension_rules, ext.as_str()).unwrap_or(rules::UNKNOWN_FILE),
        }
    }
}
