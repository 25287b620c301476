//! Icon tables. Glyphs are Nerd Font private-use code points.

/// Maps a set of exact strings to one glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphRule {
    pub patterns: &'static [&'static str],
    pub glyph: char,
}

impl GlyphRule {
    pub const fn new(patterns: &'static [&'static str], glyph: char) -> Self {
        Self { patterns, glyph }
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.patterns.contains(&candidate)
    }
}

/// First matching rule wins.
pub fn lookup(rules: &[GlyphRule], candidate: &str) -> Option<char> {
    rules.iter().find(|rule| rule.matches(candidate)).map(|rule| rule.glyph)
}

pub const CLOSED_FOLDER: char = '\u{f07b}';
pub const OPEN_FOLDER: char = '\u{f07c}';
pub const LINK: char = '\u{f0c1}';
pub const NO_EXTENSION: char = '\u{f15b}';
pub const UNKNOWN_FILE: char = '\u{f036}';
pub const CLOCK: char = '\u{f017}';
pub const TOTAL: char = '\u{f00e}';
pub const ERROR: char = '\u{e231}';

const TERMINAL: char = '\u{f120}';
const MAKE: char = '\u{e20f}';

/// Whole file names, case-sensitive.
pub const NAME_RULES: &[GlyphRule] = &[
    GlyphRule::new(&[".gitignore"], '\u{f113}'),
    GlyphRule::new(&["Dockerfile"], '\u{e7b0}'),
    GlyphRule::new(&["Makefile"], MAKE),
    GlyphRule::new(&["acid.js"], '\u{f0c3}'),
    GlyphRule::new(&["glide.yaml", "Gopkg.toml"], '\u{f1d8}'),
    GlyphRule::new(&["package.json"], '\u{e718}'),
    GlyphRule::new(
        &["LICENSE", "license", "LICENSE.txt", "license.txt", "COPYING", "COPYING.txt"],
        '\u{f071}',
    ),
    GlyphRule::new(&["README", "README.txt", "README.md"], '\u{f06e}'),
    GlyphRule::new(&[".DS_Store"], '\u{e711}'),
    GlyphRule::new(&[".bashrc", ".zshrc", ".profile"], TERMINAL),
];

/// Extensions including the leading dot, case-sensitive.
pub const EXTENSION_RULES: &[GlyphRule] = &[
    GlyphRule::new(&[".sh", ".bash", ".zsh", ".ksh"], TERMINAL),
    GlyphRule::new(&[".lock"], '\u{f023}'),
    GlyphRule::new(&[".js"], '\u{e781}'),
    GlyphRule::new(&[".log"], '\u{f18d}'),
    GlyphRule::new(&[".yaml", ".yml"], '\u{f19e}'),
    GlyphRule::new(&[".json"], '\u{e60b}'),
    GlyphRule::new(&[".conf", ".cfg"], '\u{f085}'),
    GlyphRule::new(&[".bin"], '\u{f1b3}'),
    GlyphRule::new(&[".err"], '\u{f1e2}'),
    GlyphRule::new(&[".ts"], '\u{e628}'),
    GlyphRule::new(&[".py", ".pyc", ".pyo"], '\u{e73c}'),
    GlyphRule::new(&[".md", ".markdown"], '\u{e609}'),
    GlyphRule::new(&[".rb"], '\u{e739}'),
    GlyphRule::new(&[".rs"], '\u{e7a8}'),
    GlyphRule::new(&[".java"], '\u{e738}'),
    GlyphRule::new(&[".go"], '\u{e626}'),
    GlyphRule::new(&[".html", ".htm", ".xhtml"], '\u{f1c9}'),
    GlyphRule::new(&[".php", ".phar"], '\u{e73d}'),
    GlyphRule::new(&[".tpl", ".tmpl"], '\u{e60e}'),
    GlyphRule::new(&[".coffee"], '\u{e61b}'),
    GlyphRule::new(&[".tgz", ".gz", ".zip", ".bz2", ".bz"], '\u{f1c6}'),
    GlyphRule::new(&[".pdf"], '\u{f1c1}'),
    GlyphRule::new(&[".png", ".gif", ".jpg", ".jpeg", ".svg"], '\u{e60d}'),
    GlyphRule::new(&[".doc", ".docx", ".odt"], '\u{f1c2}'),
    GlyphRule::new(&[".ppt", ".pptx"], '\u{f1c4}'),
    GlyphRule::new(&[".xls", ".xlsx"], '\u{f1c3}'),
    GlyphRule::new(&[".pub", ".gpg", ".gpg~", ".kbx", ".kbx~"], '\u{f084}'),
    GlyphRule::new(&[".db", ".sqlite", ".sqlite3"], '\u{f1c0}'),
    GlyphRule::new(&[".mov", ".mp4"], '\u{f008}'),
    GlyphRule::new(&[".backup"], '\u{f0fa}'),
    GlyphRule::new(&[".vim"], '\u{e7c5}'),
    GlyphRule::new(&[".mk", ".make"], MAKE),
    GlyphRule::new(&[".h"], '\u{f0fd}'),
    GlyphRule::new(&[".c"], '\u{e61e}'),
    GlyphRule::new(&[".cc", ".c++"], '\u{e61d}'),
];
