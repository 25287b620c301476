use std::path::Path;

use chrono::{DateTime, Local};
use ll_shared_kernel::FileSize;

use super::{
    abbreviate::{abbreviate, abbreviate_full},
    layout::Layout,
};
use crate::{
    classify::{Classification, ColorCode, rules},
    model::FileRecord,
};

const BLUE: &str = "\x1b[0;34m";

/// Renders listing lines (without trailing newline).
///
/// Relative times are measured against the `now` captured at construction, so
/// every row of one listing agrees on the reference instant and output is
/// reproducible in tests.
#[derive(Debug, Clone)]
pub struct Formatter {
    layout: Layout,
    now: DateTime<Local>,
}

impl Formatter {
    pub fn new(layout: Layout, now: DateTime<Local>) -> Self {
        Self { layout, now }
    }

    pub fn render_header(&self, resolved: &Path) -> String {
        let full = resolved.to_string_lossy();
        let shown = abbreviate_full(&full, self.layout.max_width, self.layout.max_width);
        let yellow = ColorCode::Yellow.ansi().unwrap_or_default();
        format!("{yellow}{}{BLUE}  {shown}{}", rules::OPEN_FOLDER, ColorCode::RESET)
    }

    pub fn render_row(&self, record: &FileRecord, classification: Classification) -> String {
        let width = self.layout.filename_width;
        let name = abbreviate(record.name.as_str(), width);
        let size = record.size.to_human();
        let when = record.modified.humanize_since(&self.now);
        format!(" {classification}   {name:<width$} {size:>8}     {} {when}", rules::CLOCK)
    }

    pub fn render_footer(&self, count: usize, total: FileSize) -> String {
        format!(
            "     {BLUE}{}  Total: {count:>6}   Size: {:>10}{}",
            rules::TOTAL,
            total.to_human(),
            ColorCode::RESET
        )
    }
}
