use ll_shared_kernel::FileSize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingKind {
    /// A non-directory target rendered as one bare row.
    SingleEntry,
    /// Header, one row per entry, footer.
    Directory,
}

/// What a listing pass wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingSummary {
    pub kind: ListingKind,
    pub entries: usize,
    pub total_size: FileSize,
}
