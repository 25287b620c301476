use std::path::Path;

use chrono::{DateTime, Local, TimeDelta, TimeZone};
use ll_domain::{Classifier, Formatter, Layout};
use ll_ports::metadata::{EntryMetadataDto, MetadataSource};
use ll_shared_kernel::{FileSize, Result};
use ll_usecase::ListPath;
use proptest::prelude::*;

fn now() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

/// Serves one fixed directory listing for any path.
struct FixedDir(Vec<EntryMetadataDto>);

impl MetadataSource for FixedDir {
    fn stat(&self, _path: &Path) -> Result<EntryMetadataDto> {
        Ok(EntryMetadataDto {
            name: "dir".into(),
            size: 4096,
            mtime: Some(now()),
            is_dir: true,
            is_symlink: false,
            owner_executable: false,
        })
    }

    fn read_dir(&self, _path: &Path) -> Result<Vec<EntryMetadataDto>> {
        Ok(self.0.clone())
    }
}

fn entry() -> impl Strategy<Value = EntryMetadataDto> {
    (
        "[A-Za-z0-9._-]{1,40}",
        any::<u64>(),
        0i64..2_000_000_000,
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(name, size, age, is_dir, is_symlink, owner_executable)| EntryMetadataDto {
            name,
            size,
            mtime: Some(now() - TimeDelta::seconds(age)),
            is_dir,
            is_symlink,
            owner_executable,
        })
}

proptest! {
    #[test]
    fn footer_matches_rows_written(entries in prop::collection::vec(entry(), 0..40)) {
        let expected_size = entries.iter().fold(0u64, |acc, e| acc.saturating_add(e.size));
        let source = FixedDir(entries.clone());
        let formatter = Formatter::new(Layout::default(), now());
        let mut out = Vec::new();

        let summary = ListPath::new(&source, Classifier::default(), &formatter)
            .run(Path::new("/any"), &mut out)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        prop_assert_eq!(lines.len(), entries.len() + 2);
        prop_assert_eq!(summary.entries, entries.len());
        prop_assert_eq!(summary.total_size, FileSize::new(expected_size));

        let footer = lines[lines.len() - 1];
        let count = format!("Total: {:>6}", entries.len());
        let size = format!("Size: {:>10}", FileSize::new(expected_size).to_human());
        prop_assert!(footer.contains(&count));
        prop_assert!(footer.contains(&size));
    }
}
