//! Platform-specific abstractions for cross-platform compatibility.
//!
//! This module centralizes OS-specific logic so the filesystem adapter stays
//! free of conditional compilation.

use std::fs::Metadata;

/// Owner execute permission bit.
#[cfg(unix)]
const OWNER_EXECUTE: u32 = 0o100;

/// Whether the owner may execute the entry. Always `false` where the platform
/// has no Unix permission bits.
#[cfg(unix)]
pub fn is_owner_executable(metadata: &Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & OWNER_EXECUTE != 0
}

#[cfg(not(unix))]
pub fn is_owner_executable(_metadata: &Metadata) -> bool {
    false
}
