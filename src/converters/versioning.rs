//! Non-colliding output filenames.
//!
//! An existing report is never overwritten. When `name.ext` is taken the next
//! free name of the form `01name.ext`, `02name.ext`, ... is used.

use std::path::{Path, PathBuf};

/// First free path for `filename` inside `dir`.
pub fn versioned_path(dir: &Path, filename: &str) -> PathBuf {
    let candidate = dir.join(filename);
    if !candidate.exists() {
        return candidate;
    }

    let file = Path::new(filename);
    let stem = file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = file
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let mut counter: u32 = 1;
    loop {
        let candidate = dir.join(format!("{:02}{}{}", counter, stem, extension));
        if !candidate.exists() {
            log::debug!("{} exists, using {}", filename, candidate.display());
            return candidate;
        }
        counter += 1;
    }
}
