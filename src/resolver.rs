/*!
 * Root path resolution
 *
 * Turns the user-supplied root spec into an existing directory. When the
 * literal path does not exist, falls back to a recursive search for a
 * directory whose base name matches the spec.
 */

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{MergeError, Result};

/// Resolve the root spec against the working directory.
///
/// The fallback search compares only the final path component, so a
/// multi-segment spec that does not exist verbatim fails even if a deeper
/// match exists.
pub fn resolve_root(working_dir: &Path, root_spec: &str) -> Result<PathBuf> {
    // Bare existence, not is_dir: a spec naming a regular file resolves
    // to that file and the walk visits just it
    let candidate = working_dir.join(root_spec);
    if candidate.exists() {
        return Ok(candidate);
    }

    if let Some(found) = find_subdir(working_dir, root_spec) {
        return Ok(found);
    }

    Err(MergeError::PathNotFound {
        path: root_spec.to_string(),
        search_root: working_dir.to_path_buf(),
    })
}

/// Recursively search for a directory with the given base name.
///
/// Returns the first match in the walker's natural order; unreadable
/// entries are skipped. The start directory is itself a candidate, so a
/// spec naming the working directory's own base name resolves to it.
fn find_subdir(start_dir: &Path, name: &str) -> Option<PathBuf> {
    WalkDir::new(start_dir)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .find(|entry| {
            entry.file_type().is_dir() && entry.file_name().to_string_lossy() == name
        })
        .map(|entry| entry.into_path())
}
