/*!
 * Utility functions for mergecraft
 */

use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::config::Config;
use crate::scanner::IgnoreRules;

/// Count candidate files for progress tracking.
///
/// Counts every non-ignored regular file under the root. Files later
/// rejected by the extension or content filter are still visited by the
/// scanner, so this matches the number of progress ticks.
pub fn count_files(root: &Path, config: &Config, ignore_rules: &IgnoreRules) -> io::Result<u64> {
    let mut count = 0;

    for entry in WalkDir::new(root)
        .into_iter()
        .filter_map(std::result::Result::ok)
    {
        if !entry.file_type().is_file() {
            continue;
        }

        let rel_path = entry
            .path()
            .strip_prefix(&config.working_dir)
            .unwrap_or(entry.path());

        if !ignore_rules.is_ignored(rel_path) {
            count += 1;
        }
    }

    Ok(count)
}
