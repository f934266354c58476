/*!
 * Directory traversal and file filtering
 */

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use indicatif::ProgressBar;
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::Result;
use crate::types::FileRecord;
use crate::writer::ScratchDocument;

/// Placeholder embedded for empty or whitespace-only files
pub const EMPTY_PLACEHOLDER: &str = "(empty)";

/// Gitignore rules loaded from the working directory
pub struct IgnoreRules {
    matcher: Option<Gitignore>,
}

impl IgnoreRules {
    /// Load `.gitignore` from the working directory, if present.
    ///
    /// Paths are matched in working-directory-relative form, so the rules
    /// apply even when the search root is a deep subdirectory.
    pub fn load(working_dir: &Path) -> Result<Self> {
        let gitignore_path = working_dir.join(".gitignore");
        if !gitignore_path.is_file() {
            return Ok(Self::empty());
        }

        let mut builder = GitignoreBuilder::new(working_dir);
        if let Some(err) = builder.add(&gitignore_path) {
            return Err(err.into());
        }

        Ok(Self {
            matcher: Some(builder.build()?),
        })
    }

    /// Ruleset that ignores nothing
    pub fn empty() -> Self {
        Self { matcher: None }
    }

    /// Whether a working-directory-relative path is excluded.
    ///
    /// A pattern matching an ancestor directory excludes the files
    /// beneath it, mirroring git's behavior.
    pub fn is_ignored(&self, rel_path: &Path) -> bool {
        match &self.matcher {
            Some(matcher) => matcher
                .matched_path_or_any_parents(rel_path, false)
                .is_ignore(),
            None => false,
        }
    }
}

/// Scanner for directory contents
pub struct Scanner {
    /// Scanner configuration
    config: Config,
    /// Ignore rules from the working directory
    ignore_rules: IgnoreRules,
    /// Progress bar
    pub progress: Arc<ProgressBar>,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config, ignore_rules: IgnoreRules, progress: Arc<ProgressBar>) -> Self {
        Self {
            config,
            ignore_rules,
            progress,
        }
    }

    /// Walk the resolved root, appending one fenced block per admitted file
    /// to the scratch document as the walk proceeds.
    ///
    /// Returns the admitted files in traversal order. The walk order is
    /// whatever the filesystem yields; it is deterministic per run but not
    /// specified across platforms.
    pub fn scan(&self, root: &Path, doc: &mut ScratchDocument) -> Result<Vec<FileRecord>> {
        let mut records = Vec::new();

        for entry in WalkDir::new(root)
            .into_iter()
            .filter_map(std::result::Result::ok)
        {
            if !entry.file_type().is_file() {
                continue;
            }

            let rel_path = self.relative_path(entry.path());
            if self.ignore_rules.is_ignored(&rel_path) {
                // Not read, not counted, not reported
                continue;
            }

            self.progress.inc(1);
            self.progress
                .set_message(format!("Current file: {}", display_name(&rel_path)));

            let content = match self.admit(entry.path()) {
                Ok(Some(content)) => content,
                Ok(None) => continue,
                Err(e) => {
                    eprintln!("Error processing {}: {}", entry.path().display(), e);
                    continue;
                }
            };

            let embedded = if content.trim().is_empty() {
                EMPTY_PLACEHOLDER.to_string()
            } else {
                content
            };

            let record = FileRecord::new(rel_path, embedded);
            doc.append_block(&record.file_name(), &record.content)?;
            records.push(record);
        }

        Ok(records)
    }

    /// Apply the admission rule, returning the decoded content for files
    /// that qualify.
    ///
    /// A content filter, when configured, decides inclusion on its own,
    /// independent of extension. Without one, extension filtering applies
    /// only under the default root; any non-ignored file under an explicit
    /// root qualifies.
    fn admit(&self, path: &Path) -> Result<Option<String>> {
        match &self.config.content_filter {
            Some(pattern) => {
                let text = read_lossy(path)?;
                if pattern.is_match(&text) {
                    Ok(Some(text))
                } else {
                    Ok(None)
                }
            }
            None => {
                if self.config.extension_filter_active() && !self.matches_extension(path) {
                    return Ok(None);
                }
                Ok(Some(read_lossy(path)?))
            }
        }
    }

    /// Check the filename against the configured suffixes
    fn matches_extension(&self, path: &Path) -> bool {
        let file_name = path.file_name().unwrap_or_default().to_string_lossy();
        self.config
            .extensions
            .iter()
            .any(|ext| file_name.ends_with(ext.as_str()))
    }

    /// Path relative to the working directory, used for both ignore
    /// matching and reporting. Files outside the working directory keep
    /// their full path.
    fn relative_path(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.config.working_dir)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

/// Read a file as text, replacing invalid UTF-8 sequences instead of
/// failing. Every file can be embedded.
fn read_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Truncate long paths for the progress message.
///
/// Truncation works in characters, not bytes, so multibyte path names
/// never split mid-character.
fn display_name(path: &Path) -> String {
    let name = path.to_string_lossy();
    let chars: Vec<char> = name.chars().collect();
    if chars.len() > 40 {
        let tail: String = chars[chars.len() - 37..].iter().collect();
        format!("...{}", tail)
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_truncates_on_char_boundaries() {
        let short = Path::new("src/a.py");
        assert_eq!(display_name(short), "src/a.py");

        let long = PathBuf::from("猫".repeat(40)).join("a.py");
        let shown = display_name(&long);
        assert!(shown.starts_with("..."));
        assert_eq!(shown.chars().count(), 40);
        assert!(shown.ends_with("a.py"));
    }
}
