/*!
 * Core types and data structures for the mergecraft application
 */

use std::path::PathBuf;

/// One file admitted into the bundle
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Path relative to the working directory
    pub path: PathBuf,
    /// Content actually embedded in the bundle (the literal `(empty)`
    /// placeholder when the file was empty or whitespace-only)
    pub content: String,
    /// Line count of the embedded content
    pub lines: usize,
}

impl FileRecord {
    /// Create a record, computing the line count from the embedded content
    pub fn new(path: PathBuf, content: String) -> Self {
        let lines = content.lines().count();
        Self {
            path,
            content,
            lines,
        }
    }

    /// Bare file name, without any directory components
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    }
}
