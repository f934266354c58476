/*!
 * Scratch document handling for mergecraft
 *
 * The scratch document is a single transient file that aggregates the
 * selected file contents as fenced blocks. It lives in the OS temp
 * directory under a `mergecraft_` prefix and is removed when the handle
 * is dropped, so cleanup happens on every exit path, including editor
 * failures.
 */

use std::io::{self, Write};
use std::path::Path;

use tempfile::{Builder, NamedTempFile};

/// Prefix for the scratch file name
const SCRATCH_PREFIX: &str = "mergecraft_";

/// The transient bundle file
pub struct ScratchDocument {
    file: NamedTempFile,
}

impl ScratchDocument {
    /// Create an empty scratch document in the OS temp directory
    pub fn new() -> io::Result<Self> {
        let file = Builder::new().prefix(SCRATCH_PREFIX).tempfile()?;
        Ok(Self { file })
    }

    /// Path of the scratch file on disk
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Append one self-contained fenced block.
    ///
    /// The block names the bare filename on the opening fence and is
    /// followed by a blank separator line. Blocks are written in call
    /// order; there is no deduplication and no size cap.
    pub fn append_block(&mut self, file_name: &str, content: &str) -> io::Result<()> {
        write!(self.file, "``` {}\n{}\n```\n\n", file_name, content)
    }

    /// Flush buffered writes so an external reader sees the full bundle
    pub fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }

    /// Remove the scratch file, surfacing any deletion error
    pub fn close(self) -> io::Result<()> {
        self.file.close()
    }
}
