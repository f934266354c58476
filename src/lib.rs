/*!
 * Mergecraft - Merge selected project files into a reviewable scratch document
 *
 * This library walks a directory tree, concatenates the contents of
 * selected files into a single scratch document wrapped in code-fence
 * markers, opens it in an external editor, and reports the included
 * files with line counts.
 */

pub mod config;
pub mod editor;
pub mod error;
pub mod report;
pub mod resolver;
pub mod scanner;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use config::{Args, Config};
pub use editor::{detect_editor, Editor, EditorCommand, EditorError};
pub use error::{MergeError, Result};
pub use report::{BundleReport, FileReportInfo, ReportFormat, Reporter};
pub use resolver::resolve_root;
pub use scanner::{IgnoreRules, Scanner};
pub use types::FileRecord;
pub use utils::count_files;
pub use writer::ScratchDocument;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
