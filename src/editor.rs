/*!
 * Editor launching for mergecraft
 *
 * Opens the scratch document in an interactive editor and blocks until
 * the user closes it, with automatic detection of available editors.
 */

use std::env;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use thiserror::Error;

/// Error type for editor operations
#[derive(Error, Debug)]
pub enum EditorError {
    /// The command is not available on the system
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// Failed to execute the command
    #[error("Command failed: {0}")]
    CommandFailed(String),

    /// No suitable editor was found
    #[error("No suitable editor found (set $VISUAL, $EDITOR, or pass --editor)")]
    NoEditorFound,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for editor operations
pub type Result<T> = std::result::Result<T, EditorError>;

/// Trait for the interactive review step.
///
/// `open` must not return until the review session has ended; the whole
/// run blocks on it.
pub trait Editor {
    /// Open the given file and wait for the session to end
    fn open(&self, path: &Path) -> Result<()>;

    /// Human-readable name, used in the pre-launch message
    fn name(&self) -> &str;
}

/// An editor invoked as `program [args..] <path>`
#[derive(Debug, Clone)]
pub struct EditorCommand {
    program: String,
    args: Vec<String>,
}

impl EditorCommand {
    /// Create an editor command with fixed arguments
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Parse a shell-ish command line (`$EDITOR` may carry arguments,
    /// e.g. `code --wait`). Returns `None` for an empty value.
    pub fn from_command_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let program = parts.next()?.to_string();
        let args = parts.map(str::to_string).collect();
        Some(Self { program, args })
    }
}

impl Editor for EditorCommand {
    fn open(&self, path: &Path) -> Result<()> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .status()
            .map_err(|_| EditorError::CommandFailed(format!("Failed to spawn {}", self.program)))?;

        if status.success() {
            Ok(())
        } else {
            Err(EditorError::CommandFailed(format!(
                "{} exited with status: {}",
                self.program, status
            )))
        }
    }

    fn name(&self) -> &str {
        &self.program
    }
}

//--------------------------------------------------------------------
// Public API
//--------------------------------------------------------------------

/// Pick the editor to launch.
///
/// Tries, in order: the explicit override, `$VISUAL`, `$EDITOR`, VS Code
/// in wait mode, `nano`, then `vi`. The first candidate whose program is
/// available wins.
pub fn detect_editor(explicit: Option<&str>) -> Result<EditorCommand> {
    let candidates = determine_editor_candidates(explicit);

    for candidate in candidates {
        if command_exists(&candidate.program) {
            return Ok(candidate);
        }
    }

    Err(EditorError::NoEditorFound)
}

/// Check if a command exists on the system
pub fn command_exists(command: &str) -> bool {
    // First check if the command exists in the PATH
    if let Ok(paths) = env::var("PATH") {
        for path in paths.split(':') {
            let p = Path::new(path).join(command);
            if p.exists() {
                return true;
            }
        }
    }

    // Try to run the command with '--version' flag as fallback
    Command::new(command)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}

//--------------------------------------------------------------------
// Internal Implementation
//--------------------------------------------------------------------

/// Candidate editors in order of preference
fn determine_editor_candidates(explicit: Option<&str>) -> Vec<EditorCommand> {
    let mut candidates = Vec::new();

    if let Some(line) = explicit {
        candidates.extend(EditorCommand::from_command_line(line));
    }

    for var in ["VISUAL", "EDITOR"] {
        if let Ok(value) = env::var(var) {
            candidates.extend(EditorCommand::from_command_line(&value));
        }
    }

    candidates.push(EditorCommand::new("code", vec!["--wait".to_string()]));
    candidates.push(EditorCommand::new("nano", vec![]));
    candidates.push(EditorCommand::new("vi", vec![]));

    candidates
}
