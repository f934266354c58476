/*!
 * Configuration handling for mergecraft
 */

use std::env;
use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;
use regex::Regex;

use crate::ensure;
use crate::error::Result;

/// Root spec meaning "the working directory itself"
pub const DEFAULT_ROOT: &str = ".";

/// Command-line arguments for mergecraft
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "mergecraft",
    version = env!("CARGO_PKG_VERSION"),
    about = "Merge selected project files into a scratch document and review it in your editor",
    long_about = "Walks a directory tree, concatenates the contents of selected files into a \
single scratch document wrapped in code-fence markers, opens that document in an external \
editor for review, and reports the included files with line counts afterwards."
)]
pub struct Args {
    /// File extensions to process (ignored when --path is not the default)
    #[clap(short, long, num_args = 1.., default_values_t = vec![String::from(".py")])]
    pub extensions: Vec<String>,

    /// Root path to search; falls back to a directory-name search when the
    /// literal path does not exist
    #[clap(long, default_value = DEFAULT_ROOT)]
    pub path: String,

    /// Only include files whose content matches this regular expression
    #[clap(long)]
    pub filter: Option<String>,

    /// Editor command to open the scratch document with (default: $VISUAL,
    /// $EDITOR, then common editors)
    #[clap(long)]
    pub editor: Option<String>,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Directory all relative paths are computed against
    pub working_dir: PathBuf,

    /// Root spec as given by the user (resolved by the path resolver)
    pub root_spec: String,

    /// Filename suffixes admitted under the default root
    pub extensions: Vec<String>,

    /// Optional content-inclusion pattern
    pub content_filter: Option<Regex>,

    /// Explicit editor command override
    pub editor: Option<String>,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Result<Self> {
        let content_filter = match args.filter {
            Some(pattern) => Some(Regex::new(&pattern)?),
            None => None,
        };

        Ok(Self {
            working_dir: env::current_dir()?,
            root_spec: args.path,
            extensions: args.extensions,
            content_filter,
            editor: args.editor,
        })
    }

    /// Extension filtering only applies when searching from the default root
    pub fn extension_filter_active(&self) -> bool {
        self.root_spec == DEFAULT_ROOT
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.working_dir.is_dir(),
            Scanner,
            "Working directory not found: {}",
            self.working_dir.display()
        );
        ensure!(
            !self.extensions.is_empty(),
            Scanner,
            "At least one extension is required"
        );
        Ok(())
    }
}
