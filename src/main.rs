/*!
 * Command-line interface for mergecraft
 */

use std::io;
use std::process;
use std::sync::Arc;
use std::time::Instant;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use indicatif::{ProgressBar, ProgressStyle};

use mergecraft::config::{Args, Config};
use mergecraft::editor::{detect_editor, Editor};
use mergecraft::error::Result;
use mergecraft::report::{BundleReport, ReportFormat, Reporter};
use mergecraft::resolver::resolve_root;
use mergecraft::scanner::{IgnoreRules, Scanner};
use mergecraft::utils::count_files;
use mergecraft::writer::ScratchDocument;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    // Create and validate configuration
    let config = Config::from_args(args)?;
    config.validate()?;

    // Resolve the root before creating any scratch state; a resolution
    // failure must leave nothing behind
    let root = resolve_root(&config.working_dir, &config.root_spec)?;

    // Load .gitignore rules from the working directory
    let ignore_rules = IgnoreRules::load(&config.working_dir)?;

    // Create progress bar
    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%)")
            .unwrap(),
    );
    progress.enable_steady_tick(std::time::Duration::from_millis(100));
    progress.set_prefix("📊 Setup");
    progress.set_message(format!("📂 Scanning directory: {}", root.display()));

    // Count files for progress tracking
    match count_files(&root, &config, &ignore_rules) {
        Ok(count) => {
            progress.set_message(format!("🔎 Found {} files to process", count));
            progress.set_length(count);
        }
        Err(e) => progress.set_message(format!("⚠️ Warning: Failed to count files: {}", e)),
    }

    progress.set_prefix("📊 Merging");
    progress.set_message("Starting merge...");

    // Create the scratch document and scan into it
    let mut doc = ScratchDocument::new()?;
    let scanner = Scanner::new(config.clone(), ignore_rules, Arc::new(progress.clone()));

    let start_time = Instant::now();
    let records = scanner.scan(&root, &mut doc)?;
    doc.flush()?;
    let duration = start_time.elapsed();

    progress.finish_and_clear();

    // Open the scratch document for review; the run blocks here until
    // the editor session ends. The document is dropped (and removed) even
    // when the launch fails.
    let editor = detect_editor(config.editor.as_deref())?;
    println!("Editing in {}. Close to continue.", editor.name());
    editor.open(doc.path())?;

    if records.is_empty() {
        println!("No files were read!");
        return Ok(());
    }

    println!("Editing completed.");

    let report = BundleReport::new(doc.path(), duration, &records);
    let reporter = Reporter::new(ReportFormat::ConsoleTable);
    reporter.print_report(&report);

    // Remove the scratch document explicitly on the success path
    doc.close()?;

    Ok(())
}
