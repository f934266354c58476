/*!
 * Reporting functionality for mergecraft
 *
 * Provides functionality for generating formatted reports of the bundle
 * run using the tabled library for clean, consistent table rendering.
 */

use std::path::Path;
use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::types::FileRecord;

/// Information about one included file
#[derive(Debug, Clone)]
pub struct FileReportInfo {
    /// Working-directory-relative path
    pub path: String,
    /// Number of lines embedded for this file
    pub lines: usize,
}

/// Statistics for a bundle run
#[derive(Debug, Clone)]
pub struct BundleReport {
    /// Scratch document path
    pub scratch_path: String,
    /// Time taken to scan and write the bundle
    pub duration: Duration,
    /// Number of files included
    pub files_processed: usize,
    /// Total number of embedded lines
    pub total_lines: usize,
    /// Per-file details, in traversal order
    pub files: Vec<FileReportInfo>,
}

impl BundleReport {
    /// Build a report from the scanner's record list
    pub fn new(scratch_path: &Path, duration: Duration, records: &[FileRecord]) -> Self {
        let files: Vec<FileReportInfo> = records
            .iter()
            .map(|record| FileReportInfo {
                path: record.path.to_string_lossy().to_string(),
                lines: record.lines,
            })
            .collect();

        Self {
            scratch_path: scratch_path.to_string_lossy().to_string(),
            duration,
            files_processed: files.len(),
            total_lines: files.iter().map(|f| f.lines).sum(),
            files,
        }
    }
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
    // Other formats could be added in the future
}

/// Report generator for bundle results
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Format a number with human-readable units
    fn format_number(&self, num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Generate a report string based on bundle statistics
    pub fn generate_report(&self, report: &BundleReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(report),
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &BundleReport) {
        println!("\n{}", self.generate_report(report));
    }

    // Create a summary table using the tabled crate
    fn create_summary_table(&self, report: &BundleReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let rows = vec![
            SummaryRow {
                key: "📂 Scratch Document".to_string(),
                value: report.scratch_path.clone(),
            },
            SummaryRow {
                key: "⏱️ Merge Time".to_string(),
                value: format!("{:.4?}", report.duration),
            },
            SummaryRow {
                key: "📄 Files Read".to_string(),
                value: self.format_number(report.files_processed),
            },
            SummaryRow {
                key: "📝 Total Lines".to_string(),
                value: self.format_number(report.total_lines),
            },
        ];

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Create a files table using the tabled crate, preserving traversal order
    fn create_files_table(&self, report: &BundleReport) -> String {
        #[derive(Tabled)]
        struct FileRow {
            #[tabled(rename = "File")]
            path: String,

            #[tabled(rename = "Lines")]
            lines: String,
        }

        let rows: Vec<FileRow> = report
            .files
            .iter()
            .map(|info| FileRow {
                path: info.path.clone(),
                lines: self.format_number(info.lines),
            })
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Generate a console table report
    fn generate_console_report(&self, report: &BundleReport) -> String {
        let files_table = self.create_files_table(report);
        let summary_table = self.create_summary_table(report);

        format!(
            "📋  FILES READ\n{}\n\n✅  MERGE COMPLETE\n{}",
            files_table, summary_table
        )
    }
}
