// file: src/rsync/stats.rs
// version: 1.0.0
// guid: c1f3a5b7-93a4-4fd5-a5b7-93a4b5c6d7e8

//! Best-effort scraping of rsync's `--info=stats2` output
//!
//! The statistics block is locale-dependent English text, so extraction is
//! a best-effort regex match: a field that cannot be found is reported as
//! `Unknown` and never fails the run.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Line prefixes rsync uses for its stats2 summary block
const STATS_PREFIXES: [&str; 7] = [
    "Number of",
    "Total",
    "Literal",
    "Matched",
    "File list",
    "sent",
    "total size",
];

/// Whether a line belongs to the stats2 summary block.
pub fn is_stats_line(line: &str) -> bool {
    STATS_PREFIXES.iter().any(|p| line.starts_with(p))
}

/// Whether a line is a progress2 transfer-progress update.
pub fn is_progress_line(line: &str) -> bool {
    line.contains('%') || line.contains("to-chk=") || line.contains("to-check")
}

fn file_count_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Number of files:\s*([\d,]+)").expect("valid file count regex"))
}

fn total_size_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // with -h the size is human-readable, e.g. "1.23M" or "1,234"
    RE.get_or_init(|| {
        Regex::new(r"Total file size:\s*([\d.,]+[KMGTP]?)").expect("valid total size regex")
    })
}

/// Summary fields scraped from the captured stats block
#[derive(Debug, Default, Clone, Serialize)]
pub struct SyncStats {
    /// Raw stats2 lines, in the order rsync printed them
    pub raw: Vec<String>,
    /// Scraped "Number of files" value
    pub file_count: Option<u64>,
    /// Scraped "Total file size" value, kept human-readable as printed
    pub total_size: Option<String>,
}

impl SyncStats {
    /// Scrape the two summary fields out of the captured stats lines.
    pub fn from_lines(lines: &[String]) -> Self {
        let joined = lines.join("\n");

        let file_count = file_count_re()
            .captures(&joined)
            .and_then(|caps| caps[1].replace(',', "").parse::<u64>().ok());

        let total_size = total_size_re()
            .captures(&joined)
            .map(|caps| caps[1].to_string());

        Self {
            raw: lines.to_vec(),
            file_count,
            total_size,
        }
    }

    /// File count for display, `Unknown` if scraping failed.
    pub fn files_display(&self) -> String {
        self.file_count
            .map_or_else(|| "Unknown".to_string(), |n| n.to_string())
    }

    /// Total size for display, `Unknown` if scraping failed.
    pub fn size_display(&self) -> String {
        self.total_size
            .clone()
            .unwrap_or_else(|| "Unknown".to_string())
    }
}
