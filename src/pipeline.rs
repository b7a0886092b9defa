//! The per-run file pipeline.
//!
//! Discovers `.json` exports, converts each one independently, writes one
//! transcript per input plus a `stats.txt` summary, and accumulates
//! [`RunStats`]. A single file's failure — bad JSON, unrecognized shape —
//! is reported and skipped; it never aborts the run.

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use serde_json::Value;

use crate::classify::{DocKind, classify};
use crate::document::{html_document, render_chat, render_dm, render_search};
use crate::error::{ChatscribeError, Result};
use crate::extract::{extract_channel_ids, extract_participants};
use crate::model::ExportDocument;
use crate::settings::Settings;

/// Statistics accumulated over one conversion run.
///
/// Created empty, folded once per successfully processed file, rendered at
/// run end. Never persisted between runs.
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    pub total_processed: usize,
    pub chat_files: usize,
    pub dm_files: usize,
    pub search_files: usize,
    /// Unique channel ids seen across all processed files.
    pub channel_ids: BTreeSet<String>,
    /// Rendered participant names from chat and dm files.
    pub participants: BTreeSet<String>,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, file: &ProcessedFile) {
        self.total_processed += 1;
        match file.kind {
            DocKind::Chat => self.chat_files += 1,
            DocKind::Dm => self.dm_files += 1,
            DocKind::Search => self.search_files += 1,
            DocKind::Unknown => {}
        }
        self.channel_ids.extend(file.channel_ids.iter().cloned());
        self.participants.extend(file.participants.iter().cloned());
    }

    /// Renders the plain-text summary printed after a run and written to
    /// `stats.txt`.
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "=== Statistics ===".to_string(),
            format!("Total Files Processed: {}", self.total_processed),
            format!("Chat Files: {}", self.chat_files),
            format!("DM Files: {}", self.dm_files),
            format!("Search Files: {}", self.search_files),
            String::new(),
            "Unique Channel IDs:".to_string(),
        ];
        if self.channel_ids.is_empty() {
            lines.push("None".to_string());
        } else {
            lines.extend(self.channel_ids.iter().cloned());
        }
        lines.push(String::new());
        lines.push("Chat Participants From All Chat And DM Files:".to_string());
        if self.participants.is_empty() {
            lines.push("None".to_string());
        } else {
            lines.extend(self.participants.iter().cloned());
        }
        lines.join("\n")
    }
}

/// One successfully converted export, ready to be written.
#[derive(Debug)]
pub struct ProcessedFile {
    pub kind: DocKind,
    /// The complete HTML page.
    pub html: String,
    /// Sanitized output name stem, before collision disambiguation.
    pub base_name: String,
    pub channel_ids: BTreeSet<String>,
    /// Rendered participant names; empty for search exports.
    pub participants: Vec<String>,
}

/// Lists every `.json` file (case-insensitive) directly inside `dir`,
/// sorted by name so collision suffixes are reproducible across runs.
pub fn discover_inputs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_extension(&path, "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn has_extension(path: &Path, wanted: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(wanted))
}

/// Loads, classifies, and renders a single export file.
///
/// Returns [`ChatscribeError::UnknownShape`] for documents that match no
/// export shape; callers are expected to skip those.
pub fn process_file(path: &Path, settings: &Settings) -> Result<ProcessedFile> {
    let raw = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&raw)
        .map_err(|e| ChatscribeError::parse(e, Some(path.to_path_buf())))?;

    let kind = classify(&value);
    if kind == DocKind::Unknown {
        return Err(ChatscribeError::unknown_shape(path));
    }

    let doc = ExportDocument::from_value(value)
        .map_err(|e| ChatscribeError::parse(e, Some(path.to_path_buf())))?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("export.json");
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("export");

    let (body, title) = match (kind, &doc) {
        (DocKind::Chat, ExportDocument::Flat(messages)) => (
            render_chat(messages, settings),
            format!("Chat Transcript ({file_name})"),
        ),
        (DocKind::Dm, _) => (
            render_dm(&doc, settings),
            format!("Direct Message Transcript ({file_name})"),
        ),
        (DocKind::Search, ExportDocument::Wrapped(export)) => (
            render_search(export, stem, settings),
            format!("Search Results Transcript ({file_name})"),
        ),
        // Chat is only ever classified from arrays and search from
        // mappings; a mismatch here means the classifier changed.
        _ => return Err(ChatscribeError::unknown_shape(path)),
    };

    let channel_ids = extract_channel_ids(&doc, kind);
    let (participants, base_name) = match kind {
        DocKind::Chat | DocKind::Dm => {
            let participants = extract_participants(&doc, kind, settings);
            let base = match participants.as_slice() {
                [] => kind.to_string(),
                [one] => format!("{kind}_{one}"),
                [one, two] => format!("{kind}_{one}_{two}"),
                _ => format!("{kind}_multi"),
            };
            (participants, base)
        }
        _ => (Vec::new(), format!("search_{stem}")),
    };

    Ok(ProcessedFile {
        kind,
        html: html_document(&body, &title),
        base_name: sanitize_filename(&base_name),
        channel_ids,
        participants,
    })
}

/// Replaces characters that are not allowed in file names with
/// underscores. Idempotent.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            other => other,
        })
        .collect()
}

/// Assigns collision-free output file names within a single run.
#[derive(Debug, Default)]
pub struct OutputNamer {
    counts: HashMap<String, usize>,
}

impl OutputNamer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `base.html` for the first use of `base` and `base_N.html`
    /// for every use after it, so repeated base names never overwrite.
    pub fn assign(&mut self, base: &str) -> String {
        let count = self.counts.entry(base.to_string()).or_insert(0);
        *count += 1;
        if *count == 1 {
            format!("{base}.html")
        } else {
            format!("{base}_{count}.html")
        }
    }
}

/// Converts every file in `inputs`, writing transcripts and `stats.txt`
/// into `output_dir`.
pub fn run(inputs: &[PathBuf], output_dir: &Path, settings: &Settings) -> Result<RunStats> {
    fs::create_dir_all(output_dir)?;

    let mut stats = RunStats::new();
    let mut namer = OutputNamer::new();

    for path in inputs {
        let display = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("<non-utf8 name>");

        let file = match process_file(path, settings) {
            Ok(file) => file,
            Err(err) if err.is_unknown_shape() => {
                println!("Skipping {display} as unknown content type.");
                continue;
            }
            Err(err) => {
                eprintln!("{}", format!("Error loading {display}: {err}").red());
                continue;
            }
        };

        let out_path = output_dir.join(namer.assign(&file.base_name));
        fs::write(&out_path, &file.html)?;
        println!(
            "{}",
            format!(
                "Processed {display} as {} and wrote {}",
                file.kind.to_string().to_uppercase(),
                out_path.display()
            )
            .green()
        );
        stats.record(&file);
    }

    fs::write(output_dir.join("stats.txt"), stats.summary())?;
    Ok(stats)
}
