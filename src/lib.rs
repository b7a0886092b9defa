//! # Chatscribe
//!
//! A Rust library and CLI for converting messaging-platform JSON chat
//! exports into standalone HTML transcripts.
//!
//! ## Overview
//!
//! Export files carry no type marker, so each document is classified by
//! its JSON shape — a plain channel log, a direct-message log, or a
//! search-result log — and rendered accordingly. A run over a directory of
//! exports writes one transcript per recognized file, aggregates
//! statistics (unique channel ids, participant names), and the generated
//! output can afterwards be scanned with a simple full-text search.
//!
//! One broken file never kills a run: parse failures and unrecognized
//! shapes are reported and skipped.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use chatscribe::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let settings = Settings::new().with_display_mode(2);
//!
//!     let inputs = discover_inputs(Path::new("."))?;
//!     let stats = run(&inputs, Path::new("Output"), &settings)?;
//!     println!("{}", stats.summary());
//!
//!     // Scan what was just generated.
//!     for name in search_output("hello", Path::new("Output")) {
//!         println!("match: {name}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`classify`] — shape sniffing ([`classify::classify`], [`classify::DocKind`])
//! - [`model`] — export document structures ([`model::Message`], [`model::ExportDocument`])
//! - [`format`] — per-record HTML fragments ([`format::format_message`])
//! - [`document`] — shape processors and the page wrapper
//! - [`extract`] — participant and channel-id collection
//! - [`pipeline`] — file discovery, conversion runs, [`pipeline::RunStats`]
//! - [`search`] — full-text scan over generated output
//! - [`settings`] — render options ([`Settings`])
//! - [`cli`] / [`shell`] — clap arguments and the interactive session
//! - [`error`] — unified error types ([`ChatscribeError`], [`Result`])

pub mod classify;
pub mod cli;
pub mod document;
pub mod error;
pub mod extract;
pub mod format;
pub mod model;
pub mod pipeline;
pub mod search;
pub mod settings;
pub mod shell;

// Re-export the main types at the crate root for convenience
pub use error::{ChatscribeError, Result};
pub use settings::Settings;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatscribe::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{ChatscribeError, Result};

    // Render settings
    pub use crate::settings::Settings;

    // Shape detection
    pub use crate::classify::{DocKind, classify};

    // Export structures
    pub use crate::model::{
        Attachment, Channel, Embed, EmbedMedia, ExportDocument, Message, User, WrappedExport,
    };

    // Formatting and assembly
    pub use crate::document::{html_document, render_chat, render_dm, render_search};
    pub use crate::format::{format_message, format_timestamp, format_user};

    // Extraction
    pub use crate::extract::{extract_channel_ids, extract_participants};

    // Pipeline
    pub use crate::pipeline::{
        OutputNamer, ProcessedFile, RunStats, discover_inputs, process_file, run,
        sanitize_filename,
    };

    // Search
    pub use crate::search::search_output;
}
