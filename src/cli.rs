//! Command-line interface definition using clap.
//!
//! All render options are read once at startup and frozen into a
//! [`Settings`] value; there are no per-file overrides.

use std::path::PathBuf;

use clap::Parser;

use crate::settings::Settings;

/// Convert chat-log JSON exports into standalone HTML transcripts.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatscribe")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatscribe
    chatscribe --display-mode 2 --newest-first
    chatscribe --input-dir exports --output-dir Transcripts
    chatscribe --search \"meeting notes\"
    chatscribe --batch")]
pub struct Args {
    /// Directory scanned for .json export files
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    pub input_dir: PathBuf,

    /// Directory transcripts are written to
    #[arg(short, long, default_value = "Output", value_name = "DIR")]
    pub output_dir: PathBuf,

    /// User display detail: 1 = username, 2 = username/global name,
    /// 3 = username/global name/id
    #[arg(short, long, default_value_t = 1, value_name = "MODE")]
    pub display_mode: u8,

    /// Render attachments as clickable links instead of inline images
    #[arg(long)]
    pub embed_images: bool,

    /// Emit raw ISO-8601 timestamps instead of reformatting them
    #[arg(long)]
    pub full_timestamps: bool,

    /// Keep the stored message order (typically newest first)
    #[arg(long)]
    pub newest_first: bool,

    /// Search existing output for TERM and exit
    #[arg(long, value_name = "TERM")]
    pub search: Option<String>,

    /// Run without prompts; existing output is deleted and regenerated
    #[arg(long)]
    pub batch: bool,
}

impl Args {
    /// Builds the render settings this invocation runs with.
    pub fn settings(&self) -> Settings {
        Settings::new()
            .with_display_mode(self.display_mode)
            .with_embed_images(self.embed_images)
            .with_full_timestamp(self.full_timestamps)
            .with_order_ascending(!self.newest_first)
    }
}
