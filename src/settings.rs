//! Render settings.
//!
//! One [`Settings`] value is constructed at startup and passed by reference
//! into every formatting and processing call; nothing below the CLI layer
//! reads ambient state.
//!
//! # Example
//!
//! ```rust
//! use chatscribe::settings::Settings;
//!
//! let settings = Settings::new()
//!     .with_display_mode(2)
//!     .with_embed_images(true);
//! ```

use serde::{Deserialize, Serialize};

/// Controls how transcripts are rendered.
///
/// The defaults match the original converter: username-only display,
/// inline attachment images, reformatted timestamps, oldest-first order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// User display detail: 1 = username, 2 = username/global name,
    /// 3 = username/global name/id. Any other value behaves like 1.
    pub display_mode: u8,

    /// `true` renders attachments as clickable links only; `false` embeds
    /// the image inline with the link below it.
    pub embed_images: bool,

    /// `true` emits raw ISO-8601 timestamps; `false` reformats them to
    /// `YYYY-MM-DD HH:MM:SS`.
    pub use_full_timestamp: bool,

    /// `true` displays oldest first by reversing the stored order;
    /// `false` keeps the stored order, which is typically newest first.
    pub order_ascending: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display_mode: 1,
            embed_images: false,
            use_full_timestamp: false,
            order_ascending: true,
        }
    }
}

impl Settings {
    /// Creates settings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the user display mode.
    #[must_use]
    pub fn with_display_mode(mut self, mode: u8) -> Self {
        self.display_mode = mode;
        self
    }

    /// Sets whether attachments render as links only.
    #[must_use]
    pub fn with_embed_images(mut self, embed: bool) -> Self {
        self.embed_images = embed;
        self
    }

    /// Sets whether timestamps are emitted raw.
    #[must_use]
    pub fn with_full_timestamp(mut self, full: bool) -> Self {
        self.use_full_timestamp = full;
        self
    }

    /// Sets the display order.
    #[must_use]
    pub fn with_order_ascending(mut self, ascending: bool) -> Self {
        self.order_ascending = ascending;
        self
    }
}
