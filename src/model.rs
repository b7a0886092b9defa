//! Export document structures.
//!
//! These types mirror the JSON the messaging platform's data-export
//! feature produces. Every field is optional or defaulted because exports
//! are wildly inconsistent between endpoints; unknown fields are ignored.
//! Values are held as exported — timestamps stay strings, content stays
//! raw text — and interpretation happens at render time.

use serde::Deserialize;
use serde_json::Value;

/// A message author.
///
/// The display form shown in transcripts is computed by
/// [`format_user`](crate::format::format_user) from these three fields plus
/// the configured display mode, fresh on every render.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    /// Account name; exports occasionally omit it.
    #[serde(default = "default_username")]
    pub username: String,

    /// Display name, when the account has one.
    #[serde(default)]
    pub global_name: Option<String>,

    /// Numeric account id, as the decimal string the export carries.
    #[serde(default)]
    pub id: Option<String>,
}

fn default_username() -> String {
    "Unknown".to_string()
}

impl Default for User {
    fn default() -> Self {
        Self {
            username: default_username(),
            global_name: None,
            id: None,
        }
    }
}

/// An uploaded file referenced by a message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Attachment {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
}

/// A media reference inside an embed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmbedMedia {
    #[serde(default)]
    pub url: Option<String>,
}

/// A link preview or rich-content block attached to a message.
///
/// At most one line is rendered per embed, chosen by priority: full image,
/// then thumbnail, then titled link, then bare url. An embed matching none
/// of those renders nothing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Embed {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub image: Option<EmbedMedia>,
    #[serde(default)]
    pub thumbnail: Option<EmbedMedia>,
}

/// A single exported message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Message {
    /// ISO-8601 creation time, kept as the raw exported string.
    #[serde(default)]
    pub timestamp: String,

    /// ISO-8601 last-edit time, absent when the message was never edited.
    #[serde(default)]
    pub edited_timestamp: Option<String>,

    /// The author; system messages can lack one.
    #[serde(default)]
    pub author: Option<User>,

    /// Raw message text. Not sanitized or HTML-escaped anywhere.
    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub mentions: Vec<User>,

    #[serde(default)]
    pub attachments: Vec<Attachment>,

    #[serde(default)]
    pub embeds: Vec<Embed>,

    /// Id of the channel the message belongs to.
    #[serde(default)]
    pub channel_id: Option<String>,
}

/// A channel record from a dm/search export wrapper.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Channel {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub recipients: Vec<User>,
}

/// The mapping-shaped export used by dm and search endpoints.
///
/// `messages` is a list of message groups — the export batches messages
/// per page, so each element is itself an ordered message list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WrappedExport {
    /// Total hit count reported by the search endpoint.
    #[serde(default)]
    pub total_results: Option<u64>,

    /// Channel metadata; `None` or empty when the export carries none.
    #[serde(default)]
    pub channels: Option<Vec<Channel>>,

    #[serde(default)]
    pub messages: Vec<Vec<Message>>,

    /// Top-level recipient list some dm exports carry instead of channels.
    #[serde(default)]
    pub recipients: Vec<User>,
}

/// A parsed export document, in one of the two top-level shapes the
/// platform produces.
///
/// Classification happens before construction, on the raw
/// [`serde_json::Value`] — see [`classify`](crate::classify::classify).
#[derive(Debug, Clone)]
pub enum ExportDocument {
    /// A plain ordered message list (chat logs and two-party dm logs).
    Flat(Vec<Message>),
    /// A mapping with grouped messages (dm and search exports).
    Wrapped(WrappedExport),
}

impl ExportDocument {
    /// Converts an already-classified JSON value into its typed form.
    ///
    /// Arrays become [`ExportDocument::Flat`], everything else is read as
    /// the wrapper mapping.
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        if value.is_array() {
            serde_json::from_value(value).map(ExportDocument::Flat)
        } else {
            serde_json::from_value(value).map(ExportDocument::Wrapped)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_deserialize_full() {
        let json = r#"{
            "timestamp": "2024-01-15T10:30:00+00:00",
            "edited_timestamp": "2024-01-15T10:35:00+00:00",
            "author": {"username": "alice", "global_name": "Alice", "id": "111"},
            "content": "hello",
            "mentions": [{"username": "bob"}],
            "attachments": [{"url": "https://cdn.example/a.png", "filename": "a.png"}],
            "embeds": [{"url": "https://example.com"}],
            "channel_id": "c1"
        }"#;

        let msg: Message = serde_json::from_str(json).expect("deserialize");
        assert_eq!(msg.timestamp, "2024-01-15T10:30:00+00:00");
        assert!(msg.edited_timestamp.is_some());
        assert_eq!(msg.author.as_ref().unwrap().username, "alice");
        assert_eq!(msg.mentions.len(), 1);
        assert_eq!(msg.attachments.len(), 1);
        assert_eq!(msg.embeds.len(), 1);
        assert_eq!(msg.channel_id.as_deref(), Some("c1"));
    }

    #[test]
    fn test_message_deserialize_sparse() {
        let msg: Message = serde_json::from_str(r#"{"timestamp": "t"}"#).expect("deserialize");
        assert!(msg.author.is_none());
        assert!(msg.content.is_empty());
        assert!(msg.mentions.is_empty());
        assert!(msg.channel_id.is_none());
    }

    #[test]
    fn test_user_username_default() {
        let user: User = serde_json::from_str(r#"{"id": "42"}"#).expect("deserialize");
        assert_eq!(user.username, "Unknown");
        assert_eq!(user.id.as_deref(), Some("42"));
    }

    #[test]
    fn test_null_author_and_edited() {
        let json = r#"{"timestamp": "t", "author": null, "edited_timestamp": null}"#;
        let msg: Message = serde_json::from_str(json).expect("deserialize");
        assert!(msg.author.is_none());
        assert!(msg.edited_timestamp.is_none());
    }

    #[test]
    fn test_wrapped_export_deserialize() {
        let json = r#"{
            "total_results": 5,
            "channels": [{"id": "c9", "recipients": [{"username": "eve"}]}],
            "messages": [[{"timestamp": "t", "author": {"username": "a"}, "content": "hi"}]]
        }"#;

        let export: WrappedExport = serde_json::from_str(json).expect("deserialize");
        assert_eq!(export.total_results, Some(5));
        assert_eq!(export.channels.as_ref().unwrap().len(), 1);
        assert_eq!(export.messages.len(), 1);
        assert_eq!(export.messages[0].len(), 1);
        assert!(export.recipients.is_empty());
    }

    #[test]
    fn test_wrapped_export_null_channels() {
        let export: WrappedExport =
            serde_json::from_str(r#"{"channels": null, "messages": []}"#).expect("deserialize");
        assert!(export.channels.is_none());
    }

    #[test]
    fn test_from_value_flat() {
        let value: Value = serde_json::from_str(r#"[{"timestamp": "t", "content": "x"}]"#).unwrap();
        match ExportDocument::from_value(value).expect("convert") {
            ExportDocument::Flat(messages) => assert_eq!(messages.len(), 1),
            ExportDocument::Wrapped(_) => panic!("expected flat document"),
        }
    }

    #[test]
    fn test_from_value_wrapped() {
        let value: Value = serde_json::from_str(r#"{"messages": [[]], "channels": []}"#).unwrap();
        match ExportDocument::from_value(value).expect("convert") {
            ExportDocument::Wrapped(export) => assert_eq!(export.messages.len(), 1),
            ExportDocument::Flat(_) => panic!("expected wrapped document"),
        }
    }

    #[test]
    fn test_from_value_rejects_mismatched_values() {
        let value: Value = serde_json::from_str(r#"[{"timestamp": "t"}, "stray"]"#).unwrap();
        assert!(ExportDocument::from_value(value).is_err());
    }
}
