//! HTML fragment formatting for single records.
//!
//! Pure functions: one message, user, attachment, or embed in, one HTML
//! fragment out. No state, no I/O. Message content is deliberately emitted
//! verbatim — transcripts mirror the export byte-for-byte, markup included
//! — so the output is only safe to open locally, not to serve.

use chrono::{DateTime, NaiveDateTime};

use crate::model::{Attachment, Embed, Message, User};
use crate::settings::Settings;

/// Reformats an ISO-8601 timestamp to `YYYY-MM-DD HH:MM:SS`.
///
/// Accepts both offset-bearing (RFC 3339) and naive exported timestamps.
/// Anything that fails to parse is returned unchanged; this function never
/// errors.
pub fn format_timestamp(ts: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return dt.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    // Some export endpoints omit the UTC offset entirely.
    if let Ok(dt) = NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    ts.to_string()
}

/// Renders a timestamp in the configured style: raw when
/// `use_full_timestamp` is set, reformatted otherwise.
pub fn render_timestamp(ts: &str, settings: &Settings) -> String {
    if settings.use_full_timestamp {
        ts.to_string()
    } else {
        format_timestamp(ts)
    }
}

/// Renders a user per the configured display mode.
///
/// Mode 1 shows the username, mode 2 adds the global name when present,
/// mode 3 adds the account id as well. Unrecognized modes behave like
/// mode 1, and an absent author renders as `"Unknown"`.
pub fn format_user(author: Option<&User>, settings: &Settings) -> String {
    let Some(author) = author else {
        return "Unknown".to_string();
    };

    let username = author.username.as_str();
    let global_name = author.global_name.as_deref().unwrap_or("");
    let id = author.id.as_deref().unwrap_or("");

    match settings.display_mode {
        2 if !global_name.is_empty() => format!("{username}/{global_name}"),
        3 if !global_name.is_empty() => format!("{username}/{global_name}/{id}"),
        3 => format!("{username}/{id}"),
        _ => username.to_string(),
    }
}

/// Formats a single message into one transcript fragment.
///
/// Segment order: bracketed timestamp (with an `(edited: …)` suffix when
/// the message was edited), bold sender, raw content, then mentions,
/// attachments, and embeds on their own lines. The fragment is closed with
/// a horizontal rule.
pub fn format_message(msg: &Message, settings: &Settings) -> String {
    let ts = render_timestamp(&msg.timestamp, settings);
    let edited = match &msg.edited_timestamp {
        Some(raw) => format!(" (edited: {})", render_timestamp(raw, settings)),
        None => String::new(),
    };
    let sender = format_user(msg.author.as_ref(), settings);

    let mut extras = String::new();

    if !msg.mentions.is_empty() {
        let names: Vec<String> = msg
            .mentions
            .iter()
            .map(|m| format_user(Some(m), settings))
            .collect();
        extras.push_str(&format!("<br><em>Mentions:</em> {}", names.join(", ")));
    }

    if !msg.attachments.is_empty() {
        let items: Vec<String> = msg
            .attachments
            .iter()
            .map(|a| format_attachment(a, settings))
            .collect();
        extras.push_str(&format!("<br><em>Attachments:</em> {}", items.join("<br>")));
    }

    let embed_items: Vec<String> = msg.embeds.iter().filter_map(format_embed).collect();
    if !embed_items.is_empty() {
        extras.push_str(&format!("<br><em>Embeds:</em> {}", embed_items.join("<br>")));
    }

    format!(
        "<div class=\"message\"><span class=\"timestamp\">[{ts}]{edited}</span> \
         <strong>{sender}</strong>: {content}{extras}</div><hr>\n",
        content = msg.content,
    )
}

fn format_attachment(att: &Attachment, settings: &Settings) -> String {
    let url = att.url.as_deref().unwrap_or("#");
    let filename = att.filename.as_deref().unwrap_or("attachment");
    if settings.embed_images {
        format!("<a href=\"{url}\">{filename}</a>")
    } else {
        format!(
            "<img src=\"{url}\" alt=\"{filename}\" style=\"max-width:500px;\"><br>\
             <a href=\"{url}\">{filename}</a>"
        )
    }
}

/// Renders one embed line, or `None` when the embed carries nothing usable.
/// Cases are tried in priority order; the first match wins.
fn format_embed(embed: &Embed) -> Option<String> {
    if let Some(url) = embed.image.as_ref().and_then(|m| m.url.as_deref()) {
        return Some(format!(
            "<img src=\"{url}\" alt=\"embed image\" style=\"max-width:500px;\"><br>\
             <a href=\"{url}\">{url}</a>"
        ));
    }
    if let Some(url) = embed.thumbnail.as_ref().and_then(|m| m.url.as_deref()) {
        return Some(format!(
            "<img src=\"{url}\" alt=\"embed thumbnail\" style=\"max-width:500px;\"><br>\
             <a href=\"{url}\">{url}</a>"
        ));
    }
    if let (Some(title), Some(url)) = (embed.title.as_deref(), embed.url.as_deref()) {
        return Some(format!("<a href=\"{url}\">{title}</a>"));
    }
    let url = embed.url.as_deref()?;
    Some(format!("<a href=\"{url}\">{url}</a>"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EmbedMedia;

    fn user(username: &str, global_name: Option<&str>, id: Option<&str>) -> User {
        User {
            username: username.to_string(),
            global_name: global_name.map(str::to_string),
            id: id.map(str::to_string),
        }
    }

    // =========================================================================
    // format_timestamp
    // =========================================================================

    #[test]
    fn test_timestamp_with_offset() {
        assert_eq!(
            format_timestamp("2024-01-15T10:30:00+00:00"),
            "2024-01-15 10:30:00"
        );
    }

    #[test]
    fn test_timestamp_with_fraction_and_zulu() {
        assert_eq!(
            format_timestamp("2024-01-15T10:30:00.123000Z"),
            "2024-01-15 10:30:00"
        );
    }

    #[test]
    fn test_timestamp_naive() {
        assert_eq!(format_timestamp("2024-01-01T00:00:00"), "2024-01-01 00:00:00");
    }

    #[test]
    fn test_timestamp_invalid_passes_through() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
        assert_eq!(format_timestamp(""), "");
    }

    #[test]
    fn test_timestamp_output_reparses() {
        let out = format_timestamp("2024-06-15T12:00:00+02:00");
        assert!(NaiveDateTime::parse_from_str(&out, "%Y-%m-%d %H:%M:%S").is_ok());
    }

    #[test]
    fn test_render_timestamp_full() {
        let settings = Settings::new().with_full_timestamp(true);
        assert_eq!(
            render_timestamp("2024-01-15T10:30:00+00:00", &settings),
            "2024-01-15T10:30:00+00:00"
        );
    }

    // =========================================================================
    // format_user
    // =========================================================================

    #[test]
    fn test_user_mode_1() {
        let settings = Settings::new();
        let u = user("alice", Some("Alice"), Some("111"));
        assert_eq!(format_user(Some(&u), &settings), "alice");
    }

    #[test]
    fn test_user_mode_2() {
        let settings = Settings::new().with_display_mode(2);
        let u = user("alice", Some("Alice"), None);
        assert_eq!(format_user(Some(&u), &settings), "alice/Alice");

        let bare = user("bob", None, None);
        assert_eq!(format_user(Some(&bare), &settings), "bob");
    }

    #[test]
    fn test_user_mode_3() {
        let settings = Settings::new().with_display_mode(3);
        let u = user("alice", Some("Alice"), Some("111"));
        assert_eq!(format_user(Some(&u), &settings), "alice/Alice/111");

        let no_global = user("bob", None, Some("222"));
        assert_eq!(format_user(Some(&no_global), &settings), "bob/222");
    }

    #[test]
    fn test_user_unrecognized_mode_falls_back_to_username() {
        for mode in [0, 4, 99] {
            let settings = Settings::new().with_display_mode(mode);
            let u = user("alice", Some("Alice"), Some("111"));
            assert_eq!(format_user(Some(&u), &settings), "alice");
        }
    }

    #[test]
    fn test_user_absent_is_unknown() {
        let settings = Settings::new();
        assert_eq!(format_user(None, &settings), "Unknown");
    }

    // =========================================================================
    // format_message
    // =========================================================================

    fn basic_message() -> Message {
        Message {
            timestamp: "2024-01-15T10:30:00+00:00".to_string(),
            author: Some(user("alice", None, None)),
            content: "hello world".to_string(),
            ..Message::default()
        }
    }

    #[test]
    fn test_message_basic() {
        let html = format_message(&basic_message(), &Settings::new());
        assert!(html.contains("[2024-01-15 10:30:00]"));
        assert!(html.contains("<strong>alice</strong>: hello world"));
        assert!(html.ends_with("</div><hr>\n"));
        assert!(!html.contains("edited"));
        assert!(!html.contains("Mentions"));
    }

    #[test]
    fn test_message_edited_marker() {
        let msg = Message {
            edited_timestamp: Some("2024-01-15T10:35:00+00:00".to_string()),
            ..basic_message()
        };
        let html = format_message(&msg, &Settings::new());
        assert!(html.contains("(edited: 2024-01-15 10:35:00)"));
    }

    #[test]
    fn test_message_content_not_escaped() {
        let msg = Message {
            content: "<b>raw & unescaped</b>".to_string(),
            ..basic_message()
        };
        let html = format_message(&msg, &Settings::new());
        assert!(html.contains("<b>raw & unescaped</b>"));
    }

    #[test]
    fn test_message_mentions_line() {
        let msg = Message {
            mentions: vec![user("bob", None, None), user("carol", None, None)],
            ..basic_message()
        };
        let html = format_message(&msg, &Settings::new());
        assert!(html.contains("<em>Mentions:</em> bob, carol"));
    }

    #[test]
    fn test_attachment_inline_image_by_default() {
        let msg = Message {
            attachments: vec![Attachment {
                url: Some("https://cdn.example/a.png".to_string()),
                filename: Some("a.png".to_string()),
            }],
            ..basic_message()
        };
        let html = format_message(&msg, &Settings::new());
        assert!(html.contains("<em>Attachments:</em>"));
        assert!(html.contains("<img src=\"https://cdn.example/a.png\""));
        assert!(html.contains("<a href=\"https://cdn.example/a.png\">a.png</a>"));
    }

    #[test]
    fn test_attachment_link_only_when_embed_images_set() {
        let settings = Settings::new().with_embed_images(true);
        let msg = Message {
            attachments: vec![Attachment {
                url: Some("https://cdn.example/a.png".to_string()),
                filename: Some("a.png".to_string()),
            }],
            ..basic_message()
        };
        let html = format_message(&msg, &settings);
        assert!(!html.contains("<img"));
        assert!(html.contains("<a href=\"https://cdn.example/a.png\">a.png</a>"));
    }

    #[test]
    fn test_attachment_missing_fields_default() {
        let msg = Message {
            attachments: vec![Attachment::default()],
            ..basic_message()
        };
        let html = format_message(&msg, &Settings::new());
        assert!(html.contains("<a href=\"#\">attachment</a>"));
    }

    #[test]
    fn test_embed_image_has_priority() {
        let embed = Embed {
            title: Some("A Title".to_string()),
            url: Some("https://example.com".to_string()),
            image: Some(EmbedMedia {
                url: Some("https://cdn.example/full.png".to_string()),
            }),
            thumbnail: Some(EmbedMedia {
                url: Some("https://cdn.example/thumb.png".to_string()),
            }),
        };
        let line = format_embed(&embed).expect("rendered");
        assert!(line.contains("alt=\"embed image\""));
        assert!(line.contains("full.png"));
        assert!(!line.contains("thumb.png"));
    }

    #[test]
    fn test_embed_thumbnail_then_title_then_bare_url() {
        let thumb = Embed {
            thumbnail: Some(EmbedMedia {
                url: Some("https://cdn.example/t.png".to_string()),
            }),
            ..Embed::default()
        };
        assert!(format_embed(&thumb).unwrap().contains("embed thumbnail"));

        let titled = Embed {
            title: Some("Docs".to_string()),
            url: Some("https://example.com/docs".to_string()),
            ..Embed::default()
        };
        assert_eq!(
            format_embed(&titled).unwrap(),
            "<a href=\"https://example.com/docs\">Docs</a>"
        );

        let bare = Embed {
            url: Some("https://example.com".to_string()),
            ..Embed::default()
        };
        assert_eq!(
            format_embed(&bare).unwrap(),
            "<a href=\"https://example.com\">https://example.com</a>"
        );
    }

    #[test]
    fn test_empty_embed_is_omitted() {
        assert!(format_embed(&Embed::default()).is_none());

        let msg = Message {
            embeds: vec![Embed::default()],
            ..basic_message()
        };
        let html = format_message(&msg, &Settings::new());
        assert!(!html.contains("Embeds"));
    }
}
