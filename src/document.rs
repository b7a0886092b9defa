//! Document-shape processors and the HTML page skeleton.
//!
//! One processor per recognized shape. Each returns a body fragment that
//! [`html_document`] wraps into a standalone page; the pipeline decides
//! the page title.
//!
//! Display order: `order_ascending` reverses the as-stored order — exports
//! typically store newest first, so the reversal reads oldest first. For
//! wrapped shapes the reversal applies to the group list; messages inside
//! a group keep their stored order.

use crate::format::{format_message, format_user};
use crate::model::{ExportDocument, Message, WrappedExport};
use crate::settings::Settings;

/// Renders a plain channel log.
pub fn render_chat(messages: &[Message], settings: &Settings) -> String {
    let mut html = String::new();
    if let Some(id) = messages.first().and_then(|m| m.channel_id.as_deref()) {
        html.push_str(&channel_line(id));
    }
    html.push_str("<h2>Chat Transcript</h2>\n");
    for msg in ordered(messages, settings.order_ascending) {
        html.push_str(&format_message(msg, settings));
    }
    html
}

/// Renders a direct-message log.
///
/// Accepts both shapes the export format produces for dms: a flat message
/// list (two-participant logs) and a wrapper whose `messages` field holds
/// message groups.
pub fn render_dm(doc: &ExportDocument, settings: &Settings) -> String {
    match doc {
        ExportDocument::Flat(messages) => {
            let mut html = String::new();
            if let Some(id) = messages.first().and_then(|m| m.channel_id.as_deref()) {
                html.push_str(&channel_line(id));
            }
            html.push_str("<h2>Direct Message Transcript</h2>\n");
            for msg in ordered(messages, settings.order_ascending) {
                html.push_str(&format_message(msg, settings));
            }
            html
        }
        ExportDocument::Wrapped(export) => render_wrapped_dm(export, settings),
    }
}

fn render_wrapped_dm(export: &WrappedExport, settings: &Settings) -> String {
    let groups = ordered(&export.messages, settings.order_ascending);

    let mut html = String::new();
    if let Some(id) = leading_channel_id(&groups) {
        html.push_str(&channel_line(id));
    }
    html.push_str("<h2>Direct Message Transcript</h2>\n");
    for group in &groups {
        for msg in group.iter() {
            html.push_str(&format_message(msg, settings));
        }
    }

    // A wrapper without channel metadata may still name its recipients.
    let has_channels = export.channels.as_ref().is_some_and(|c| !c.is_empty());
    if !has_channels && !export.recipients.is_empty() {
        let names: Vec<String> = export
            .recipients
            .iter()
            .map(|r| format_user(Some(r), settings))
            .collect();
        html = format!(
            "<p><strong>Recipients:</strong> {}</p>\n{html}",
            names.join(", ")
        );
    }
    html
}

/// Renders a search-result export.
///
/// The search term is the input file's stem — the export itself does not
/// record what was searched for.
pub fn render_search(export: &WrappedExport, term: &str, settings: &Settings) -> String {
    let mut html = format!("<h2>Search Results - '{term}'</h2>\n");
    let total = export
        .total_results
        .map_or_else(|| "N/A".to_string(), |t| t.to_string());
    html.push_str(&format!("<p><strong>Total Results:</strong> {total}</p>\n"));

    let groups = ordered(&export.messages, settings.order_ascending);
    if let Some(id) = leading_channel_id(&groups) {
        html.push_str(&channel_line(id));
    }
    for group in &groups {
        for msg in group.iter() {
            html.push_str(&format_message(msg, settings));
        }
    }
    html
}

/// Wraps a body fragment in the standalone page skeleton.
pub fn html_document(body: &str, title: &str) -> String {
    format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
    <meta charset=\"UTF-8\">
    <title>{title}</title>
    <style>
      body {{ font-family: Arial, sans-serif; margin: 20px; }}
      .message {{ margin-bottom: 10px; }}
      .timestamp {{ color: gray; font-size: 0.9em; }}
      hr {{ border: 0; border-top: 1px solid #ccc; }}
    </style>
</head>
<body>
<h1>{title}</h1>
{body}
</body>
</html>
"
    )
}

fn ordered<T>(items: &[T], ascending: bool) -> Vec<&T> {
    if ascending {
        items.iter().rev().collect()
    } else {
        items.iter().collect()
    }
}

fn channel_line(id: &str) -> String {
    format!("<p><strong>Channel ID:</strong> {id}</p>\n")
}

/// The channel-id line comes from the first display-ordered group whose
/// opening message carries a `channel_id`.
fn leading_channel_id<'a>(groups: &[&'a Vec<Message>]) -> Option<&'a str> {
    groups
        .iter()
        .find_map(|g| g.first().and_then(|m| m.channel_id.as_deref()))
}
