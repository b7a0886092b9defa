//! Participant and channel-id extraction.
//!
//! Walks the same shapes as the document processors but collects instead
//! of rendering. Participants are deduplicated by their *rendered* display
//! string, so two users that format identically under the active display
//! mode merge into one entry.

use std::collections::BTreeSet;

use crate::classify::DocKind;
use crate::format::format_user;
use crate::model::{ExportDocument, Message};
use crate::settings::Settings;

/// Collects the sorted, deduplicated set of rendered participant names.
///
/// Wrapped dm/search exports contribute three sources: message authors,
/// `channels[].recipients`, and the top-level `recipients` list.
pub fn extract_participants(
    doc: &ExportDocument,
    kind: DocKind,
    settings: &Settings,
) -> Vec<String> {
    let mut names = BTreeSet::new();
    match doc {
        ExportDocument::Flat(messages) => {
            for msg in messages {
                names.insert(format_user(msg.author.as_ref(), settings));
            }
        }
        ExportDocument::Wrapped(export) if matches!(kind, DocKind::Dm | DocKind::Search) => {
            for group in &export.messages {
                for msg in group {
                    names.insert(format_user(msg.author.as_ref(), settings));
                }
            }
            if let Some(channels) = &export.channels {
                for channel in channels {
                    for rec in &channel.recipients {
                        names.insert(format_user(Some(rec), settings));
                    }
                }
            }
            for rec in &export.recipients {
                names.insert(format_user(Some(rec), settings));
            }
        }
        ExportDocument::Wrapped(_) => {}
    }
    names.into_iter().collect()
}

/// Collects the set of unique raw channel ids.
pub fn extract_channel_ids(doc: &ExportDocument, kind: DocKind) -> BTreeSet<String> {
    let mut ids = BTreeSet::new();
    match doc {
        ExportDocument::Flat(messages) => collect_message_channel_ids(messages, &mut ids),
        ExportDocument::Wrapped(export) if matches!(kind, DocKind::Dm | DocKind::Search) => {
            for group in &export.messages {
                collect_message_channel_ids(group, &mut ids);
            }
            if let Some(channels) = &export.channels {
                for channel in channels {
                    if let Some(id) = &channel.id {
                        ids.insert(id.clone());
                    }
                }
            }
        }
        ExportDocument::Wrapped(_) => {}
    }
    ids
}

fn collect_message_channel_ids(messages: &[Message], ids: &mut BTreeSet<String>) {
    for msg in messages {
        if let Some(id) = &msg.channel_id {
            ids.insert(id.clone());
        }
    }
}
