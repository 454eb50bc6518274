//! # Transcript format
//!
//! Formats a transcript into display lines for a terminal front end.
//!
//! ## Format
//!
//! - **Bot bubble**: `{bot_name}: {text}`
//! - **User bubble**: `You: {text}`
//! - **Option row** (under a bot bubble): `  [{n}] {topic label}`, one per offered
//!   topic, in script order
//! - **Footer hint**: [`FOOTER_HINT`]
//!
//! ## Usage
//!
//! Used by `kiro-cli` to print the conversation after each exchange. Pure
//! functions; no I/O.

use kiro_core::{Message, Speaker, Topic};

/// Prefix for visitor messages.
pub const USER_PREFIX: &str = "You";

/// The widget footer hint shown under the conversation.
pub const FOOTER_HINT: &str = "Click options above to continue";

/// Formats one message bubble as `{speaker}: {text}`. Multi-line texts keep
/// their line breaks; only the first line carries the prefix.
pub fn format_message(bot_name: &str, message: &Message) -> String {
    let prefix = match message.speaker {
        Speaker::Bot => bot_name,
        Speaker::User => USER_PREFIX,
    };
    format!("{}: {}", prefix, message.text)
}

/// Formats the option-button row under a bot bubble: one `  [n] label` line per
/// topic, numbered from 1 in the given order.
pub fn format_options(topics: &[Topic]) -> Vec<String> {
    topics
        .iter()
        .enumerate()
        .map(|(i, t)| format!("  [{}] {}", i + 1, t.label()))
        .collect()
}

/// Renders a whole transcript as display lines: each bubble followed by its
/// option rows. Messages offering nothing produce a single line.
pub fn render_transcript(bot_name: &str, messages: &[Message]) -> Vec<String> {
    let mut lines = Vec::new();
    for message in messages {
        lines.push(format_message(bot_name, message));
        lines.extend(format_options(&message.offered_topics));
    }
    lines
}

/// Renders a transcript as one newline-joined string, for direct printing.
pub fn render_transcript_text(bot_name: &str, messages: &[Message]) -> String {
    render_transcript(bot_name, messages).join("\n")
}
