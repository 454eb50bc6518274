//! Core types: topic, speaker, and transcript message.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A conversational branch the bot can discuss. Closed set: topics are static
/// configuration, never created or destroyed at runtime. Serialized as the
/// display label (e.g. `"About Us"`), which is also the button caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Topic {
    #[serde(rename = "Services")]
    Services,
    #[serde(rename = "About Us")]
    AboutUs,
    #[serde(rename = "Contact")]
    Contact,
    #[serde(rename = "Pricing")]
    Pricing,
    #[serde(rename = "Facade Details")]
    FacadeDetails,
    #[serde(rename = "Duct Details")]
    DuctDetails,
    #[serde(rename = "Menu")]
    Menu,
}

impl Topic {
    /// All topics, in script display order.
    pub const ALL: [Topic; 7] = [
        Topic::Services,
        Topic::AboutUs,
        Topic::Contact,
        Topic::Pricing,
        Topic::FacadeDetails,
        Topic::DuctDetails,
        Topic::Menu,
    ];

    /// Display label, identical to the serialized form and the button caption.
    pub fn label(&self) -> &'static str {
        match self {
            Topic::Services => "Services",
            Topic::AboutUs => "About Us",
            Topic::Contact => "Contact",
            Topic::Pricing => "Pricing",
            Topic::FacadeDetails => "Facade Details",
            Topic::DuctDetails => "Duct Details",
            Topic::Menu => "Menu",
        }
    }

    /// Parses a display label back into a topic. Case-insensitive on the label text.
    pub fn from_label(s: &str) -> Option<Topic> {
        let s = s.trim();
        Topic::ALL
            .iter()
            .copied()
            .find(|t| t.label().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Who produced a message (the visitor or the bot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    User,
    Bot,
}

/// A single transcript entry. Ids are allocated by the owning transcript and
/// strictly increase in insertion order; messages are never mutated after append.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub speaker: Speaker,
    pub text: String,
    /// Topics offered as buttons under this message. Empty for user messages.
    pub offered_topics: Vec<Topic>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Creates a user message (a topic selection; offers nothing).
    pub fn user(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            speaker: Speaker::User,
            text: text.into(),
            offered_topics: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Creates a bot message with the topics it offers next.
    pub fn bot(id: u64, text: impl Into<String>, offered_topics: Vec<Topic>) -> Self {
        Self {
            id,
            speaker: Speaker::Bot,
            text: text.into(),
            offered_topics,
            created_at: Utc::now(),
        }
    }
}
