//! Append-only transcript for one chat session.
//!
//! Owns its messages exclusively; ids come from an allocator that never rewinds,
//! so they stay strictly increasing across any number of select/reset cycles.

use crate::script::Script;
use kiro_core::{Message, Topic};
use serde::{Deserialize, Serialize};

/// Ordered log of exchanged messages. Always holds at least the seed message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    messages: Vec<Message>,
    next_id: u64,
}

impl Transcript {
    /// Creates a transcript holding exactly the seed: one bot message with the
    /// script's greeting text, offering the root topic set.
    pub fn seeded(script: &Script) -> Self {
        let seed = Message::bot(
            1,
            script.greeting.text.clone(),
            script.greeting.root_topics.clone(),
        );
        Self {
            messages: vec![seed],
            next_id: 2,
        }
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Appends a user message (a topic selection; offers nothing). Returns its id.
    pub(crate) fn push_user(&mut self, text: impl Into<String>) -> u64 {
        let id = self.alloc_id();
        self.messages.push(Message::user(id, text));
        id
    }

    /// Appends a bot message with the topics it offers next. Returns its id.
    pub(crate) fn push_bot(&mut self, text: impl Into<String>, offered: Vec<Topic>) -> u64 {
        let id = self.alloc_id();
        self.messages.push(Message::bot(id, text, offered));
        id
    }

    /// Truncates back to the seed message. The id allocator is not rewound, so
    /// messages appended after a reset still get fresh, larger ids. Idempotent.
    pub fn reset(&mut self) {
        self.messages.truncate(1);
    }

    /// All messages, oldest first, for read-only rendering.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The most recent message. The seed guarantees there always is one.
    pub fn latest(&self) -> &Message {
        self.messages
            .last()
            .expect("transcript always holds the seed message")
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
