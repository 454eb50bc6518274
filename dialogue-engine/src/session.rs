//! One open chat widget instance: a session owns its transcript exclusively;
//! nothing else reads or writes it concurrently.

use crate::engine::DialogueEngine;
use crate::transcript::Transcript;
use chrono::{DateTime, Utc};
use kiro_core::{DialogueError, Message, Topic};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// A single conversation session bound to a shared engine.
pub struct Session {
    id: Uuid,
    opened_at: DateTime<Utc>,
    engine: Arc<DialogueEngine>,
    transcript: Transcript,
}

impl Session {
    /// Opens a session with a freshly seeded transcript.
    pub fn open(engine: Arc<DialogueEngine>) -> Self {
        let id = Uuid::new_v4();
        let transcript = engine.open();
        info!(session_id = %id, "step: session opened");
        Self {
            id,
            opened_at: Utc::now(),
            engine,
            transcript,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Selects a topic; returns the bot reply.
    pub fn select(&mut self, topic: Topic) -> Result<&Message, DialogueError> {
        self.engine.select_topic(&mut self.transcript, topic)
    }

    /// Resets this session's transcript back to the seed.
    pub fn reset(&mut self) {
        self.engine.reset(&mut self.transcript);
    }

    /// Read-only view for rendering.
    pub fn messages(&self) -> &[Message] {
        self.transcript.messages()
    }

    /// The most recent message (the seed right after open or reset).
    pub fn latest(&self) -> &Message {
        self.transcript.latest()
    }
}
