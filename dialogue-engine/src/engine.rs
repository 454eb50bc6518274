//! # Dialogue engine
//!
//! Turns a topic selection into two transcript appends: the user's selection and the
//! scripted bot reply. The script is validated at construction, so a lookup miss in
//! [`DialogueEngine::select_topic`] is a defensive impossible path, fatal to the call.

use crate::script::Script;
use crate::transcript::Transcript;
use kiro_core::{DialogueError, Message, ScriptError, Topic};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Stateless engine over a shared immutable script. All conversation state lives
/// in the [`Transcript`] passed to each call.
#[derive(Clone, Debug)]
pub struct DialogueEngine {
    script: Arc<Script>,
}

impl DialogueEngine {
    /// Creates an engine, running the script's closure check first. A broken
    /// script (dangling topic reference, empty table) fails here, before any
    /// conversation starts.
    pub fn new(script: Arc<Script>) -> Result<Self, ScriptError> {
        script.validate()?;
        Ok(Self { script })
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    /// Opens a fresh transcript seeded with the greeting message.
    pub fn open(&self) -> Transcript {
        Transcript::seeded(&self.script)
    }

    /// Handles a topic selection: appends a user message (`text` = the topic
    /// label, offering nothing), then the bot reply with text and offered topics
    /// taken verbatim from the script entry. Returns the bot reply.
    ///
    /// Fails with [`DialogueError::UnknownTopic`] if the topic has no entry; the
    /// lookup happens before any append, so the transcript is untouched on failure.
    #[instrument(skip(self, transcript))]
    pub fn select_topic<'t>(
        &self,
        transcript: &'t mut Transcript,
        topic: Topic,
    ) -> Result<&'t Message, DialogueError> {
        let entry = self
            .script
            .entry(topic)
            .ok_or(DialogueError::UnknownTopic(topic))?;

        let user_message_id = transcript.push_user(topic.label());
        let bot_message_id =
            transcript.push_bot(entry.text.clone(), entry.next_topics.clone());

        info!(
            topic = %topic,
            user_message_id,
            bot_message_id,
            offered = entry.next_topics.len(),
            "step: topic selected"
        );
        debug!(reply_len = entry.text.len(), "Reply appended");

        Ok(transcript.latest())
    }

    /// Resets the transcript back to the seed message. Idempotent.
    #[instrument(skip(self, transcript))]
    pub fn reset(&self, transcript: &mut Transcript) {
        transcript.reset();
        info!(len = transcript.len(), "step: transcript reset");
    }
}

// Unit/integration tests live in tests/engine_test.rs
