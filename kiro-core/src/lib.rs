//! # kiro-core
//!
//! Core types and errors for the Kiro scripted chatbot: [`Topic`], [`Speaker`], [`Message`],
//! the error taxonomy, and tracing initialization. Front-end-agnostic; used by dialogue-engine,
//! transcript-format and kiro-cli.

pub mod error;
pub mod logger;
pub mod types;

pub use error::{DialogueError, KiroError, Result, ScriptError};
pub use logger::init_tracing;
pub use types::{Message, Speaker, Topic};
