//! # dialogue-engine
//!
//! The menu-driven conversation core: an immutable [`Script`] mapping each topic to reply
//! text and the next offered topics, an append-only [`Transcript`] per chat session, and the
//! [`DialogueEngine`] that appends a selection and its scripted reply. No I/O, no timers;
//! every operation is synchronous and runs to completion before the next one is dispatched.
//!
//! ## Modules
//!
//! - [`script`] – ResponseEntry, Greeting, Script (table + closure validation)
//! - [`transcript`] – Transcript (append-only log, monotonic ids)
//! - [`engine`] – DialogueEngine (select_topic / reset)
//! - [`session`] – Session (one open chat widget instance)

pub mod engine;
pub mod script;
pub mod session;
pub mod transcript;

pub use engine::DialogueEngine;
pub use script::{Greeting, ResponseEntry, Script};
pub use session::Session;
pub use transcript::Transcript;
