use crate::types::Topic;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KiroError {
    #[error("Script error: {0}")]
    Script(#[from] ScriptError),

    #[error("Dialogue error: {0}")]
    Dialogue(#[from] DialogueError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Engine-level failures. There is exactly one kind: a topic was selected that
/// has no script entry. The UI only offers topics drawn from the script, so
/// this is a defensive impossible-path error, fatal to the call.
#[derive(Error, Debug)]
pub enum DialogueError {
    #[error("No script entry for topic '{0}'")]
    UnknownTopic(Topic),
}

/// Configuration defects in a script, caught by the startup closure check
/// rather than surfacing mid-conversation.
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Entry '{offered_by}' offers topic '{topic}' which has no script entry")]
    DanglingTopic { offered_by: String, topic: Topic },

    #[error("Script has no entries")]
    EmptyScript,

    #[error("Greeting offers no topics")]
    NoRootTopics,

    #[error("Invalid script file: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, KiroError>;
