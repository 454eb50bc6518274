//! The response script: immutable configuration mapping each topic to its reply
//! text and the topics offered next. Built once at startup and shared by reference;
//! conversations never modify it.

use kiro_core::{KiroError, Result, ScriptError, Topic};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Reply for one topic: the bot text plus the topics offered under it, in button order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEntry {
    pub text: String,
    pub next_topics: Vec<Topic>,
}

/// The seed message content: greeting text and the root topic set offered on open.
/// Not a table entry; the widget inlines it in its initial state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub text: String,
    pub root_topics: Vec<Topic>,
}

/// Full script: bot identity, greeting, and the topic → response table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    pub bot_name: String,
    pub tagline: String,
    pub greeting: Greeting,
    entries: HashMap<Topic, ResponseEntry>,
}

impl Script {
    /// The built-in Kiro script: the Fubotics site assistant's seven topics.
    pub fn builtin() -> Self {
        let mut entries = HashMap::new();
        entries.insert(
            Topic::Services,
            ResponseEntry {
                text: "We offer:\n• Facade Cleaning Robots\n• Duct Cleaning Services"
                    .to_string(),
                next_topics: vec![Topic::FacadeDetails, Topic::DuctDetails, Topic::Menu],
            },
        );
        entries.insert(
            Topic::FacadeDetails,
            ResponseEntry {
                text: "AI-powered robots for safe building cleaning. Autonomous navigation for high-rises."
                    .to_string(),
                next_topics: vec![Topic::Contact, Topic::Menu],
            },
        );
        entries.insert(
            Topic::DuctDetails,
            ResponseEntry {
                text: "Automated duct inspection for better air quality. Real-time monitoring."
                    .to_string(),
                next_topics: vec![Topic::Contact, Topic::Menu],
            },
        );
        entries.insert(
            Topic::AboutUs,
            ResponseEntry {
                text: "Fubotics builds intelligent robots to keep people safe and cities clean."
                    .to_string(),
                next_topics: vec![Topic::Services, Topic::Contact, Topic::Menu],
            },
        );
        entries.insert(
            Topic::Contact,
            ResponseEntry {
                text: "Email: hello@fubotics.com\nPhone: +91 xxxxx xxxxx\nLocation: Bengaluru"
                    .to_string(),
                next_topics: vec![Topic::Services, Topic::Menu],
            },
        );
        entries.insert(
            Topic::Pricing,
            ResponseEntry {
                text: "Custom pricing based on your needs. Contact us for a quote!".to_string(),
                next_topics: vec![Topic::Contact, Topic::Menu],
            },
        );
        entries.insert(
            Topic::Menu,
            ResponseEntry {
                text: "What else can I help with?".to_string(),
                next_topics: vec![
                    Topic::Services,
                    Topic::AboutUs,
                    Topic::Contact,
                    Topic::Pricing,
                ],
            },
        );

        Self {
            bot_name: "Kiro".to_string(),
            tagline: "Your Fubotics Assistant".to_string(),
            greeting: Greeting {
                text: "Hi! I'm Kiro. How can I help?".to_string(),
                root_topics: vec![
                    Topic::Services,
                    Topic::AboutUs,
                    Topic::Contact,
                    Topic::Pricing,
                ],
            },
            entries,
        }
    }

    /// Loads a script from a JSON file. Unknown topic labels fail deserialization;
    /// closure of the table is checked separately by [`Script::validate`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let script: Script = serde_json::from_str(&raw)
            .map_err(|e| KiroError::Script(ScriptError::Parse(e.to_string())))?;
        Ok(script)
    }

    /// Looks up the response entry for a topic.
    pub fn entry(&self, topic: Topic) -> Option<&ResponseEntry> {
        self.entries.get(&topic)
    }

    /// Topics that have a table entry, in display order.
    pub fn topics(&self) -> impl Iterator<Item = Topic> + '_ {
        Topic::ALL
            .iter()
            .copied()
            .filter(|t| self.entries.contains_key(t))
    }

    /// Startup closure check: every topic offered anywhere (greeting or a
    /// `next_topics` list) must have a table entry, the greeting must offer at
    /// least one topic, and the table must be non-empty. A failure is a
    /// configuration defect, reported before any conversation starts.
    pub fn validate(&self) -> std::result::Result<(), ScriptError> {
        if self.entries.is_empty() {
            return Err(ScriptError::EmptyScript);
        }
        if self.greeting.root_topics.is_empty() {
            return Err(ScriptError::NoRootTopics);
        }
        for &topic in &self.greeting.root_topics {
            if !self.entries.contains_key(&topic) {
                return Err(ScriptError::DanglingTopic {
                    offered_by: "greeting".to_string(),
                    topic,
                });
            }
        }
        for (&from, entry) in &self.entries {
            for &topic in &entry.next_topics {
                if !self.entries.contains_key(&topic) {
                    return Err(ScriptError::DanglingTopic {
                        offered_by: from.label().to_string(),
                        topic,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_script_is_closed() {
        assert!(Script::builtin().validate().is_ok());
    }

    #[test]
    fn test_builtin_has_an_entry_for_every_topic() {
        let script = Script::builtin();
        for topic in Topic::ALL {
            assert!(script.entry(topic).is_some(), "missing entry for {topic}");
        }
    }

    #[test]
    fn test_menu_points_back_to_the_root_set() {
        let script = Script::builtin();
        let menu = script.entry(Topic::Menu).unwrap();
        assert_eq!(menu.next_topics, script.greeting.root_topics);
    }
}
