//! Terminal chat loop. Stands in for the site's chat widget: the seed greeting on
//! open, numbered option rows under each bot bubble, and a reset control.
//! Selection is the only input the engine understands.

use anyhow::{Context, Result};
use dialogue_engine::{DialogueEngine, Script, Session};
use kiro_core::{Message, Topic};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::debug;
use transcript_format::{format_message, format_options, render_transcript_text, FOOTER_HINT};

/// Runs the interactive chat until `/quit` or end of input.
///
/// Input forms: an option number (indexes the latest bot message's options), a
/// topic label (any topic the script covers), `/reset`, `/transcript`, `/quit`.
/// A typo is re-prompted; a label that names a topic missing from the script is
/// the engine's defensive failure and aborts the run loudly.
pub fn run(script: Script) -> Result<()> {
    let engine =
        Arc::new(DialogueEngine::new(Arc::new(script)).context("Script failed the closure check")?);
    let bot_name = engine.script().bot_name.clone();
    let tagline = engine.script().tagline.clone();
    let mut session = Session::open(engine);

    println!("{bot_name} - {tagline}");
    println!("Type an option number or label. /reset restarts, /quit leaves.\n");
    print_message(&bot_name, session.latest());
    println!("\n{FOOTER_HINT}");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            "/quit" | "/q" | "/exit" => break,
            "/reset" | "/r" => {
                session.reset();
                print_message(&bot_name, session.latest());
                continue;
            }
            "/transcript" | "/t" => {
                println!("{}", render_transcript_text(&bot_name, session.messages()));
                continue;
            }
            _ => {}
        }

        let topic = match parse_selection(input, &session.latest().offered_topics) {
            Some(topic) => topic,
            None => {
                println!("Unknown option '{input}'. Pick a number or a topic label.");
                continue;
            }
        };
        debug!(input, topic = %topic, "Selection parsed");

        session
            .select(topic)
            .with_context(|| format!("Topic '{topic}' has no script entry"))?;

        let messages = session.messages();
        for message in &messages[messages.len() - 2..] {
            print_message(&bot_name, message);
        }
    }

    println!("Bye!");
    Ok(())
}

/// Maps REPL input to a topic: a 1-based number indexes `offered`, anything else
/// is matched against topic labels.
fn parse_selection(input: &str, offered: &[Topic]) -> Option<Topic> {
    if let Ok(n) = input.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| offered.get(i)).copied();
    }
    Topic::from_label(input)
}

fn print_message(bot_name: &str, message: &Message) {
    println!("{}", format_message(bot_name, message));
    for row in format_options(&message.offered_topics) {
        println!("{row}");
    }
}
