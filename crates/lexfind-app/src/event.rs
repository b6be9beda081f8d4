//! Semantic search events, and the mapping from terminal input lines to them.
//!
//! The service loop only ever sees [`SearchEvent`]; input parsing stays here.
//!
//! | Input line          | Command                       |
//! |---------------------|-------------------------------|
//! | `:quit`, `:q`       | `Quit`                        |
//! | `:cancel`, `:c`     | `Cancel`                      |
//! | `:backend <name>`   | `Backend(name)`               |
//! | `:dictate <words>`  | `Dictate(words)`              |
//! | blank line          | ignored                       |
//! | anything else       | `Query(text)`                 |

use crate::dictation::CaptureError;
use lexfind_core::config::Backend;

/// Events consumed by [`crate::service::SearchService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// Typed query text.
    Submit(String),
    /// Result of a dictation session; a transcript is submitted like typed text.
    Dictated(Result<String, CaptureError>),
    /// A dictation session began capturing audio.
    RecordingStarted,
    /// Clear results and return to idle.
    Cancel,
    /// Route later submissions to another tagging backend.
    SwitchBackend(Backend),
}

/// A parsed terminal input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Cancel,
    Backend(Backend),
    Dictate(String),
    Query(String),
}

/// Why an input line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command :{0}")]
    Unknown(String),
    #[error("{0}")]
    Backend(String),
}

/// Parse one input line. `Ok(None)` for blank input.
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let Some(rest) = line.strip_prefix(':') else {
        return Ok(Some(Command::Query(line.to_string())));
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };
    let command = match name {
        "q" | "quit" => Command::Quit,
        "c" | "cancel" => Command::Cancel,
        "backend" => Command::Backend(arg.parse().map_err(CommandError::Backend)?),
        "dictate" => Command::Dictate(arg.to_string()),
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}
