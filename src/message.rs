//! Channel message logs.
//!
//! Each channel directory of an export holds one JSON file per day, every
//! file being an array of message objects:
//!
//! ```json
//! [
//!   {
//!     "user": "U1",
//!     "text": "hi",
//!     "ts": "1700000000.000200",
//!     "reactions": [{"name": "thumbsup", "users": ["U2"], "count": 1}]
//!   }
//! ]
//! ```
//!
//! Only `user`, `reactions` and `ts` feed the report. `text` is decoded but
//! never aggregated.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::error::{Result, StatsError};

/// One message from a channel log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Message {
    /// Author's user identifier. Empty for bot and system messages.
    #[serde(default, deserialize_with = "null_as_default")]
    pub user: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,

    /// Reactions applied to the message, in export order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub reactions: Vec<Reaction>,

    /// Seconds since the Unix epoch as a decimal string (`"1700000000.000200"`).
    #[serde(default, deserialize_with = "null_as_default")]
    pub ts: String,
}

/// A reaction emoji and everyone who applied it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Reaction {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Identifiers of the reacting users.
    #[serde(default, deserialize_with = "null_as_default")]
    pub users: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u64,
}

impl Message {
    /// Creates a message with an author and timestamp and no reactions.
    pub fn new(user: impl Into<String>, ts: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            ts: ts.into(),
            ..Self::default()
        }
    }

    /// Builder-style method to set the text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Builder-style method to append a reaction.
    #[must_use]
    pub fn with_reaction(mut self, reaction: Reaction) -> Self {
        self.reactions.push(reaction);
        self
    }

    /// Every reacting user id across all reactions, repeats included.
    pub fn reactors(&self) -> impl Iterator<Item = &str> {
        self.reactions
            .iter()
            .flat_map(|r| r.users.iter().map(String::as_str))
    }
}

impl Reaction {
    /// Creates a reaction; `count` is set to the number of users.
    pub fn new<I, S>(name: impl Into<String>, users: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let users: Vec<String> = users.into_iter().map(Into::into).collect();
        Self {
            name: name.into(),
            count: users.len() as u64,
            users,
        }
    }
}

/// Treats an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads a message log file.
pub fn parse_messages(path: &Path) -> Result<Vec<Message>> {
    let content = fs::read(path).map_err(|e| StatsError::io_at(e, path))?;
    serde_json::from_slice(&content)
        .map_err(|e| StatsError::messages_parse(e, Some(path.to_path_buf())))
}

/// Parses a message log from a string.
pub fn parse_messages_str(content: &str) -> Result<Vec<Message>> {
    serde_json::from_str(content).map_err(|e| StatsError::messages_parse(e, None))
}
