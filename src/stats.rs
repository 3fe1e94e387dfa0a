//! Engagement aggregation.
//!
//! Messages are folded into a three-level table, channel → day → user, with
//! one [`Stats`] record per bucket. Records are created the first time a
//! user shows up in a bucket, either as an author or as a reactor, and only
//! ever grow afterwards.
//!
//! For every reaction event on a message, the **author** is credited with a
//! "given" reaction (and the reactor is added to the author's given-to set),
//! while the **reactor** is credited with a "received" reaction (and the
//! author is added to the reactor's received-from set). Reacting to your own
//! message bumps both of your own counters.
//!
//! # Example
//!
//! ```rust
//! use slackstats::message::{Message, Reaction};
//! use slackstats::stats::StatsTable;
//! use slackstats::users::UserDirectory;
//!
//! let users = UserDirectory::from_json_str(
//!     r#"[{"id": "U1", "profile": {"display_name": "Alice"}},
//!         {"id": "U2", "profile": {"display_name": "Bob"}}]"#,
//! )?;
//! let messages = vec![
//!     Message::new("U1", "1700000000").with_reaction(Reaction::new("tada", ["U2"])),
//! ];
//!
//! let mut table = StatsTable::new();
//! table.update("general", &messages, &users)?;
//!
//! let alice = table.get("general", "2023-11-14", "U1").unwrap();
//! assert_eq!(alice.posts, 1);
//! assert_eq!(alice.given_reactions, 1);
//! # Ok::<(), slackstats::StatsError>(())
//! ```

use std::collections::{BTreeMap, HashSet};

use chrono::DateTime;

use crate::error::{Result, StatsError};
use crate::message::Message;
use crate::users::{User, UserDirectory};

/// Format of the day key in the table and in the report.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Engagement counters for one user in one channel on one day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    pub user_id: String,
    /// Account name column; the user directory keeps no account names, so
    /// this is always empty
    pub name: String,
    /// Display name with commas replaced by spaces
    pub display_name: String,
    pub is_restricted: bool,
    pub deleted: bool,

    /// Messages authored
    pub posts: u64,
    /// Reaction events on this user's messages
    pub given_reactions: u64,
    /// Distinct users behind `given_reactions`
    pub given_reaction_users: HashSet<String>,
    /// Reaction events this user applied to messages
    pub received_reactions: u64,
    /// Distinct authors behind `received_reactions`
    pub received_reaction_users: HashSet<String>,
}

impl Stats {
    /// Creates an empty record for `user` with an empty `name`.
    pub fn for_user(user: &User) -> Self {
        Self {
            user_id: user.id.clone(),
            display_name: user.display_name.replace(',', " "),
            is_restricted: user.is_restricted,
            deleted: user.deleted,
            ..Self::default()
        }
    }

    pub fn given_reaction_user_count(&self) -> usize {
        self.given_reaction_users.len()
    }

    pub fn received_reaction_user_count(&self) -> usize {
        self.received_reaction_users.len()
    }
}

/// Stats keyed by user id.
pub type StatsByUser = BTreeMap<String, Stats>;
/// Per-user stats keyed by day (`YYYY-MM-DD`).
pub type StatsByDay = BTreeMap<String, StatsByUser>;
/// Per-day stats keyed by channel name.
pub type StatsByChannel = BTreeMap<String, StatsByDay>;

/// What [`StatsTable::update`] did with the messages it was given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateCounts {
    /// Messages credited to an author
    pub counted: usize,
    /// Messages without a timestamp
    pub skipped_empty_timestamp: usize,
    /// Messages whose author is not in the user directory
    pub skipped_unknown_author: usize,
    /// Reaction events whose reactor is not in the user directory
    pub skipped_unknown_reactor: usize,
}

impl UpdateCounts {
    /// Adds `other` into `self`.
    pub fn merge(&mut self, other: UpdateCounts) {
        self.counted += other.counted;
        self.skipped_empty_timestamp += other.skipped_empty_timestamp;
        self.skipped_unknown_author += other.skipped_unknown_author;
        self.skipped_unknown_reactor += other.skipped_unknown_reactor;
    }
}

/// Converts a `ts` field into its UTC day key.
///
/// The value is read as floating-point seconds since the epoch and
/// truncated toward zero. Non-numeric, non-finite and out-of-range values
/// are rejected.
///
/// ```rust
/// use slackstats::stats::day_of;
///
/// assert_eq!(day_of("1700000000.000200", "general").unwrap(), "2023-11-14");
/// assert!(day_of("not-a-number", "general").is_err());
/// ```
pub fn day_of(ts: &str, channel: &str) -> Result<String> {
    let seconds: f64 = ts
        .parse()
        .map_err(|_| StatsError::invalid_timestamp(ts, channel))?;
    if !seconds.is_finite() {
        return Err(StatsError::invalid_timestamp(ts, channel));
    }

    DateTime::from_timestamp(seconds.trunc() as i64, 0)
        .map(|dt| dt.format(DAY_FORMAT).to_string())
        .ok_or_else(|| StatsError::invalid_timestamp(ts, channel))
}

/// The channel → day → user aggregation table.
///
/// Backed by ordered maps, so iteration (and therefore report row order)
/// is channel name, then day, then user id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsTable {
    channels: StatsByChannel,
}

impl StatsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one channel log into the table.
    ///
    /// Messages with an empty `ts` are skipped, as are authors and reactors
    /// missing from `users`. A non-empty `ts` that does not parse stops the
    /// update and returns [`StatsError::InvalidTimestamp`]; messages before
    /// it have already been applied.
    pub fn update(
        &mut self,
        channel: &str,
        messages: &[Message],
        users: &UserDirectory,
    ) -> Result<UpdateCounts> {
        let mut counts = UpdateCounts::default();
        let by_day = self.channels.entry(channel.to_string()).or_default();

        for message in messages {
            if message.ts.is_empty() {
                counts.skipped_empty_timestamp += 1;
                continue;
            }

            let day = day_of(&message.ts, channel)?;
            let bucket = by_day.entry(day).or_default();

            let Some(author) = users.get(&message.user) else {
                counts.skipped_unknown_author += 1;
                continue;
            };
            entry_for(bucket, author).posts += 1;
            counts.counted += 1;

            for reactor_id in message.reactors() {
                let Some(reactor) = users.get(reactor_id) else {
                    counts.skipped_unknown_reactor += 1;
                    continue;
                };

                let reactor_stats = entry_for(bucket, reactor);
                reactor_stats.received_reactions += 1;
                reactor_stats
                    .received_reaction_users
                    .insert(author.id.clone());

                let author_stats = entry_for(bucket, author);
                author_stats.given_reactions += 1;
                author_stats.given_reaction_users.insert(reactor.id.clone());
            }
        }

        Ok(counts)
    }

    /// Looks up the record for one bucket.
    pub fn get(&self, channel: &str, day: &str, user_id: &str) -> Option<&Stats> {
        self.channels.get(channel)?.get(day)?.get(user_id)
    }

    /// Iterates `(channel, day, stats)` over every record.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &str, &Stats)> {
        self.channels.iter().flat_map(|(channel, by_day)| {
            by_day.iter().flat_map(move |(day, by_user)| {
                by_user
                    .values()
                    .map(move |stats| (channel.as_str(), day.as_str(), stats))
            })
        })
    }

    /// Channel names seen so far, including channels that produced no rows.
    pub fn channels(&self) -> impl Iterator<Item = &str> {
        self.channels.keys().map(String::as_str)
    }

    /// Number of [`Stats`] records.
    pub fn len(&self) -> usize {
        self.channels
            .values()
            .flat_map(|by_day| by_day.values())
            .map(|by_user| by_user.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read-only access to the nested maps.
    pub fn as_map(&self) -> &StatsByChannel {
        &self.channels
    }
}

/// Get-or-insert the record for `user` in a day bucket.
fn entry_for<'a>(bucket: &'a mut StatsByUser, user: &User) -> &'a mut Stats {
    bucket
        .entry(user.id.clone())
        .or_insert_with(|| Stats::for_user(user))
}
