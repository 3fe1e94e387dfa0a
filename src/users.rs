//! User directory loading.
//!
//! A workspace export carries one `users.json` at its root: a JSON array of
//! user objects. Only the fields the report needs are kept.
//!
//! # Example
//!
//! ```rust
//! use slackstats::users::UserDirectory;
//!
//! let users = UserDirectory::from_json_str(
//!     r#"[{"id": "U1", "profile": {"display_name": "Alice"}, "is_restricted": false, "deleted": false}]"#,
//! )?;
//!
//! assert_eq!(users.len(), 1);
//! assert_eq!(users.get("U1").unwrap().display_name, "Alice");
//! # Ok::<(), slackstats::StatsError>(())
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, StatsError};

/// Raw user object as it appears in `users.json`.
///
/// Absent or `null` fields fall back to their zero values. Account names
/// and every other field are ignored.
#[derive(Debug, Deserialize)]
pub struct RawUser {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub profile: Option<RawProfile>,
    #[serde(default)]
    pub is_restricted: Option<bool>,
    #[serde(default)]
    pub deleted: Option<bool>,
}

/// Nested `profile` object of a raw user.
#[derive(Debug, Default, Deserialize)]
pub struct RawProfile {
    #[serde(default)]
    pub display_name: Option<String>,
}

/// A workspace member, reduced to what the report needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique user identifier (e.g. `U024BE7LH`)
    pub id: String,
    /// `profile.display_name`, verbatim
    pub display_name: String,
    /// Restricted (guest) account
    pub is_restricted: bool,
    /// Deactivated account
    pub deleted: bool,
}

impl From<RawUser> for User {
    fn from(raw: RawUser) -> Self {
        Self {
            id: raw.id,
            display_name: raw
                .profile
                .and_then(|p| p.display_name)
                .unwrap_or_default(),
            is_restricted: raw.is_restricted.unwrap_or(false),
            deleted: raw.deleted.unwrap_or(false),
        }
    }
}

/// Lookup table from user identifier to [`User`].
///
/// Loaded once per run and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: HashMap<String, User>,
}

impl UserDirectory {
    /// Reads and parses a user directory file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| StatsError::io_at(e, path))?;
        let raw: Vec<RawUser> = serde_json::from_str(&content)
            .map_err(|e| StatsError::users_parse(e, Some(path.to_path_buf())))?;
        Ok(Self::from_raw(raw))
    }

    /// Parses a user directory from a JSON string.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let raw: Vec<RawUser> =
            serde_json::from_str(content).map_err(|e| StatsError::users_parse(e, None))?;
        Ok(Self::from_raw(raw))
    }

    /// Builds the lookup table. A repeated identifier keeps the last entry.
    fn from_raw(raw: Vec<RawUser>) -> Self {
        let users = raw
            .into_iter()
            .map(User::from)
            .map(|user| (user.id.clone(), user))
            .collect();
        Self { users }
    }

    /// Looks up a user by identifier.
    pub fn get(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.users.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }
}

impl FromIterator<User> for UserDirectory {
    fn from_iter<I: IntoIterator<Item = User>>(iter: I) -> Self {
        let users = iter
            .into_iter()
            .map(|user| (user.id.clone(), user))
            .collect();
        Self { users }
    }
}
