//! Channel log discovery.
//!
//! An export root looks like:
//!
//! ```text
//! export/
//! ├── users.json
//! ├── channels.json
//! ├── general/
//! │   ├── 2023-11-14.json
//! │   └── 2023-11-15.json
//! └── random/
//!     └── 2023-11-14.json
//! ```
//!
//! Every `.json` file below the root is a message log for the channel named
//! by its parent directory, except files whose parent directory has the same
//! base name as the root. That rule is what keeps `users.json` and
//! `channels.json` out of the aggregation.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::config::ReportConfig;
use crate::error::Result;

/// A message log together with the channel it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelFile {
    /// Channel name (base name of the parent directory)
    pub channel: String,
    /// Path to the log file
    pub path: PathBuf,
}

/// Returns the last element of `path`, the way a shell `basename` would.
///
/// Trailing separators are ignored, `.` and `..` are returned as-is, an
/// empty path yields `.` and the filesystem root yields `/`.
///
/// ```rust
/// use slackstats::walker::base_name;
/// use std::path::Path;
///
/// assert_eq!(base_name(Path::new("exports/acme/")), "acme");
/// assert_eq!(base_name(Path::new(".")), ".");
/// assert_eq!(base_name(Path::new("")), ".");
/// ```
pub fn base_name(path: &Path) -> String {
    match path.components().next_back() {
        Some(Component::Normal(name)) => name.to_string_lossy().into_owned(),
        Some(Component::ParentDir) => "..".to_string(),
        Some(Component::RootDir) => "/".to_string(),
        Some(Component::Prefix(prefix)) => prefix.as_os_str().to_string_lossy().into_owned(),
        Some(Component::CurDir) | None => ".".to_string(),
    }
}

/// Lazily walks `root` and yields every channel log below it.
///
/// Files are visited in file-name order inside each directory. Symlinked
/// directories are not descended into, but a symlink named like a log is
/// yielded and read through. The first traversal error is yielded as `Err`
/// and callers are expected to stop there.
pub fn channel_files<'a>(
    root: &'a Path,
    config: &'a ReportConfig,
) -> impl Iterator<Item = Result<ChannelFile>> + 'a {
    let root_name = base_name(root);

    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |entry| {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => return Some(Err(e.into())),
            };

            let file_type = entry.file_type();
            if !(file_type.is_file() || file_type.is_symlink())
                || entry.path().extension() != Some(OsStr::new(&config.message_extension))
            {
                return None;
            }

            let parent = entry.path().parent().unwrap_or_else(|| Path::new(""));
            let channel = base_name(parent);
            if channel == root_name {
                return None;
            }

            Some(Ok(ChannelFile {
                channel,
                path: entry.into_path(),
            }))
        })
}

/// Collects all channel logs below `root`, failing on the first walk error.
pub fn find_channel_files(root: &Path, config: &ReportConfig) -> Result<Vec<ChannelFile>> {
    channel_files(root, config).collect()
}
