//! Centralized path definitions for quotebook
//!
//! ## Storage Layout
//!
//! ### Home (User-Level)
//!
//! ```text
//! ~/.quotebook/
//! ├── config.toml               # Filter and sync settings
//! └── data/                     # Persistent key-value store
//!     ├── quotes                # Quote collection (JSON array)
//!     └── selectedCategory      # Last selected filter
//! ```
//!
//! ### Session
//!
//! ```text
//! $TMPDIR/quotebook-session-<home>/
//! └── lastQuote                 # Last displayed quote line
//! ```
//!
//! `<home>` is the home path with every non-alphanumeric character
//! replaced by `_`. The session directory lives under the OS temp dir so
//! it is cleared along with the rest of the user's temporary state.

use std::path::{Path, PathBuf};

/// Home directory name
const HOME_DIR: &str = ".quotebook";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Persistent data subdirectory
const DATA_DIR: &str = "data";

/// Session directory prefix under the OS temp dir
const SESSION_DIR_PREFIX: &str = "quotebook-session";

/// Storage key for the quote collection blob
pub const QUOTES_KEY: &str = "quotes";

/// Storage key for the last selected category filter
pub const SELECTED_CATEGORY_KEY: &str = "selectedCategory";

/// Session storage key for the last displayed quote
pub const LAST_QUOTE_KEY: &str = "lastQuote";

/// Default export filename
pub const DEFAULT_EXPORT_FILE: &str = "quotes.json";

/// Get the quotebook home directory.
///
/// Returns `override_dir` when given, else `~/.quotebook/`.
#[must_use]
pub fn home_dir(override_dir: Option<&Path>) -> PathBuf {
    override_dir.map_or_else(
        || dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(HOME_DIR),
        Path::to_path_buf,
    )
}

/// Get the config file path inside a home directory.
#[must_use]
pub fn config_file(home: &Path) -> PathBuf {
    home.join(CONFIG_FILE)
}

/// Get the persistent data directory inside a home directory.
#[must_use]
pub fn data_dir(home: &Path) -> PathBuf {
    home.join(DATA_DIR)
}

/// Get the session directory for a home directory.
///
/// Distinct homes get distinct session directories.
#[must_use]
pub fn session_dir(home: &Path) -> PathBuf {
    let tag: String = home
        .to_string_lossy()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    std::env::temp_dir().join(format!("{SESSION_DIR_PREFIX}-{tag}"))
}
