//! Command implementations

mod add;
mod browse;
mod init;
mod sync;
mod transfer;

use std::path::PathBuf;

use quotebook::QuoteBook;
use quotebook::adapters::FileKeyValueStore;
use quotebook::config::Config;
use quotebook::output::{ConsolePresenter, OutputMode};
use quotebook::paths;

pub use add::add;
pub use browse::{categories, filter, last, list, random};
pub use init::init;
pub use sync::{sync, watch};
pub use transfer::{export, import};

/// Everything a command needs from the command line and config
#[derive(Debug)]
pub struct Context {
    /// quotebook home directory
    pub home: PathBuf,
    /// Loaded configuration
    pub config: Config,
    /// Output mode
    pub mode: OutputMode,
    /// Whether remote calls are disabled for this run
    pub offline: bool,
}

impl Context {
    /// Bundle the global CLI state
    pub const fn new(home: PathBuf, config: Config, mode: OutputMode, offline: bool) -> Self {
        Self {
            home,
            config,
            mode,
            offline,
        }
    }

    /// Open the quote book from the home and session directories
    pub fn open_book(&self) -> anyhow::Result<QuoteBook> {
        QuoteBook::open(
            Box::new(FileKeyValueStore::new(paths::data_dir(&self.home))),
            Box::new(FileKeyValueStore::new(paths::session_dir(&self.home))),
            self.config.matching(),
        )
    }

    /// The presenter for this run
    pub const fn presenter(&self) -> ConsolePresenter {
        ConsolePresenter::new(self.mode)
    }

    /// Whether remote calls may be made
    pub const fn remote_enabled(&self) -> bool {
        !self.offline && self.config.sync.enabled
    }
}
