//! Output formatting for human and JSON modes
//!
//! [`ConsolePresenter`] is the terminal implementation of the
//! presentation port. It renders either human-readable text or
//! machine-parseable JSON.

use serde::Serialize;

use crate::core::models::{CategoryOption, Quote};
use crate::core::ports::Presenter;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// A successful result
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}

/// Presenter writing to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsolePresenter {
    mode: OutputMode,
}

impl ConsolePresenter {
    /// Create a presenter for the given mode
    #[must_use]
    pub const fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl Presenter for ConsolePresenter {
    fn quote(&self, quote: &Quote) {
        match self.mode {
            OutputMode::Human => println!("{quote}"),
            OutputMode::Json => print_json(quote),
        }
    }

    fn no_quotes(&self) {
        match self.mode {
            OutputMode::Human => println!("No quotes available for this category."),
            OutputMode::Json => print_json(&serde_json::Value::Null),
        }
    }

    fn quote_list(&self, quotes: &[Quote]) {
        match self.mode {
            OutputMode::Human => {
                if quotes.is_empty() {
                    println!("No quotes available for this category.");
                }
                for quote in quotes {
                    println!("{quote}");
                }
            },
            OutputMode::Json => print_json(&quotes),
        }
    }

    fn category_options(&self, options: &[CategoryOption]) {
        match self.mode {
            OutputMode::Human => {
                for option in options {
                    let marker = if option.selected { "*" } else { " " };
                    println!("{marker} {}", option.label);
                }
            },
            OutputMode::Json => print_json(&options),
        }
    }

    fn notify(&self, message: &str) {
        OperationResult::ok(message).render(self.mode);
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
