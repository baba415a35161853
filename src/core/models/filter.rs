//! Category filter model
//!
//! A filter is either the `all` sentinel or one category label. How a
//! label compares against a quote's category is decided by
//! [`CategoryMatching`], which is a configuration choice.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel filter value meaning "no restriction"
pub const ALL_CATEGORIES: &str = "all";

/// The active category filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No restriction
    #[default]
    All,
    /// Only quotes in this category
    Category(String),
}

impl CategoryFilter {
    /// Parse a filter value, treating `"all"` as the sentinel
    ///
    /// Blank input also means `all`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Category(value.to_string())
        }
    }

    /// Whether this is the `all` sentinel
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Whether a quote category passes this filter
    #[must_use]
    pub fn accepts(&self, category: &str, matching: CategoryMatching) -> bool {
        match self {
            Self::All => true,
            Self::Category(wanted) => matching.matches(wanted, category),
        }
    }

    /// The raw value as persisted and rendered
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Category(c) => c,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

/// How a category filter compares against quote categories
///
/// One iteration of the page script compared categories ignoring case,
/// the others compared exactly. Exact is the default; the other mode is
/// opt-in through configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryMatching {
    /// Case-sensitive exact comparison
    #[default]
    Exact,
    /// Comparison ignoring case
    IgnoreCase,
}

impl CategoryMatching {
    /// Build from a `case_sensitive` flag
    #[must_use]
    pub const fn from_case_sensitive(case_sensitive: bool) -> Self {
        if case_sensitive {
            Self::Exact
        } else {
            Self::IgnoreCase
        }
    }

    /// Compare two category labels
    #[must_use]
    pub fn matches(self, a: &str, b: &str) -> bool {
        match self {
            Self::Exact => a == b,
            Self::IgnoreCase => a.to_lowercase() == b.to_lowercase(),
        }
    }
}

/// One entry of a rendered category picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    /// Option value (`all` or a category label)
    pub value: String,
    /// Label shown to the user
    pub label: String,
    /// Whether this option is the active filter
    pub selected: bool,
}
