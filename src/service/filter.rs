//! # Search Filter
//!
//! Decides which store query a search runs. With both parameters absent
//! the search is a full listing; with at least one present the filtered
//! query runs with the absent parameter as an empty string, which matches
//! everything under substring semantics.

/// Optional color/make substring filters from the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub color: Option<String>,
    pub make: Option<String>,
}

impl SearchFilter {
    pub fn new(color: Option<String>, make: Option<String>) -> Self {
        Self { color, make }
    }

    /// True when neither parameter was supplied.
    pub fn is_unfiltered(&self) -> bool {
        self.color.is_none() && self.make.is_none()
    }

    /// Color term for the filtered query; empty string when absent.
    pub fn color_term(&self) -> &str {
        self.color.as_deref().unwrap_or("")
    }

    /// Make term for the filtered query; empty string when absent.
    pub fn make_term(&self) -> &str {
        self.make.as_deref().unwrap_or("")
    }
}
