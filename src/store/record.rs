//! The boilerplate record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A named, stored piece of text that may contain reference tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boilerplate {
    /// Unique name.
    pub name: String,
    /// Raw body, tokens unexpanded.
    pub body: String,
    /// Number of times this boilerplate was expanded as the top-level target.
    #[serde(default)]
    pub usage_count: u64,
    /// When it was last expanded as the top-level target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used: Option<DateTime<Utc>>,
}

impl Boilerplate {
    /// Create a never-used boilerplate.
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
            usage_count: 0,
            last_used: None,
        }
    }

    /// Record one top-level expansion.
    pub fn record_use(&mut self) {
        self.usage_count += 1;
        self.last_used = Some(Utc::now());
    }

    /// Listing order: most used first, then most recently used, then by name.
    pub fn by_popularity(a: &Self, b: &Self) -> Ordering {
        b.usage_count
            .cmp(&a.usage_count)
            .then_with(|| b.last_used.cmp(&a.last_used))
            .then_with(|| a.name.cmp(&b.name))
    }
}
