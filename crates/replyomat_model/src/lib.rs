use std::collections::HashMap;
use std::fmt::Display;
use std::io;
use std::path::PathBuf;

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Response used when the default pool would otherwise be empty.
pub const FALLBACK_RESPONSE: &str = "Could you elaborate on that?";

/// Trigger word mapped to one canned response. Surrounding whitespace is
/// stripped at construction; lookups go through [`Keyword::normalized`].
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Keyword(String);

impl Keyword {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Lowercase lookup key. Keywords keep their original casing but match
    /// case-insensitively.
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }
}

impl From<String> for Keyword {
    fn from(value: String) -> Self {
        Keyword(value.trim().to_string())
    }
}

impl From<&str> for Keyword {
    fn from(value: &str) -> Self {
        Keyword(value.trim().to_string())
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResponseEntry {
    pub keyword: Keyword,
    pub body: String,
}

/// Keyword to canned-response mapping. Built once at load time, read-only
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseTable {
    entries: HashMap<String, ResponseEntry>,
}

impl ResponseTable {
    pub fn new(entries: impl IntoIterator<Item = ResponseEntry>) -> Self {
        let mut table = ResponseTable::default();
        for entry in entries {
            table.insert(entry);
        }
        table
    }

    /// Last write wins on duplicate keywords.
    pub fn insert(&mut self, entry: ResponseEntry) {
        let key = entry.keyword.normalized();
        if let Some(prev) = self.entries.insert(key, entry) {
            warn!("Duplicate keyword {}, previous response discarded", prev.keyword);
        }
    }

    /// Case-insensitive, whitespace-trimmed lookup.
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.entries
            .get(&word.trim().to_lowercase())
            .map(|e| e.body.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keywords(&self) -> impl Iterator<Item = &Keyword> {
        self.entries.values().map(|e| &e.keyword)
    }
}

/// Pool of replies used when no input word matches a keyword. Never empty:
/// constructing one from nothing inserts [`FALLBACK_RESPONSE`].
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultPool {
    responses: Vec<String>,
}

impl DefaultPool {
    pub fn new(responses: Vec<String>) -> Self {
        if responses.is_empty() {
            return DefaultPool {
                responses: vec![FALLBACK_RESPONSE.to_string()],
            };
        }
        DefaultPool { responses }
    }

    pub fn responses(&self) -> &[String] {
        &self.responses
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn contains(&self, response: &str) -> bool {
        self.responses.iter().any(|r| r == response)
    }
}

impl Default for DefaultPool {
    fn default() -> Self {
        DefaultPool::new(Vec::new())
    }
}

/// Failures while acquiring a response resource. Loaders report these as
/// warnings and degrade; they never reach the selector's callers.
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("Unable to open {}", .0.display())]
    NotFound(PathBuf),
    #[error("A problem was encountered reading {}", .0.display())]
    ReadFailure(PathBuf, #[source] io::Error),
}
