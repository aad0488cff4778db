//! Phrase dictionaries the translator looks candidates up in.

use async_trait::async_trait;
use itertools::Itertools;

use crate::Result;

#[cfg(test)]
mod memory;
mod sqlite;

#[cfg(test)]
pub use memory::MemoryDictionary;
pub use sqlite::SqliteDictionary;

/// A stored Austrian phrase and the German text it translates to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseMapping {
    pub source: String,
    pub target: String,
}

#[async_trait]
pub trait PhraseDictionary: Send + Sync {
    /// Case-insensitive exact lookup of a whole phrase.
    ///
    /// Returns `Ok(None)` when the phrase is unknown; errors are reserved for
    /// the backing store failing.
    async fn find_translation(&self, phrase: &str) -> Result<Option<PhraseMapping>>;
}

/// Collapses whitespace runs to a single space and trims the ends.
pub fn normalize_phrase(value: &str) -> String {
    value.split_whitespace().join(" ")
}

/// Key phrases are stored and looked up under.
pub fn lookup_key(phrase: &str) -> String {
    normalize_phrase(phrase).to_lowercase()
}
