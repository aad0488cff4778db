//! In-memory dictionary used by tests.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::{
    dictionary::{lookup_key, normalize_phrase, PhraseDictionary, PhraseMapping},
    Result,
};

#[derive(Debug, Default, Clone)]
pub struct MemoryDictionary {
    entries: HashMap<String, PhraseMapping>,
}

impl MemoryDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, source: &str, target: &str) {
        let source = normalize_phrase(source);
        self.entries.insert(
            lookup_key(&source),
            PhraseMapping {
                source,
                target: target.to_string(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for MemoryDictionary {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        for (source, target) in iter {
            dictionary.insert(source, target);
        }
        dictionary
    }
}

#[async_trait]
impl PhraseDictionary for MemoryDictionary {
    async fn find_translation(&self, phrase: &str) -> Result<Option<PhraseMapping>> {
        Ok(self.entries.get(&lookup_key(phrase)).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_lookup_ignores_case_and_spacing() {
        let dictionary: MemoryDictionary = [("Der Fesche  Bursch", "Holzi")].into_iter().collect();

        let found = dictionary
            .find_translation("der fesche bursch")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.source, "Der Fesche Bursch");
        assert_eq!(found.target, "Holzi");

        assert!(dictionary.find_translation("fesche").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn insert_replaces_existing_phrase() {
        let mut dictionary = MemoryDictionary::new();
        dictionary.insert("oida", "alter");
        dictionary.insert("OIDA", "digga");

        assert_eq!(dictionary.len(), 1);
        let found = dictionary.find_translation("oida").await.unwrap().unwrap();
        assert_eq!(found.target, "digga");
    }
}
