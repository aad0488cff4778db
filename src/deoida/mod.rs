//! Austrian to German translation ("de-oidering").
//!
//! Every line is split into tokens, and every run of adjacent tokens is looked
//! up in a [`PhraseDictionary`], longest runs first. For
//! `"oida der fesche bursch han recht"` with the entries
//! `"der fesche bursch" -> "holzi"` and `"bursch" -> "junge"` this yields
//! `"oida holzi han recht"`, not `"oida der fesche junge han recht"`.
//!
//! All hits are collected before anything is replaced, and spans already
//! covered by a longer hit are not skipped. A shorter entry that overlaps a
//! longer one is still applied to whatever text the longer replacement left
//! behind.

use futures::future::try_join_all;
use itertools::Itertools;
use regex::{NoExpand, RegexBuilder};
use tracing::debug;

use crate::{
    dictionary::{PhraseDictionary, PhraseMapping},
    Result,
};

mod rules;

use self::rules::apply_rules;

/// Lowercased whitespace-separated tokens of a single line.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_lowercase).collect()
}

/// Every run of adjacent tokens joined by a single space, longest runs first
/// and left to right within the same length.
///
/// For `n` tokens this yields `n * (n + 1) / 2` phrases.
pub fn enumerate_adjacent_tokens(tokens: &[String]) -> impl Iterator<Item = String> + '_ {
    (1..=tokens.len())
        .rev()
        .flat_map(move |window| tokens.windows(window).map(|phrase| phrase.join(" ")))
}

fn replace_phrase(text: &str, mapping: &PhraseMapping) -> Result<String> {
    let pattern = mapping
        .source
        .split_whitespace()
        .map(regex::escape)
        .join(r"\s+");

    if pattern.is_empty() {
        return Ok(text.to_string());
    }

    let re = RegexBuilder::new(&pattern).case_insensitive(true).build()?;
    Ok(re
        .replace_all(text, NoExpand(mapping.target.as_str()))
        .into_owned())
}

/// Translates a single line.
///
/// Lookups run one after another so matches are always applied in the same
/// order.
pub async fn translate_line<D>(dictionary: &D, line: &str) -> Result<String>
where
    D: PhraseDictionary + ?Sized,
{
    let tokens = tokenize(line);
    let mut found = Vec::new();

    for candidate in enumerate_adjacent_tokens(&tokens) {
        if let Some(mapping) = dictionary.find_translation(&candidate).await? {
            debug!("\"{}\" -> \"{}\"", mapping.source, mapping.target);
            found.push(mapping);
        }
    }

    let mut result = line.to_string();
    for mapping in &found {
        result = replace_phrase(&result, mapping)?;
    }

    Ok(apply_rules(&result))
}

/// Translates every line of `text` independently; phrases never span lines.
pub async fn translate<D>(dictionary: &D, text: &str) -> Result<String>
where
    D: PhraseDictionary + ?Sized,
{
    let lines = text
        .split('\n')
        .map(|line| translate_line(dictionary, line.trim()));

    Ok(try_join_all(lines).await?.join("\n"))
}
