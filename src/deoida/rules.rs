use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;

/// Fixed single-token substitution, applied after the dictionary ones.
#[derive(Debug)]
pub struct TranslationRule {
    pattern: Regex,
    replacement: String,
}

impl TranslationRule {
    fn new(token: &str, replacement: &str) -> Self {
        Self {
            pattern: Regex::new(&format!(r"(^|\s){}(\s|$)", regex::escape(token))).unwrap(),
            replacement: format!("${{1}}{replacement}${{2}}"),
        }
    }

    pub fn apply(&self, text: &str) -> String {
        let mut current = text.to_string();
        // A match consumes the whitespace after the token, so a directly
        // following occurrence is only found on the next pass.
        loop {
            match self.pattern.replace_all(&current, self.replacement.as_str()) {
                Cow::Borrowed(_) => return current,
                Cow::Owned(next) => current = next,
            }
        }
    }
}

lazy_static! {
    pub static ref RULES: Vec<TranslationRule> = vec![
        TranslationRule::new("a", "ein"),
        TranslationRule::new("i", "ich"),
        TranslationRule::new("I", "Ich"),
    ];
}

pub fn apply_rules(text: &str) -> String {
    RULES
        .iter()
        .fold(text.to_string(), |current, rule| rule.apply(&current))
}
