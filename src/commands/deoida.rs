use std::io::IsTerminal;

use tokio::io::AsyncReadExt;
use tracing::debug;

use crate::{deoida::translate, dictionary::PhraseDictionary, Result};

pub const NOTHING_TO_TRANSLATE: &str = "Nichts zum Übersetzen da :question:";

/// Text passed on the command line, or piped in on stdin when there is none.
pub async fn text_to_translate(args: &[String]) -> Result<String> {
    if !args.is_empty() {
        return Ok(args.join(" "));
    }

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }

    let mut text = String::new();
    tokio::io::stdin().read_to_string(&mut text).await?;
    Ok(text)
}

/// Apply super complex de-oidering.
pub async fn deoida<D>(dictionary: &D, text: &str) -> Result<String>
where
    D: PhraseDictionary + ?Sized,
{
    if text.trim().is_empty() {
        return Ok(NOTHING_TO_TRANSLATE.to_string());
    }

    debug!("Translating {} line(s)", text.lines().count());
    let translation = translate(dictionary, text).await?;

    Ok(format!("🇦🇹 -> 🇩🇪: {translation}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::MemoryDictionary;

    #[tokio::test]
    async fn replies_with_translation() {
        let dictionary: MemoryDictionary = [("oida", "alter")].into_iter().collect();
        let reply = deoida(&dictionary, "Oida i bin do").await.unwrap();
        assert_eq!(reply, "🇦🇹 -> 🇩🇪: alter ich bin do");
    }

    #[tokio::test]
    async fn complains_about_missing_text() {
        let dictionary = MemoryDictionary::new();
        assert_eq!(deoida(&dictionary, "").await.unwrap(), NOTHING_TO_TRANSLATE);
        assert_eq!(deoida(&dictionary, " \n ").await.unwrap(), NOTHING_TO_TRANSLATE);
    }

    #[tokio::test]
    async fn joins_arguments() {
        let args = vec!["der".to_string(), "fesche".to_string(), "bursch".to_string()];
        assert_eq!(text_to_translate(&args).await.unwrap(), "der fesche bursch");
    }
}
