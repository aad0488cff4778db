use anyhow::ensure;

use crate::{
    dictionary::{normalize_phrase, SqliteDictionary},
    Result,
};

/// Add or update an Austrian -> German translation.
pub async fn oida(
    dictionary: &SqliteDictionary,
    added_by: &str,
    austrian: &str,
    german: &str,
    description: Option<&str>,
) -> Result<String> {
    let austrian = normalize_phrase(austrian);
    let german = normalize_phrase(german);
    let description = description
        .map(normalize_phrase)
        .filter(|d| !d.is_empty());

    ensure!(!austrian.is_empty(), "Austrian phrase must not be empty");
    ensure!(!german.is_empty(), "German translation must not be empty");

    dictionary
        .persist_or_update(added_by, &german, &austrian, description.as_deref())
        .await?;

    Ok(format!("Daunkschei, I hab \"{austrian}\" hinzugefügt 🇦🇹"))
}

/// Show what a phrase is stored as.
pub async fn lookup(dictionary: &SqliteDictionary, phrase: &str) -> Result<String> {
    let response = match dictionary.get(phrase).await? {
        Some(translation) => {
            let mut response = format!("{} -> {}", translation.austrian, translation.german);
            if let Some(description) = &translation.description {
                response.push_str(&format!(" ({description})"));
            }
            response.push_str(&format!(", added by {}", translation.added_by));
            response
        }
        None => format!("Kenn i ned: \"{}\"", normalize_phrase(phrase)),
    };

    Ok(response)
}
