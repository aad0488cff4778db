use anyhow::Context as _;
use async_trait::async_trait;
use diesel::prelude::*;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use tracing::{debug, info};

use crate::{
    db::Conn,
    dictionary::{lookup_key, normalize_phrase, PhraseDictionary, PhraseMapping},
    models::{AustrianTranslation, AustrianTranslationUpdate, NewAustrianTranslation},
    Result,
};

#[derive(Debug, Clone)]
pub struct SqliteDictionary {
    db: Conn,
}

impl SqliteDictionary {
    pub fn new(db: Conn) -> Self {
        Self { db }
    }

    /// Runs a blocking diesel query off the async runtime.
    async fn run<T, F>(&self, query: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
    {
        let db = self.db.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = db.get().context("Couldn't get a database connection")?;
            query(&mut *conn)
        })
        .await
        .context("Database task panicked")?
    }

    pub async fn get(&self, phrase: &str) -> Result<Option<AustrianTranslation>> {
        use crate::schema::austrian_translations::dsl;

        let key = lookup_key(phrase);
        self.run(move |conn| {
            let found = dsl::austrian_translations
                .filter(dsl::lookup_key.eq(&key))
                .first::<AustrianTranslation>(conn)
                .optional()?;
            Ok(found)
        })
        .await
    }

    /// Inserts a translation, or updates the one already stored for the same
    /// phrase (compared case-insensitively).
    pub async fn persist_or_update(
        &self,
        added_by: &str,
        german: &str,
        austrian: &str,
        description: Option<&str>,
    ) -> Result<AustrianTranslation> {
        use crate::schema::austrian_translations::dsl;

        let added_by = added_by.to_string();
        let german = german.to_string();
        let austrian = normalize_phrase(austrian);
        let description = description.map(str::to_string);
        let now = OffsetDateTime::now_utc().format(&Rfc3339)?;

        self.run(move |conn| {
            let key = lookup_key(&austrian);

            let saved = conn.transaction::<_, diesel::result::Error, _>(|conn| {
                let existing = dsl::austrian_translations
                    .filter(dsl::lookup_key.eq(&key))
                    .first::<AustrianTranslation>(conn)
                    .optional()?;

                match existing {
                    Some(row) => {
                        debug!("Updating translation {} ({})", row.id, row.austrian);
                        diesel::update(dsl::austrian_translations.find(row.id))
                            .set(&AustrianTranslationUpdate {
                                austrian: &austrian,
                                german: &german,
                                description: description.as_deref(),
                                added_by: &added_by,
                                updated_at: &now,
                            })
                            .get_result::<AustrianTranslation>(conn)
                    }
                    None => diesel::insert_into(dsl::austrian_translations)
                        .values(&NewAustrianTranslation {
                            austrian: &austrian,
                            lookup_key: &key,
                            german: &german,
                            description: description.as_deref(),
                            added_by: &added_by,
                            created_at: &now,
                            updated_at: &now,
                        })
                        .get_result::<AustrianTranslation>(conn),
                }
            })?;

            info!(
                "{} saved translation \"{}\" -> \"{}\"",
                saved.added_by, saved.austrian, saved.german
            );
            Ok(saved)
        })
        .await
    }
}

#[async_trait]
impl PhraseDictionary for SqliteDictionary {
    async fn find_translation(&self, phrase: &str) -> Result<Option<PhraseMapping>> {
        Ok(self.get(phrase).await?.map(|row| PhraseMapping {
            source: row.austrian,
            target: row.german,
        }))
    }
}
