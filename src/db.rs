use anyhow::{anyhow, Context as _};
use diesel::{
    r2d2::{ConnectionManager, Pool},
    sqlite::SqliteConnection,
};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::info;

use crate::{settings::Database, Result};

pub type Conn = Pool<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub fn connect(settings: &Database) -> Result<Conn> {
    let manager = ConnectionManager::<SqliteConnection>::new(&settings.url);
    let pool = Pool::builder()
        .max_size(settings.max_connections)
        .build(manager)
        .with_context(|| format!("Couldn't connect to database {}", settings.url))?;

    run_migrations(&pool)?;

    Ok(pool)
}

pub fn run_migrations(db: &Conn) -> Result<()> {
    let mut conn = db.get().context("Couldn't get a database connection")?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow!("Couldn't run database migrations: {e}"))?;

    for migration in applied {
        info!("Applied migration {migration}");
    }

    Ok(())
}

#[cfg(test)]
pub fn in_memory() -> Conn {
    // A single connection keeps every checkout on the same in-memory database.
    let pool = Pool::builder()
        .max_size(1)
        .build(ConnectionManager::<SqliteConnection>::new(":memory:"))
        .unwrap();
    run_migrations(&pool).unwrap();
    pool
}
