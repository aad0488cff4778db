use std::{env, path::Path};

use config::{Config, ConfigError, Environment, File};
use glob::glob;
use serde_derive::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize, Clone)]
pub struct Database {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub log_level: String,
    pub database: Database,
}

impl Settings {
    /// Layers `{cwd}/config.*`, `{cwd}/config/*`, an optional extra file and
    /// `DEOIDA__*` environment variables, later sources winning.
    pub fn new(extra: Option<&Path>) -> Result<Self, ConfigError> {
        let cwd = match env::current_dir() {
            Ok(cwd) => cwd.display().to_string(),
            Err(_) => ".".to_string(),
        };

        debug!(
            "Looking for configuration file {cwd}/config and/or configuration files in {cwd}{}",
            "/config/"
        );

        let config_dir = glob(&format!("{cwd}/config/*"))
            .map_err(|e| ConfigError::Message(e.to_string()))?
            .filter_map(std::result::Result::ok)
            .map(File::from)
            .collect::<Vec<_>>();

        let mut builder = Config::builder()
            .set_default("log_level", "info")?
            .set_default("database.url", "deoida.sqlite")?
            .set_default("database.max_connections", 4)?
            .add_source(File::with_name(&format!("{cwd}/config")).required(false))
            .add_source(config_dir);

        if let Some(path) = extra {
            debug!("Adding configuration file {}", path.display());
            builder = builder.add_source(File::from(path));
        }

        builder
            .add_source(Environment::with_prefix("DEOIDA").separator("__"))
            .build()?
            .try_deserialize()
    }
}
