use anyhow::{Context, Result, anyhow};
use std::{collections::HashMap, path::PathBuf};
use tokio::fs;

use serde::{Deserialize, Serialize};

/// Defaults for the global arguments, stored under `[profile.<name>]`.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct Profile {
    /// Keycloak base URL
    pub server_url: Option<String>,

    /// Realm to operate on
    pub realm: Option<String>,

    /// Realm to authenticate against
    pub auth_realm: Option<String>,

    /// OAuth 2.0 Client Identifier <https://www.rfc-editor.org/rfc/rfc6749#section-2.2>
    pub client_id: Option<String>,

    /// OAuth 2.0 Client Secret <https://www.rfc-editor.org/rfc/rfc6749#section-2.3.1>
    pub client_secret: Option<String>,

    /// Resource Owner Password Credentials Grant's username
    pub username: Option<String>,

    /// Resource Owner Password Credentials Grant's password
    pub password: Option<String>,

    /// Server serves everything below `/auth`
    pub legacy_wildfly: Option<bool>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub profile: HashMap<String, Profile>,
}

pub struct ConfigFile {
    file_path: PathBuf,
}

impl ConfigFile {
    pub fn new() -> Result<ConfigFile> {
        let mut file_path = home::home_dir().context("Couldn't access $HOME_DIR")?;
        file_path.push(".kcrest/config.toml");

        Ok(ConfigFile { file_path })
    }

    pub fn from(file_path: PathBuf) -> ConfigFile {
        ConfigFile { file_path }
    }

    async fn read(&self) -> Config {
        log::debug!("Reading the config file {}", self.file_path.to_string_lossy());
        let text = fs::read_to_string(&self.file_path)
            .await
            .unwrap_or_default();

        toml::from_str::<Config>(&text).unwrap_or_else(|e| {
            log::warn!(
                "Cannot parse config file {}. Error: {:?}",
                &self.file_path.to_string_lossy(),
                anyhow!(e)
            );

            Config::default()
        })
    }

    pub async fn profile(&self, name: &str) -> Result<Profile> {
        let mut config = self.read().await;

        config
            .profile
            .remove(name)
            .with_context(|| format!("The given profile `{}` doesn't exist", name))
    }
}
