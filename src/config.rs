use serde::Deserialize;
use std::{fs, io::ErrorKind, path::Path};

use crate::error::{Error, Result};

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 3001,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub owner: String,
    pub headline: String,
    pub linkedin: Option<String>,
    pub social: Vec<SocialLink>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: "Portfolio".to_owned(),
            headline: String::new(),
            linkedin: None,
            social: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub static_dir: Option<String>,
    // When set, assets missing on disk render as placeholders
    pub assets_dir: Option<String>,
    pub assets_url: String,
    // Overrides the bundled case study collection
    pub data_path: Option<String>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            static_dir: None,
            assets_dir: None,
            assets_url: "/assets".to_owned(),
            data_path: None,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub paths: PathsConfig,
}

impl Config {
    /// Reads the TOML config at `filepath`, falling back to defaults when
    /// the file does not exist.
    pub fn load(filepath: impl AsRef<Path>) -> Result<Config> {
        let path = filepath.as_ref();

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "config not found, using defaults");
                return Ok(Config::default());
            }
            Err(source) => return Err(Error::Read { path: path.to_owned(), source }),
        };

        Config::parse(&contents).map_err(|source| Error::Config { path: path.to_owned(), source })
    }

    pub fn parse(contents: &str) -> Result<Config, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.server.host.clone(), self.server.port)
    }
}
