use std::path::PathBuf;

use crate::Config;

/// Maps bundled asset filenames to URLs a browser can load.
pub trait AssetResolver: Send + Sync {
    /// `None` when the asset is known to be unavailable.
    fn resolve(&self, name: &str) -> Option<String>;
}

/// Assets served by the site itself under a URL prefix.
#[derive(Clone, Debug)]
pub struct StaticAssets {
    url_prefix: String,
    dir: Option<PathBuf>,
}

impl StaticAssets {
    pub fn new(url_prefix: &str) -> Self {
        Self {
            url_prefix: url_prefix.trim_end_matches('/').to_owned(),
            dir: None,
        }
    }

    /// Checks that assets exist in `dir` before handing out their URLs.
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    pub fn from_config(config: &Config) -> Self {
        let assets = Self::new(&config.paths.assets_url);

        match &config.paths.assets_dir {
            Some(dir) => assets.with_dir(dir),
            None => assets,
        }
    }
}

impl AssetResolver for StaticAssets {
    fn resolve(&self, name: &str) -> Option<String> {
        let name = name.trim_start_matches('/');

        if name.is_empty() || name.split('/').any(|segment| segment == "..") {
            return None;
        }

        if let Some(dir) = &self.dir {
            if !dir.join(name).is_file() {
                tracing::debug!(asset = name, "asset missing on disk");
                return None;
            }
        }

        let encoded = name.split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");

        Some(format!("{}/{}", self.url_prefix, encoded))
    }
}
