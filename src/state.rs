use std::{fmt, sync::Arc};

use crate::{
    assets::{AssetResolver, StaticAssets},
    content::CaseStudies,
    error::Result,
    Config,
};

/// Everything a page needs; immutable once the server starts.
#[derive(Clone)]
pub struct State {
    pub config: Arc<Config>,
    pub studies: Arc<CaseStudies>,
    pub assets: Arc<dyn AssetResolver>,
}

impl State {
    pub fn new(config: Config, studies: CaseStudies, assets: impl AssetResolver + 'static) -> Self {
        Self {
            config: Arc::new(config),
            studies: Arc::new(studies),
            assets: Arc::new(assets),
        }
    }

    pub fn load(config: Config) -> Result<Self> {
        let studies = match &config.paths.data_path {
            Some(path) => CaseStudies::load(path)?,
            None => CaseStudies::bundled()?,
        };

        tracing::info!(count = studies.len(), "loaded case studies");

        let assets = StaticAssets::from_config(&config);
        Ok(State::new(config, studies, assets))
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("config", &self.config)
            .field("studies", &self.studies.len())
            .finish_non_exhaustive()
    }
}
