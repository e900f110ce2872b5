use crate::config::{AssetPaths, Config};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub assets: Arc<AssetPaths>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let assets = Arc::new(config.assets());
        Self {
            config: Arc::new(config),
            assets,
        }
    }
}
