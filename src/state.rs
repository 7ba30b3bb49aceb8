use std::sync::Arc;

use crate::auth::TokenService;
use crate::config::AppConfig;
use crate::observability::Observability;
use crate::store::PatientStore;

/// Everything a request handler may touch, owned by the running application
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<PatientStore>,
    pub tokens: TokenService,
    pub observability: Arc<Observability>,
}

impl AppState {
    /// Fresh state with the seeded demo records
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let tokens = TokenService::from_config(&config);
        Self::with_parts(config, PatientStore::seeded(), tokens)
    }

    pub fn with_parts(
        config: AppConfig,
        store: PatientStore,
        tokens: TokenService,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            config: Arc::new(config),
            store: Arc::new(store),
            tokens,
            observability: Arc::new(Observability::new()?),
        })
    }
}
