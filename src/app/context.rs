use std::sync::Arc;

use crate::app::Result;
use crate::config::Config;
use crate::controller::Controller;
use crate::coordinator::Coordinator;
use crate::gateway::{Gateway, HttpGateway};
use crate::normalizer::Normalizer;
use crate::store::CacheStore;

pub struct AppContext {
    pub store: Arc<CacheStore>,
    pub coordinator: Arc<Coordinator>,
    pub controller: Controller,
}

impl AppContext {
    pub fn new(config: &Config) -> Result<Self> {
        let gateway: Arc<dyn Gateway + Send + Sync> = Arc::new(HttpGateway::new(&config.gateway)?);
        Ok(Self::with_gateway(config, gateway))
    }

    /// Build a context around an arbitrary gateway, for tests or alternate
    /// remote sources.
    pub fn with_gateway(config: &Config, gateway: Arc<dyn Gateway + Send + Sync>) -> Self {
        let store = Arc::new(CacheStore::new(config.default_topic.clone()));
        let coordinator = Arc::new(Coordinator::new(
            store.clone(),
            gateway,
            Normalizer::new(),
        ));
        let controller = Controller::new(store.clone(), coordinator.clone());

        Self {
            store,
            coordinator,
            controller,
        }
    }
}
