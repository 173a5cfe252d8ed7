use crate::{
    abstract_trait::{DynHashing, DynJwtService},
    config::{Config, ConnectionPool, Hashing, JwtConfig},
    di::{DependenciesInject, DependenciesInjectDeps},
};
use anyhow::Result;
use std::fmt;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub jwt_config: DynJwtService,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("jwt_config", &"<dyn JwtService>")
            .finish()
    }
}

impl AppState {
    pub fn new(pool: ConnectionPool, config: &Config) -> Result<Self> {
        let jwt_config = std::sync::Arc::new(JwtConfig::new(&config.jwt_secret)) as DynJwtService;
        let hashing = std::sync::Arc::new(Hashing::new()) as DynHashing;

        let deps = DependenciesInjectDeps {
            pool,
            hash: hashing,
            jwt_config: jwt_config.clone(),
            base_url: config.app_url.clone(),
        };

        let di_container = DependenciesInject::new(deps);

        Ok(Self {
            di_container,
            jwt_config,
        })
    }
}
