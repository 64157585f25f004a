use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::services::{
    AuthService, EventService, PasswordHasher, SeaOrmAuthService, SeaOrmEventService,
};

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Store,

    pub auth_service: Arc<dyn AuthService>,

    pub event_service: Arc<dyn EventService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        Self::with_store(config, store)
    }

    pub fn with_store(config: Config, store: Store) -> anyhow::Result<Self> {
        let hasher = PasswordHasher::new(&config.security)?;

        let auth_service = Arc::new(SeaOrmAuthService::new(
            store.clone(),
            hasher,
            config.security.min_password_length,
        )) as Arc<dyn AuthService>;

        let event_service = Arc::new(SeaOrmEventService::new(store.clone()))
            as Arc<dyn EventService>;

        Ok(Self {
            config: Arc::new(config),
            store,
            auth_service,
            event_service,
        })
    }
}
