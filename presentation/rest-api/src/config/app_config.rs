use super::{
    checkout_config::CheckoutConfig, cors_config, server_config::ServerConfig,
    storage_config::StorageConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub checkout: CheckoutConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            checkout: CheckoutConfig::from_env()?,
            storage: StorageConfig::from_env(),
        })
    }
}
