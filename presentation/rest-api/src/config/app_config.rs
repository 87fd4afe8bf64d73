use super::{
    cors_config, pool_config::PoolConfig, server_config::ServerConfig,
    spoonacular_config::SpoonacularConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub spoonacular: SpoonacularConfig,
    pub pool: PoolConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            spoonacular: SpoonacularConfig::from_env(),
            pool: PoolConfig::from_env(),
        }
    }
}
