use dotenvy::dotenv;

mod api {
    pub mod error;
    pub mod tags;
    pub mod health {
        pub mod routes;
    }
    pub mod pools {
        pub mod dto;
        pub mod routes;
    }
    pub mod preferences {
        pub mod dto;
    }
    pub mod recipes {
        pub mod dto;
    }
    pub mod spin {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
}
mod config {
    pub mod app_config;
    pub mod cors_config;
    pub mod pool_config;
    pub mod server_config;
    pub mod spoonacular_config;
}
mod setup {
    pub mod dependency_injection;
    pub mod server;
}

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// - config/: environment configuration (server, CORS, Spoonacular, pool)
/// - setup/: dependency injection and server setup
/// - api/: route handlers and DTOs
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env();
    if config.spoonacular.api_key.is_none() {
        tracing::warn!("SPOONACULAR_API_KEY not set, serving fixture recipes only");
    }

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config.spoonacular, &config.pool);

    // 5. Run server
    Server::run(config, container).await?;

    Ok(())
}
