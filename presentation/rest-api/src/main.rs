use dotenvy::dotenv;

mod api {
    pub mod error;
    pub mod security;
    pub mod summary;
    pub mod tags;
    pub mod health {
        pub mod routes;
    }
    pub mod basket {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod inflation_report {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod item {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod price_alert {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod shopping_list {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod store {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod user_preferences {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
}
mod config {
    pub mod app_config;
    pub mod auth_config;
    pub mod cors_config;
    pub mod database_config;
    pub mod server_config;
}
mod setup {
    pub mod dependency_injection;
    pub mod server;
}

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API entry point: loads configuration, connects the database, wires
/// the use cases and serves the HTTP API.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Initialize database (and migrations when MIGRATIONS_PATH is set)
    let pool = database_config::init_database().await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(pool);

    // 6. Run server
    Server::run(config, container).await
}
