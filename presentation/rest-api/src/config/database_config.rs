use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

/// Initialize database connection pool from environment variables
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
/// - MIGRATIONS_PATH: when set, migrations in this directory run at startup
///
/// # Errors
/// Returns error if DATABASE_URL is not set, the connection fails or a migration fails
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let max_connections = parse_max_connections(env::var("DATABASE_MAX_CONNECTIONS").ok())?;

    let config = DatabaseConfig::new(db_url).with_max_connections(max_connections);
    let pool = create_postgres_pool(&config).await?;

    if let Ok(migrations_path) = env::var("MIGRATIONS_PATH") {
        run_migrations(&pool, &migrations_path).await?;
        tracing::info!("Migrations applied from {migrations_path}");
    }

    Ok(pool)
}

fn parse_max_connections(raw: Option<String>) -> anyhow::Result<u32> {
    match raw {
        Some(value) => value
            .parse()
            .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {value}")),
        None => Ok(5),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_max_connections() {
        assert_eq!(parse_max_connections(None).unwrap(), 5);
    }

    #[test]
    fn should_parse_max_connections() {
        assert_eq!(parse_max_connections(Some("20".to_string())).unwrap(), 20);
    }

    #[test]
    fn should_reject_non_numeric_max_connections() {
        assert!(parse_max_connections(Some("many".to_string())).is_err());
    }
}
