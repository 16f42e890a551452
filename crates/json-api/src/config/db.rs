//! Database Config

use clap::Args;

/// Where pantry keeps its recipes, users and carts.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string for the pantry schema
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,
}
