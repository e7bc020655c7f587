use admin_client::ClientConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: String,
    pub api: ClientConfig,
}

impl Config {
    pub fn from_env() -> Self {
        // Load .env if present; real environment wins.
        dotenvy::dotenv().ok();

        Self {
            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
            api: ClientConfig::from_env(),
        }
    }
}

/// Initialize logging for console binaries and integration tests.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,admin_console=debug".to_string()),
        )
        .init();
}
