use crate::config::AppConfig;

/// Load `.env` (if any) and build the configuration from the environment.
pub fn init_config() -> AppConfig {
    load_dotenv();
    let config = AppConfig::from_env();
    tracing::info!(
        dots = config.dots,
        search = %config.search,
        seed = ?config.seed,
        "Settings loaded"
    );
    config
}

fn load_dotenv() {
    let candidates = [".env", "../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::info!("No .env file found, using system environment variables");
}
