use std::env;

pub mod cors;
pub mod security;

pub use cors::create_cors_layer;
pub use security::security_headers;

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/users";
const DEFAULT_APP_PORT: u16 = 3001;

pub struct Config {
    pub database_url: String,
    pub app_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        let app_port = env::var("APP_PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_APP_PORT);

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            app_port,
        }
    }
}
