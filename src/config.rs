use std::env;
use std::path::PathBuf;

#[derive(Clone)]
pub struct Config {
    /// Path of the backing document file
    pub data_file: PathBuf,
    /// Port the HTTP server binds to
    pub port: u16,
    /// The single development origin allowed by CORS
    pub allowed_origin: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            data_file: env::var("DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/networth.toml")),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            allowed_origin: env::var("ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
        }
    }
}
