//! Environment-based server configuration

use aegis_core::{AegisError, AegisResult};

const DEFAULT_PORT: u16 = 8080;

/// Server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP server binds to (`SERVER_PORT`, default 8080)
    pub port: u16,
}

impl Config {
    pub fn from_env() -> AegisResult<Self> {
        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| AegisError::config(format!("invalid SERVER_PORT: {}", raw)))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { port })
    }
}
