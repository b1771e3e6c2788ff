//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_TICK_MS: u64 = 20;

/// Everything the binary needs before it can serve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Optional YAML board theme; the standard board is used otherwise.
    pub board_path: Option<PathBuf>,
    /// Seed for the game RNG, making dice and message picks repeatable.
    pub seed: Option<u64>,
    /// Longest the timer driver sleeps before checking for due delays.
    pub tick_interval: Duration,
}

impl ServerConfig {
    /// Reads `HOST`, `PORT`, `GRIDVENTURE_BOARD`, `GRIDVENTURE_SEED` and
    /// `GRIDVENTURE_TICK_MS`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set but malformed.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable lookup.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => DEFAULT_PORT,
        };
        let board_path = lookup("GRIDVENTURE_BOARD")
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);
        let seed = lookup("GRIDVENTURE_SEED")
            .map(|raw| {
                raw.parse::<u64>().map_err(|e| {
                    AppError::Config(format!("GRIDVENTURE_SEED must be a valid u64: {e}"))
                })
            })
            .transpose()?;
        let tick_ms = match lookup("GRIDVENTURE_TICK_MS") {
            Some(raw) => raw.parse::<u64>().map_err(|e| {
                AppError::Config(format!("GRIDVENTURE_TICK_MS must be a valid u64: {e}"))
            })?,
            None => DEFAULT_TICK_MS,
        };
        if tick_ms == 0 {
            return Err(AppError::Config(
                "GRIDVENTURE_TICK_MS must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            host,
            port,
            board_path,
            seed,
            tick_interval: Duration::from_millis(tick_ms),
        })
    }

    /// The socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `HOST:PORT` is not a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}
