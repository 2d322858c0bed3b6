use std::net::SocketAddr;

use crate::error::AppError;

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8787";

#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub listen_addr: SocketAddr,
}

impl Config {
    /// Optional:
    /// - `LISTEN_ADDR` (default: `127.0.0.1:8787`)
    ///
    /// The inference API is configured separately through the
    /// `WORKERS_AI_*` variables read by `ai_common::workers_ai`.
    pub fn from_env() -> Result<Self, AppError> {
        let raw =
            std::env::var("LISTEN_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());
        Self::from_listen_addr(&raw)
    }

    fn from_listen_addr(raw: &str) -> Result<Self, AppError> {
        let listen_addr = raw
            .parse::<SocketAddr>()
            .map_err(|_| AppError::Config(format!("invalid LISTEN_ADDR: {raw}")))?;
        Ok(Self { listen_addr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_socket_address() {
        let config = Config::from_listen_addr("0.0.0.0:9000").unwrap();
        assert_eq!(config.listen_addr.port(), 9000);
    }

    #[test]
    fn rejects_a_bare_hostname() {
        let err = Config::from_listen_addr("localhost").unwrap_err();
        assert!(err.to_string().contains("invalid LISTEN_ADDR"));
    }
}
