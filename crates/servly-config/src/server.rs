use std::env;
use std::net::SocketAddr;

const DEFAULT_SERVER_PORT: u16 = 3000;
const DEFAULT_METRICS_PORT: u16 = 9090;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub metrics_addr: SocketAddr,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            addr: parse_addr(env::var("SERVER_ADDR").ok(), DEFAULT_SERVER_PORT),
            metrics_addr: parse_addr(env::var("METRICS_ADDR").ok(), DEFAULT_METRICS_PORT),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: parse_addr(None, DEFAULT_SERVER_PORT),
            metrics_addr: parse_addr(None, DEFAULT_METRICS_PORT),
        }
    }
}

/// Unparseable values fall back to all interfaces on the default port.
fn parse_addr(value: Option<String>, default_port: u16) -> SocketAddr {
    value
        .and_then(|v| v.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], default_port)))
}
