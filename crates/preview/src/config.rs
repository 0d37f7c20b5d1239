use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SITE_DIR: &str = "dist";

/// Preview server settings, read from `PORT`, `SITE_DIR` and `BIND_ADDR`.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub site_dir: PathBuf,
    pub bind_addr: IpAddr,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            site_dir: PathBuf::from(DEFAULT_SITE_DIR),
            bind_addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unparseable values fall back to the default with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Config::default();
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(%raw, "invalid PORT, using {}", defaults.port);
                defaults.port
            }),
            None => defaults.port,
        };
        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(%raw, "invalid BIND_ADDR, using {}", defaults.bind_addr);
                defaults.bind_addr
            }),
            None => defaults.bind_addr,
        };
        let site_dir = lookup("SITE_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.site_dir);
        Config {
            port,
            site_dir,
            bind_addr,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}
