//! Server configuration read from the environment

use std::net::SocketAddr;
use std::path::PathBuf;

pub const DATA_DIR_VAR: &str = "TM_DATA_DIR";
pub const BIND_ADDR_VAR: &str = "TM_BIND_ADDR";

const DEFAULT_DATA_DIR: &str = ".tm-data";
const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 5000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Directory holding `tasks.json`
    pub data_dir: PathBuf,
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            bind_addr: SocketAddr::from(DEFAULT_BIND_ADDR),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the config from an arbitrary variable source.
    ///
    /// Unset or blank variables fall back to the defaults; an unparseable
    /// bind address is logged and replaced by the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let value = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let data_dir = value(DATA_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let bind_addr = match value(BIND_ADDR_VAR) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid {}={:?}", BIND_ADDR_VAR, raw);
                defaults.bind_addr
            }),
            None => defaults.bind_addr,
        };

        Self {
            data_dir,
            bind_addr,
        }
    }

    /// Location of the task collection inside `data_dir`
    pub fn tasks_path(&self) -> PathBuf {
        self.data_dir.join("tasks.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr.port(), 5000);
        assert_eq!(config.tasks_path(), PathBuf::from(".tm-data/tasks.json"));
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            (DATA_DIR_VAR, "/var/lib/tm"),
            (BIND_ADDR_VAR, "127.0.0.1:8081"),
        ]));
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/tm"));
        assert_eq!(config.bind_addr, "127.0.0.1:8081".parse().unwrap());
    }

    #[test]
    fn invalid_bind_addr_falls_back() {
        let config = ServerConfig::from_lookup(lookup(&[(BIND_ADDR_VAR, "not-an-addr")]));
        assert_eq!(config.bind_addr, ServerConfig::default().bind_addr);
    }
}
