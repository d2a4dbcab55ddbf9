use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{anyhow, Context};

use crate::services::activities_service::CapacityPolicy;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub seed_file: Option<PathBuf>,
    pub capacity_policy: CapacityPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            seed_file: None,
            capacity_policy: CapacityPolicy::default(),
        }
    }
}

impl Config {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick
    /// up a `.env` file.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let port = match var("PORT") {
            Some(v) => v
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got {v:?}"))?,
            None => defaults.port,
        };
        let capacity_policy = match var("CAPACITY_POLICY") {
            Some(v) => v.parse::<CapacityPolicy>().map_err(|e: String| anyhow!(e))?,
            None => defaults.capacity_policy,
        };

        Ok(Self {
            host: var("HOST").unwrap_or(defaults.host),
            port,
            static_dir: var("STATIC_DIR").map(PathBuf::from).unwrap_or(defaults.static_dir),
            seed_file: var("ACTIVITIES_SEED_FILE").map(PathBuf::from),
            capacity_policy,
        })
    }

    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("cannot parse bind address {}:{}", self.host, self.port))
    }

    /// Address tried when the configured port is taken.
    pub fn fallback_addr(&self) -> anyhow::Result<SocketAddr> {
        let port = self
            .port
            .checked_add(1)
            .ok_or_else(|| anyhow!("no fallback port after {}", self.port))?;
        format!("{}:{}", self.host, port)
            .parse()
            .with_context(|| format!("cannot parse bind address {}:{}", self.host, port))
    }
}
