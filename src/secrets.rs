// secrets
use std::collections::HashMap;
use std::env;

use anyhow::{Context, bail};
use tracing::{info, warn};

pub const GENIUS_API_TOKEN: &str = "GENIUS_API_TOKEN";
pub const GENIUS_API_URL: &str = "GENIUS_API_URL";
pub const PORT: &str = "PORT";
pub const LOOKUP_MODE: &str = "LOOKUP_MODE";

const DEFAULT_GENIUS_API_URL: &str = "https://api.genius.com";
const DEFAULT_PORT: &str = "8000";

/// How outbound Genius calls are issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupMode {
    /// Non-blocking calls sharing one connection pool.
    Async,
    /// Synchronous calls on the blocking thread pool, one client per lookup.
    Blocking,
}

impl LookupMode {
    fn parse(raw: &str) -> anyhow::Result<Self> {
        match raw.trim().to_lowercase().as_str() {
            "" | "async" => Ok(LookupMode::Async),
            "blocking" => Ok(LookupMode::Blocking),
            other => bail!("{} must be `async` or `blocking`, got `{}`", LOOKUP_MODE, other),
        }
    }
}

pub struct SecretManager {
    secrets: HashMap<String, String>,
}

impl SecretManager {
    /// Loads settings from the process environment, after a best-effort `.env` read.
    pub fn load() -> anyhow::Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => info!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => warn!("Ignoring unreadable .env file: {}", e),
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut secrets: HashMap<String, String> = HashMap::new();

        let token = lookup(GENIUS_API_TOKEN)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .with_context(|| format!("{} must be set", GENIUS_API_TOKEN))?;
        secrets.insert(GENIUS_API_TOKEN.to_string(), token);

        secrets.insert(
            GENIUS_API_URL.to_string(),
            lookup(GENIUS_API_URL)
                .filter(|u| !u.trim().is_empty())
                .map(|u| u.trim().trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_GENIUS_API_URL.to_string()),
        );
        secrets.insert(
            PORT.to_string(),
            lookup(PORT).unwrap_or_else(|| DEFAULT_PORT.to_string()),
        );
        secrets.insert(
            LOOKUP_MODE.to_string(),
            lookup(LOOKUP_MODE).unwrap_or_default(),
        );

        let manager = SecretManager { secrets };
        manager.port()?;
        manager.lookup_mode()?;

        // Log which secrets are configured (NOT their values!)
        let mut configured: Vec<&str> = manager
            .secrets
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, _)| k.as_str())
            .collect();
        configured.sort_unstable();
        info!("Secrets configured: {:?}", configured);

        Ok(manager)
    }

    pub fn get(&self, key: &str) -> String {
        self.secrets.get(key).cloned().unwrap_or_default()
    }

    pub fn port(&self) -> anyhow::Result<u16> {
        let raw = self.get(PORT);
        raw.trim()
            .parse()
            .with_context(|| format!("{} is not a valid port: `{}`", PORT, raw))
    }

    pub fn lookup_mode(&self) -> anyhow::Result<LookupMode> {
        LookupMode::parse(&self.get(LOOKUP_MODE))
    }
}
