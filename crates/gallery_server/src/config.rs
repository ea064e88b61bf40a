use std::env;
use std::net::SocketAddr;

use anyhow::{bail, Context};
use gallery_engine::{ExtractSettings, SplitPolicy};

use crate::logging::LogDestination;

/// Server configuration, read from the environment with defaults.
///
/// - `GALLERY_BIND` — listen address, default `127.0.0.1:5666`.
/// - `GALLERY_URL_LIMIT` — extraction cap, default 50 (500 is the
///   large-list variant).
/// - `GALLERY_SPLIT` — `whitespace` (default) or `newlines`.
/// - `GALLERY_LOG` — `terminal` (default), `file` or `both`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub extract: ExtractSettings,
    pub log: LogDestination,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 5666)),
            extract: ExtractSettings::default(),
            log: LogDestination::Terminal,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Ok(bind) = env::var("GALLERY_BIND") {
            config.bind = bind
                .parse()
                .with_context(|| format!("GALLERY_BIND is not a socket address: {bind}"))?;
        }
        if let Ok(limit) = env::var("GALLERY_URL_LIMIT") {
            config.extract.limit = limit
                .parse()
                .with_context(|| format!("GALLERY_URL_LIMIT is not a number: {limit}"))?;
        }
        if let Ok(split) = env::var("GALLERY_SPLIT") {
            config.extract.split = match split.as_str() {
                "whitespace" => SplitPolicy::Whitespace,
                "newlines" => SplitPolicy::Newlines,
                other => bail!("GALLERY_SPLIT must be 'whitespace' or 'newlines', got {other}"),
            };
        }
        if let Ok(log) = env::var("GALLERY_LOG") {
            config.log = match log.as_str() {
                "terminal" => LogDestination::Terminal,
                "file" => LogDestination::File,
                "both" => LogDestination::Both,
                other => bail!("GALLERY_LOG must be 'terminal', 'file' or 'both', got {other}"),
            };
        }

        Ok(config)
    }
}
