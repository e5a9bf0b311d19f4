//! Service Configuration
//!
//! Settings are read from environment variables and then overridden by
//! command-line flags:
//!
//! | Flag            | Env               | Default                 |
//! |-----------------|-------------------|-------------------------|
//! | `--bind`        | `BIND_ADDR`       | `127.0.0.1:8080`        |
//! | `--es-url`      | `ES_URL`          | `http://localhost:9200` |
//! | `--index`       | `ES_INDEX`        | `articles`              |
//! | `--timeout`     | `ES_TIMEOUT_SECS` | `30`                    |
//! | `--seed`        | `SEED_ON_START`   | off                     |
//! | `--log-level`   | `LOG_LEVEL`       | `INFO`                  |

use anyhow::{Context, Result, bail};
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_ES_URL: &str = "http://localhost:9200";
pub const DEFAULT_INDEX: &str = "articles";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub es_url: String,
    pub index: String,
    /// Per-request timeout for calls to the search engine.
    pub request_timeout: Duration,
    /// Recreate the index and load the sample articles before serving.
    pub seed_on_start: bool,
    pub log_level: tracing::Level,
}

impl Config {
    pub fn load() -> Result<Self> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::from_sources(|key| std::env::var(key).ok(), &args)
    }

    /// Build a config from an environment lookup and the command-line
    /// arguments (program name excluded).
    pub fn from_sources<E>(env: E, args: &[String]) -> Result<Self>
    where
        E: Fn(&str) -> Option<String>,
    {
        let mut bind = env("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let mut es_url = env("ES_URL").unwrap_or_else(|| DEFAULT_ES_URL.to_string());
        let mut index = env("ES_INDEX").unwrap_or_else(|| DEFAULT_INDEX.to_string());
        let mut timeout = env("ES_TIMEOUT_SECS");
        let mut seed_on_start = env("SEED_ON_START").is_some_and(|v| parse_flag(&v));
        let mut log_level = env("LOG_LEVEL").unwrap_or_else(|| "INFO".to_string());

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--bind" => bind = flag_value(args, i)?,
                "--es-url" => es_url = flag_value(args, i)?,
                "--index" => index = flag_value(args, i)?,
                "--timeout" => timeout = Some(flag_value(args, i)?),
                "--log-level" => log_level = flag_value(args, i)?,
                "--seed" => {
                    seed_on_start = true;
                    i += 1;
                    continue;
                }
                other => bail!("unknown argument: {}", other),
            }
            i += 2;
        }

        let bind_addr: SocketAddr = bind
            .parse()
            .with_context(|| format!("invalid bind address: {}", bind))?;

        let timeout_secs = match timeout {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("invalid timeout: {}", raw))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let log_level: tracing::Level = log_level
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid log level: {}", log_level))?;

        if index.trim().is_empty() {
            bail!("index name must not be empty");
        }

        Ok(Self {
            bind_addr,
            es_url: normalize_url(&es_url)?,
            index: index.trim().to_string(),
            request_timeout: Duration::from_secs(timeout_secs),
            seed_on_start,
            log_level,
        })
    }
}

fn flag_value(args: &[String], i: usize) -> Result<String> {
    args.get(i + 1)
        .cloned()
        .with_context(|| format!("{} requires a value", args[i]))
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

fn normalize_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        bail!("search engine URL must not be empty");
    }

    let normalized = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };

    Ok(normalized.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn env_of<const N: usize>(
        pairs: [(&'static str, &'static str); N],
    ) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_sources(env_of([]), &[]).unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.es_url, "http://localhost:9200");
        assert_eq!(config.index, "articles");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(!config.seed_on_start);
        assert_eq!(config.log_level, tracing::Level::INFO);
    }

    #[test]
    fn test_env_values() {
        let env = env_of([
            ("ES_URL", "es.internal:9200/"),
            ("ES_INDEX", "posts"),
            ("SEED_ON_START", "true"),
            ("LOG_LEVEL", "debug"),
        ]);
        let config = Config::from_sources(env, &[]).unwrap();

        assert_eq!(config.es_url, "http://es.internal:9200");
        assert_eq!(config.index, "posts");
        assert!(config.seed_on_start);
        assert_eq!(config.log_level, tracing::Level::DEBUG);
    }

    #[test]
    fn test_flags_override_env() {
        let env = env_of([("BIND_ADDR", "0.0.0.0:9000"), ("ES_TIMEOUT_SECS", "5")]);
        let config = Config::from_sources(
            env,
            &args(&["--bind", "127.0.0.1:7000", "--timeout", "12", "--seed"]),
        )
        .unwrap();

        assert_eq!(config.bind_addr.port(), 7000);
        assert_eq!(config.request_timeout, Duration::from_secs(12));
        assert!(config.seed_on_start);
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(Config::from_sources(env_of([]), &args(&["--bind", "nope"])).is_err());
        assert!(Config::from_sources(env_of([("ES_TIMEOUT_SECS", "soon")]), &[]).is_err());
        assert!(Config::from_sources(env_of([]), &args(&["--index"])).is_err());
        assert!(Config::from_sources(env_of([]), &args(&["--verbose"])).is_err());
        assert!(Config::from_sources(env_of([("ES_URL", "  ")]), &[]).is_err());
    }

    #[test]
    fn test_https_url_kept() {
        let env = env_of([("ES_URL", "https://search.example.com///")]);
        let config = Config::from_sources(env, &[]).unwrap();
        assert_eq!(config.es_url, "https://search.example.com");
    }
}
