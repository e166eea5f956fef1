use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::net::TcpListener;
use crate::app_system::DEFAULT_CHANNEL_CAPACITY;
use crate::domain::{seed_activities, Activity};
use crate::roster_actor::{validate_catalog, ActivityError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
    #[error("failed to read seed file {path}: {source}")]
    SeedRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse seed file {path}: {source}")]
    SeedParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    InvalidSeed(#[from] ActivityError),
    #[error("failed to bind {host}:{port}: {source}")]
    Bind {
        host: String,
        port: u16,
        #[source]
        source: std::io::Error,
    },
}

/// Process configuration, read once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub seed_file: Option<PathBuf>,
    pub channel_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            static_dir: PathBuf::from("static"),
            seed_file: None,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl Config {
    /// Reads `ROSTER_*` variables, loading `.env` first when one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(host) = lookup("ROSTER_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("ROSTER_PORT") {
            config.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidValue { key: "ROSTER_PORT", value: port })?;
        }
        if let Some(dir) = lookup("ROSTER_STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }
        config.seed_file = lookup("ROSTER_SEED_FILE").filter(|s| !s.is_empty()).map(PathBuf::from);
        if let Some(capacity) = lookup("ROSTER_CHANNEL_CAPACITY") {
            config.channel_capacity = match capacity.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidValue { key: "ROSTER_CHANNEL_CAPACITY", value: capacity }),
            };
        }
        Ok(config)
    }

    /// Binds the HTTP listener. `host` may be an IPv4/IPv6 literal or a
    /// resolvable name such as `localhost`.
    pub async fn bind(&self) -> Result<TcpListener, ConfigError> {
        TcpListener::bind((self.host.as_str(), self.port))
            .await
            .map_err(|source| ConfigError::Bind { host: self.host.clone(), port: self.port, source })
    }

    /// The configured seed file, or the built-in starter catalog.
    pub fn initial_activities(&self) -> Result<Vec<Activity>, ConfigError> {
        match &self.seed_file {
            Some(path) => load_seed_file(path),
            None => Ok(seed_activities()),
        }
    }
}

/// Parses a JSON catalog: an object of activity name to activity fields.
pub fn load_seed_file(path: &Path) -> Result<Vec<Activity>, ConfigError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::SeedRead { path: path.to_path_buf(), source })?;
    parse_seed(&raw).map_err(|e| match e {
        SeedError::Json(source) => ConfigError::SeedParse { path: path.to_path_buf(), source },
        SeedError::Invalid(e) => ConfigError::InvalidSeed(e),
    })
}

enum SeedError {
    Json(serde_json::Error),
    Invalid(ActivityError),
}

fn parse_seed(raw: &str) -> Result<Vec<Activity>, SeedError> {
    let catalog: BTreeMap<String, Activity> = serde_json::from_str(raw).map_err(SeedError::Json)?;
    let activities: Vec<Activity> = catalog
        .into_iter()
        .map(|(name, activity)| Activity { name, ..activity })
        .collect();
    validate_catalog(&activities).map_err(SeedError::Invalid)?;
    Ok(activities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!((config.host.as_str(), config.port), ("127.0.0.1", 8000));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("ROSTER_HOST", "0.0.0.0"),
            ("ROSTER_PORT", "9090"),
            ("ROSTER_STATIC_DIR", "/srv/static"),
            ("ROSTER_SEED_FILE", "/etc/roster.json"),
            ("ROSTER_CHANNEL_CAPACITY", "8"),
        ]))
        .unwrap();
        assert_eq!((config.host.as_str(), config.port), ("0.0.0.0", 9090));
        assert_eq!(config.static_dir, PathBuf::from("/srv/static"));
        assert_eq!(config.seed_file, Some(PathBuf::from("/etc/roster.json")));
        assert_eq!(config.channel_capacity, 8);
    }

    #[test]
    fn test_invalid_values() {
        let err = Config::from_lookup(lookup(&[("ROSTER_PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "ROSTER_PORT", .. }));

        let err = Config::from_lookup(lookup(&[("ROSTER_CHANNEL_CAPACITY", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "ROSTER_CHANNEL_CAPACITY", .. }));
    }

    #[tokio::test]
    async fn test_bind_resolves_host_names() {
        let config = Config::from_lookup(lookup(&[("ROSTER_HOST", "localhost"), ("ROSTER_PORT", "0")])).unwrap();
        let listener = config.bind().await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());

        let config = Config::from_lookup(lookup(&[("ROSTER_HOST", "not a host"), ("ROSTER_PORT", "0")])).unwrap();
        let err = config.bind().await.unwrap_err();
        assert!(matches!(err, ConfigError::Bind { .. }));
    }

    #[test]
    fn test_parse_seed_fills_names() {
        let raw = r#"{
            "Chess Club": {
                "description": "Learn strategies",
                "schedule": "Fridays",
                "max_participants": 12,
                "participants": ["michael@mergington.edu"]
            },
            "Art Club": {
                "description": "Paint",
                "schedule": "Wednesdays",
                "max_participants": 18
            }
        }"#;
        let activities = parse_seed(raw).ok().unwrap();
        assert_eq!(activities.len(), 2);
        assert_eq!(activities[0].name, "Art Club");
        assert!(activities[0].participants.is_empty());
        assert_eq!(activities[1].name, "Chess Club");
        assert_eq!(activities[1].participants, vec!["michael@mergington.edu"]);
    }

    #[test]
    fn test_parse_seed_rejects_bad_catalogs() {
        assert!(matches!(parse_seed("not json"), Err(SeedError::Json(_))));

        let dup = r#"{"Art Club": {"description": "", "schedule": "", "max_participants": 3,
            "participants": ["a@x.edu", "a@x.edu"]}}"#;
        assert!(matches!(parse_seed(dup), Err(SeedError::Invalid(ActivityError::InvalidSeed(_)))));
    }

    #[test]
    fn test_load_seed_file_missing() {
        let err = load_seed_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::SeedRead { .. }));
    }

    #[test]
    fn test_initial_activities_defaults_to_builtin_seed() {
        let activities = Config::default().initial_activities().unwrap();
        assert_eq!(activities, seed_activities());
    }
}
