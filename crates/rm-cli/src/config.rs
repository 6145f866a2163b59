use std::env;

use rm_matrix::{MultiplyBackend, SequentialBackend, ThreadPerRowBackend, WorkerConfig};

use crate::error::{CliError, Result};

pub const BACKEND_VAR: &str = "ROW_MATMUL_BACKEND";
pub const THREAD_PREFIX_VAR: &str = "ROW_MATMUL_THREAD_PREFIX";

/// Which multiplication backend the coordinator runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    /// One worker thread per output row.
    #[default]
    Threaded,
    /// Single-threaded reference implementation.
    Sequential,
}

impl BackendKind {
    pub fn parse(value: &str) -> Option<BackendKind> {
        match value.trim().to_ascii_lowercase().as_str() {
            "threaded" => Some(BackendKind::Threaded),
            "sequential" => Some(BackendKind::Sequential),
            _ => None,
        }
    }
}

/// Runtime configuration, read from the environment.
///
/// The binary takes no arguments. Recognised variables:
/// - `ROW_MATMUL_BACKEND`: `threaded` (default) or `sequential`
/// - `ROW_MATMUL_THREAD_PREFIX`: worker thread name prefix (default `row-worker`)
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub backend: BackendKind,
    pub workers: WorkerConfig,
}

impl Config {
    pub fn from_env() -> Result<Config> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(value) = lookup(BACKEND_VAR) {
            config.backend =
                BackendKind::parse(&value).ok_or_else(|| CliError::InvalidConfig {
                    key: BACKEND_VAR.to_string(),
                    value,
                })?;
        }

        if let Some(prefix) = lookup(THREAD_PREFIX_VAR) {
            if prefix.is_empty() {
                return Err(CliError::InvalidConfig {
                    key: THREAD_PREFIX_VAR.to_string(),
                    value: prefix,
                });
            }
            config.workers.thread_name_prefix = prefix;
        }

        Ok(config)
    }

    pub fn backend(&self) -> Box<dyn MultiplyBackend> {
        match self.backend {
            BackendKind::Threaded => {
                Box::new(ThreadPerRowBackend::with_config(self.workers.clone()))
            }
            BackendKind::Sequential => Box::new(SequentialBackend::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.backend, BackendKind::Threaded);
        assert_eq!(config.workers.thread_name_prefix, "row-worker");
        assert_eq!(config.backend().name(), "threaded");
    }

    #[test]
    fn test_sequential_backend() {
        let config = Config::from_lookup(lookup(&[(BACKEND_VAR, " Sequential ")])).unwrap();
        assert_eq!(config.backend, BackendKind::Sequential);
        assert_eq!(config.backend().name(), "sequential");
    }

    #[test]
    fn test_thread_prefix() {
        let config = Config::from_lookup(lookup(&[(THREAD_PREFIX_VAR, "mul")])).unwrap();
        assert_eq!(config.workers.thread_name_prefix, "mul");
    }

    #[test]
    fn test_unknown_backend() {
        let err = Config::from_lookup(lookup(&[(BACKEND_VAR, "gpu")])).unwrap_err();
        assert!(matches!(err, CliError::InvalidConfig { ref value, .. } if value == "gpu"));
    }

    #[test]
    fn test_invalid_config_message() {
        let err = Config::from_lookup(lookup(&[(BACKEND_VAR, "gpu")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value for ROW_MATMUL_BACKEND: \"gpu\""
        );
    }

    #[test]
    fn test_empty_prefix() {
        assert!(Config::from_lookup(lookup(&[(THREAD_PREFIX_VAR, "")])).is_err());
    }
}
