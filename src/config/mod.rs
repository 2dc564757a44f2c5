#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::dataset::Dataset;
use crate::utils::error::Result;
use crate::utils::validation::{validate_socket_addr, Validate};
use std::net::SocketAddr;
use std::sync::Arc;
use toml_config::TomlConfig;

pub const DEFAULT_LISTEN: &str = "127.0.0.1:8080";

/// Effective settings after merging command line, file and defaults.
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub listen: SocketAddr,
    pub dataset: Arc<Dataset>,
}

impl ServiceSettings {
    /// `listen_override` (command line or env) wins over the file, which wins over
    /// [`DEFAULT_LISTEN`]. Cities from the file replace the built-in dataset.
    pub fn resolve(listen_override: Option<&str>, file: Option<&TomlConfig>) -> Result<Self> {
        if let Some(file) = file {
            file.validate()?;
        }

        let (field, listen) = match (listen_override, file.and_then(|f| f.server.listen.as_deref())) {
            (Some(addr), _) => ("listen", addr),
            (None, Some(addr)) => ("server.listen", addr),
            (None, None) => ("listen", DEFAULT_LISTEN),
        };
        let listen = validate_socket_addr(field, listen)?;

        let dataset = match file.map(TomlConfig::dataset).transpose()?.flatten() {
            Some(dataset) => {
                tracing::debug!("Using {} cities from configuration", dataset.len());
                dataset
            }
            None => Dataset::builtin().clone(),
        };

        Ok(Self {
            listen,
            dataset: Arc::new(dataset),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CafeCatalog;

    #[test]
    fn test_defaults() {
        let settings = ServiceSettings::resolve(None, None).unwrap();
        assert_eq!(settings.listen, DEFAULT_LISTEN.parse::<SocketAddr>().unwrap());
        assert_eq!(*settings.dataset, *Dataset::builtin());
    }

    #[test]
    fn test_listen_precedence() {
        let file = TomlConfig::from_toml_str("[server]\nlisten = \"0.0.0.0:9000\"\n").unwrap();

        let from_file = ServiceSettings::resolve(None, Some(&file)).unwrap();
        assert_eq!(from_file.listen.port(), 9000);

        let overridden = ServiceSettings::resolve(Some("127.0.0.1:9100"), Some(&file)).unwrap();
        assert_eq!(overridden.listen.port(), 9100);
    }

    #[test]
    fn test_dataset_from_file() {
        let file = TomlConfig::from_toml_str("[cities]\nkazan = [\"Чайхана\"]\n").unwrap();
        let settings = ServiceSettings::resolve(None, Some(&file)).unwrap();

        assert!(settings.dataset.lookup("kazan").is_some());
        assert!(settings.dataset.lookup("moscow").is_none());
    }

    #[test]
    fn test_invalid_override() {
        assert!(ServiceSettings::resolve(Some("not an address"), None).is_err());
    }
}
