use std::{env, net::SocketAddr};
use thiserror::Error;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: &'static str, reason: String },
}

/// Runtime settings read from the environment
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,
    /// Authentication is only enforced when an issuer is configured
    pub oidc_issuer_url: Option<String>,
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::MissingEnvVar("DATABASE_URL"))?;

        let bind_address = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidEnvValue {
                var: "BIND_ADDRESS",
                reason: e.to_string(),
            })?;

        let oidc_issuer_url = lookup("OIDC_ISSUER_URL").filter(|url| !url.is_empty());

        let run_migrations = match lookup("RUN_MIGRATIONS").as_deref() {
            None | Some("true") | Some("1") => true,
            Some("false") | Some("0") => false,
            Some(other) => {
                return Err(ConfigError::InvalidEnvValue {
                    var: "RUN_MIGRATIONS",
                    reason: format!("expected true or false, got {other}"),
                });
            }
        };

        Ok(Self {
            database_url,
            bind_address,
            oidc_issuer_url,
            run_migrations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&'static str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<_, _> = vars.iter().map(|(k, v)| (*k, v.to_string())).collect();
        Config::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[("DATABASE_URL", "postgres://localhost/attendance")]).unwrap();

        assert_eq!(config.database_url, "postgres://localhost/attendance");
        assert_eq!(config.bind_address, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.oidc_issuer_url, None);
        assert!(config.run_migrations);
    }

    #[test]
    fn test_missing_database_url() {
        let result = config_from(&[("BIND_ADDRESS", "127.0.0.1:8080")]);

        assert_eq!(
            result.unwrap_err(),
            ConfigError::MissingEnvVar("DATABASE_URL")
        );
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("BIND_ADDRESS", "127.0.0.1:8080"),
            ("OIDC_ISSUER_URL", "https://idp.example.edu/realms/law"),
            ("RUN_MIGRATIONS", "false"),
        ])
        .unwrap();

        assert_eq!(config.bind_address.port(), 8080);
        assert_eq!(
            config.oidc_issuer_url.as_deref(),
            Some("https://idp.example.edu/realms/law")
        );
        assert!(!config.run_migrations);
    }

    #[test]
    fn test_invalid_values() {
        let bad_addr = config_from(&[("DATABASE_URL", "sqlite::memory:"), ("BIND_ADDRESS", "nowhere")]);
        assert!(matches!(
            bad_addr,
            Err(ConfigError::InvalidEnvValue { var: "BIND_ADDRESS", .. })
        ));

        let bad_flag = config_from(&[("DATABASE_URL", "sqlite::memory:"), ("RUN_MIGRATIONS", "maybe")]);
        assert!(matches!(
            bad_flag,
            Err(ConfigError::InvalidEnvValue { var: "RUN_MIGRATIONS", .. })
        ));
    }
}
