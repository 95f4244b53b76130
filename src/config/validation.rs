//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system
//! - Route trees are declared in code and are not validated here

use std::net::SocketAddr;

use thiserror::Error;
use tracing::level_filters::LevelFilter;

use crate::config::schema::ServerConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: invalid socket address '{value}'")]
    InvalidAddress { field: &'static str, value: String },

    #[error("{field}: must be greater than zero")]
    Zero { field: &'static str },

    #[error("observability.log_level: unknown level '{0}'")]
    InvalidLogLevel(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_address(
        "listener.bind_address",
        &config.listener.bind_address,
        &mut errors,
    );

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::Zero {
            field: "timeouts.request_secs",
        });
    }

    if config.limits.max_body_bytes == 0 {
        errors.push(ValidationError::Zero {
            field: "limits.max_body_bytes",
        });
    }

    if config.observability.log_level.parse::<LevelFilter>().is_err() {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if config.observability.metrics_enabled {
        check_address(
            "observability.metrics_address",
            &config.observability.metrics_address,
            &mut errors,
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_address(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&ServerConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ServerConfig::default();
        config.listener.bind_address = "localhost".into();
        config.timeouts.request_secs = 0;
        config.limits.max_body_bytes = 0;
        config.observability.log_level = "loud".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(
            errors[0],
            ValidationError::InvalidAddress {
                field: "listener.bind_address",
                value: "localhost".into(),
            }
        );
        assert_eq!(errors[3], ValidationError::InvalidLogLevel("loud".into()));
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = ServerConfig::default();
        config.observability.metrics_address = "nope".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].to_string(),
            "observability.metrics_address: invalid socket address 'nope'"
        );
    }
}
