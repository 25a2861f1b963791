//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid site origin `{0}`: {1}")]
    Origin(String, String),

    #[error("Config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("verde.toml"),
            Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("verde.toml"));

        let origin_err = ConfigError::Origin("ftp://x".into(), "scheme must be http or https".into());
        let display = format!("{origin_err}");
        assert!(display.contains("ftp://x"));
        assert!(display.contains("scheme"));

        let validation_err = ConfigError::Validation("bad pattern".to_string());
        assert!(format!("{validation_err}").contains("bad pattern"));
    }
}
