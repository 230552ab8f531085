use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum MidwayError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("script error: {0}")]
    Script(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("general.window_limit = 2".into());
        assert_eq!(
            err.to_string(),
            "config validation error: general.window_limit = 2"
        );
    }

    #[test]
    fn midway_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: MidwayError = config_err.into();
        assert!(matches!(err, MidwayError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn midway_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "script missing");
        let err: MidwayError = io_err.into();
        assert!(matches!(err, MidwayError::Io(_)));
        assert!(err.to_string().contains("script missing"));
    }

    #[test]
    fn midway_error_other_variants() {
        let err = MidwayError::Script("step 3: unknown window class".into());
        assert_eq!(err.to_string(), "script error: step 3: unknown window class");

        let err = MidwayError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
