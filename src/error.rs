use thiserror::Error;

/// Failures that stop the app from mounting.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("host element `#{0}` not found in document")]
    MissingHost(String),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("logger init failed: {0}")]
    Logger(String),
}

/// Why an address-bar fragment did not yield a size.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FragmentError {
    #[error("fragment is empty")]
    Empty,
    #[error("fragment `{0}` does not start with '#'")]
    MissingHash(String),
    #[error("fragment value `{0}` is not a number")]
    NotANumber(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        assert_eq!(
            AppError::MissingHost("app-layout".into()).to_string(),
            "host element `#app-layout` not found in document"
        );
        assert_eq!(
            FragmentError::NotANumber("abc".into()).to_string(),
            "fragment value `abc` is not a number"
        );
    }

    #[test]
    fn json_errors_convert_into_config_errors() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let app: AppError = err.into();
        assert!(matches!(app, AppError::Config(_)));
    }
}
