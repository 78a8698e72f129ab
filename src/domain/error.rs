//! Domain error types.

/// Top-level error type for gbce.
#[derive(Debug, thiserror::Error)]
pub enum GbceError {
    #[error("invalid trade input: {reason}")]
    InvalidTradeInput { reason: String },

    #[error("invalid price {price}: price must be greater than zero")]
    InvalidPrice { price: f64 },

    #[error("invalid security: {reason}")]
    InvalidSecurity { reason: String },

    #[error("unknown symbol: {symbol}")]
    UnknownSymbol { symbol: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("listing error: {reason}")]
    Listing { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&GbceError> for std::process::ExitCode {
    fn from(err: &GbceError) -> Self {
        let code: u8 = match err {
            GbceError::Io(_) => 1,
            GbceError::ConfigParse { .. }
            | GbceError::ConfigMissing { .. }
            | GbceError::ConfigInvalid { .. } => 2,
            GbceError::Listing { .. } => 3,
            GbceError::InvalidTradeInput { .. }
            | GbceError::InvalidPrice { .. }
            | GbceError::InvalidSecurity { .. }
            | GbceError::UnknownSymbol { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_price_message_names_price() {
        let err = GbceError::InvalidPrice { price: -1.5 };
        assert_eq!(
            err.to_string(),
            "invalid price -1.5: price must be greater than zero"
        );
    }

    #[test]
    fn config_invalid_message() {
        let err = GbceError::ConfigInvalid {
            section: "market".into(),
            key: "reference_price".into(),
            reason: "must be positive".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid config value [market] reference_price: must be positive"
        );
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: GbceError = io.into();
        assert!(matches!(err, GbceError::Io(_)));
    }
}
