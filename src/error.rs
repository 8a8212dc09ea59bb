use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("schema error: {0}")]
    Schema(String),

    #[error("query error: {0}")]
    Query(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("chart error: {0}")]
    Chart(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_converts_to_error() {
        let err: Error = ConfigError::MissingField { field: "path" }.into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn query_error_display_carries_detail() {
        let err = Error::Query("no such table: sales".to_string());
        assert!(err.to_string().contains("no such table"));
    }

    #[test]
    fn error_display_prefixes_name_the_failure() {
        let cases = [
            (Error::Connection("pool timed out".into()), "connection error"),
            (Error::Schema("migration failed".into()), "schema error"),
            (Error::Query("no such table".into()), "query error"),
            (Error::Database("database is locked".into()), "database error"),
            (Error::Chart("backend closed".into()), "chart error"),
        ];
        for (err, prefix) in cases {
            assert!(err.to_string().starts_with(prefix));
        }
    }

    #[test]
    fn io_error_converts_to_error() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn invalid_value_display_names_field() {
        let err = ConfigError::InvalidValue {
            field: "level",
            reason: "unknown log level".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("level"));
        assert!(message.contains("unknown log level"));
    }
}
