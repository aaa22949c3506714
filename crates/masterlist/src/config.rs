use std::{env, path::PathBuf, time::Duration};

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB table holding user records (default: "User")
    pub table_name: String,
    /// AWS region override; the ambient chain is used when unset.
    pub aws_region: Option<String>,
    /// Custom DynamoDB endpoint (e.g. DynamoDB Local).
    pub aws_endpoint_url: Option<String>,
    /// Upper bound for a single backend operation, in milliseconds (default: 5,000)
    pub backend_timeout_ms: u64,
    /// Upper bound for a user request, in seconds (default: 10)
    pub request_timeout_secs: u64,
    /// Program used to rebuild the master playlist (default: "python")
    pub playlist_script: String,
    /// Arguments passed to the playlist program (default: "../python_scripts/test.py")
    pub playlist_script_args: Vec<String>,
    /// Upper bound for one playlist run, in seconds (default: 300)
    pub script_timeout_secs: u64,
    /// Directory served for unmatched paths (default: "./static")
    pub static_dir: PathBuf,
    /// Log output format (default: pretty)
    pub log_format: LogFormat,
}

/// Settings handed to the DynamoDB connector at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub table_name: String,
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
    pub operation_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNAMODB_TABLE_NAME` - User table name (default: "User")
    /// - `AWS_REGION` - AWS region (default: resolved by the AWS SDK)
    /// - `AWS_ENDPOINT_URL` - Custom DynamoDB endpoint (default: none)
    /// - `BACKEND_TIMEOUT_MS` - Per-operation backend timeout (default: 5,000)
    /// - `REQUEST_TIMEOUT_SECS` - Per-request timeout (default: 10)
    /// - `PLAYLIST_SCRIPT` - Playlist program (default: "python")
    /// - `PLAYLIST_SCRIPT_ARGS` - Whitespace separated arguments (default: "../python_scripts/test.py")
    /// - `SCRIPT_TIMEOUT_SECS` - Playlist run timeout (default: 300)
    /// - `STATIC_DIR` - Static file directory (default: "./static")
    /// - `LOG_FORMAT` - "pretty" or "json" (default: "pretty")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let number = |key: &str, default: u64| {
            lookup(key)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(default)
        };
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            table_name: non_empty("DYNAMODB_TABLE_NAME").unwrap_or_else(|| "User".to_string()),
            aws_region: non_empty("AWS_REGION"),
            aws_endpoint_url: non_empty("AWS_ENDPOINT_URL"),
            backend_timeout_ms: number("BACKEND_TIMEOUT_MS", 5_000),
            request_timeout_secs: number("REQUEST_TIMEOUT_SECS", 10),
            playlist_script: non_empty("PLAYLIST_SCRIPT").unwrap_or_else(|| "python".to_string()),
            playlist_script_args: lookup("PLAYLIST_SCRIPT_ARGS")
                .unwrap_or_else(|| "../python_scripts/test.py".to_string())
                .split_whitespace()
                .map(str::to_string)
                .collect(),
            script_timeout_secs: number("SCRIPT_TIMEOUT_SECS", 300),
            static_dir: non_empty("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./static")),
            log_format: match lookup("LOG_FORMAT").as_deref().map(str::trim) {
                Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        }
    }

    /// Connector settings derived from this configuration.
    pub fn backend_config(&self) -> BackendConfig {
        BackendConfig {
            table_name: self.table_name.clone(),
            region: self.aws_region.clone(),
            endpoint_url: self.aws_endpoint_url.clone(),
            operation_timeout: Duration::from_millis(self.backend_timeout_ms),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Get the playlist script timeout as a Duration.
    pub fn script_timeout(&self) -> Duration {
        Duration::from_secs(self.script_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = config_from(&[]);

        assert_eq!(config.table_name, "User");
        assert_eq!(config.aws_region, None);
        assert_eq!(config.aws_endpoint_url, None);
        assert_eq!(config.backend_timeout_ms, 5_000);
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.playlist_script, "python");
        assert_eq!(config.playlist_script_args, vec!["../python_scripts/test.py"]);
        assert_eq!(config.script_timeout_secs, 300);
        assert_eq!(config.static_dir, PathBuf::from("./static"));
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("DYNAMODB_TABLE_NAME", "users-dev"),
            ("AWS_REGION", "eu-west-1"),
            ("AWS_ENDPOINT_URL", "http://localhost:8000"),
            ("BACKEND_TIMEOUT_MS", "250"),
            ("PLAYLIST_SCRIPT", "python3"),
            ("PLAYLIST_SCRIPT_ARGS", "maintain.py  --dry-run"),
            ("LOG_FORMAT", "JSON"),
        ]);

        assert_eq!(config.table_name, "users-dev");
        assert_eq!(config.aws_region.as_deref(), Some("eu-west-1"));
        assert_eq!(
            config.aws_endpoint_url.as_deref(),
            Some("http://localhost:8000")
        );
        assert_eq!(config.backend_timeout_ms, 250);
        assert_eq!(config.playlist_script, "python3");
        assert_eq!(config.playlist_script_args, vec!["maintain.py", "--dry-run"]);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_numbers_fall_back_to_defaults() {
        let config = config_from(&[
            ("BACKEND_TIMEOUT_MS", "soon"),
            ("REQUEST_TIMEOUT_SECS", "-1"),
        ]);

        assert_eq!(config.backend_timeout_ms, 5_000);
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[test]
    fn test_empty_region_is_treated_as_unset() {
        let config = config_from(&[("AWS_REGION", "  ")]);
        assert_eq!(config.aws_region, None);
    }

    #[test]
    fn test_backend_config_conversion() {
        let config = config_from(&[("BACKEND_TIMEOUT_MS", "1500"), ("AWS_REGION", "us-east-1")]);

        assert_eq!(
            config.backend_config(),
            BackendConfig {
                table_name: "User".to_string(),
                region: Some("us-east-1".to_string()),
                endpoint_url: None,
                operation_timeout: Duration::from_millis(1500),
            }
        );
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.script_timeout(), Duration::from_secs(300));
    }
}
