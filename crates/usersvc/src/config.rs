use std::env;

/// Handler configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Bucket receiving raw request payloads (default: "users-raw")
    pub bucket_name: String,
    /// Table holding user records (default: "users")
    pub table_name: String,
    /// Human-readable log output instead of JSON lines (default: false)
    pub pretty_logs: bool,
    /// Custom AWS endpoint, e.g. LocalStack (default: none)
    pub aws_endpoint_url: Option<String>,
    /// AWS region (default: "us-east-1")
    pub aws_region: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `BUCKET_NAME` - Raw payload bucket (default: "users-raw")
    /// - `USERS_TABLE_NAME` - User records table (default: "users")
    /// - `PRETTY_LOGS` - "true" enables pretty logs (default: JSON)
    /// - `AWS_ENDPOINT_URL` - Custom endpoint for local AWS emulators
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    pub fn from_env() -> Self {
        Self {
            bucket_name: env::var("BUCKET_NAME").unwrap_or_else(|_| "users-raw".to_string()),
            table_name: env::var("USERS_TABLE_NAME").unwrap_or_else(|_| "users".to_string()),
            pretty_logs: env::var("PRETTY_LOGS").is_ok_and(|v| v == "true"),
            aws_endpoint_url: env::var("AWS_ENDPOINT_URL").ok(),
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
