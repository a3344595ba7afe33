use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the mashup generation service
    /// Format: http://HOST:PORT
    pub api_url: String,

    /// Delay between consecutive status polls
    /// Default: 1 second
    pub poll_interval: Duration,

    /// Per-request HTTP timeout
    /// Default: 30 seconds
    pub request_timeout: Duration,

    /// Directory for log files
    /// Default: "logs"
    pub log_dir: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Optional environment variables:
    /// - MASHUP_API_URL: base URL of the service (default: http://127.0.0.1:5000)
    /// - POLL_INTERVAL_MS: status poll period in milliseconds (default: 1000)
    /// - REQUEST_TIMEOUT_SECS: HTTP request timeout in seconds (default: 30)
    /// - LOG_DIR: directory for log files (default: logs)
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let api_url = env::var("MASHUP_API_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:5000".to_string());

        let poll_interval_ms: u64 = env::var("POLL_INTERVAL_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(1000);
        if poll_interval_ms == 0 {
            return Err("POLL_INTERVAL_MS must be greater than zero".to_string());
        }

        let request_timeout_secs: u64 = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        let log_dir = env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string());

        Ok(Config {
            api_url,
            poll_interval: Duration::from_millis(poll_interval_ms),
            request_timeout: Duration::from_secs(request_timeout_secs),
            log_dir,
        })
    }
}
