use std::env;
use std::time::Duration;

const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60 * 10;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_url: String,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn new(api_url: &str, request_timeout: Duration) -> Self {
        Self {
            api_url: api_url.to_string(),
            request_timeout,
        }
    }

    /// Replace the API URL when one was passed on the command line.
    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url {
            self.api_url = url;
        }
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let api_url = env::var("TUTOR_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let request_timeout_secs = match env::var("TUTOR_REQUEST_TIMEOUT_SECS") {
            Ok(val) => val.parse::<u64>().ok().filter(|secs| *secs > 0).unwrap_or_else(|| {
                tracing::warn!(
                    "Invalid TUTOR_REQUEST_TIMEOUT_SECS {:?}, using {}",
                    val,
                    DEFAULT_REQUEST_TIMEOUT_SECS
                );
                DEFAULT_REQUEST_TIMEOUT_SECS
            }),
            Err(_) => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Self {
            api_url,
            request_timeout: Duration::from_secs(request_timeout_secs),
        }
    }
}
