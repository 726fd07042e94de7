/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Tip provider configuration.
    pub tip: TipConfig,
}

/// Settings for the external study-tip provider.
///
/// With no `TIP_API_URL` configured the server never leaves the process for
/// tips and serves the fixed fallback copy instead.
#[derive(Debug, Clone)]
pub struct TipConfig {
    /// Text-generation endpoint. Optional.
    pub api_url: Option<String>,
    /// Bearer token for the endpoint. Optional.
    pub api_key: Option<String>,
    /// Per-fetch timeout in seconds before falling back (default: `5`).
    pub timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `TIP_API_URL`          | unset (fallback tips only) |
    /// | `TIP_API_KEY`          | unset                      |
    /// | `TIP_TIMEOUT_SECS`     | `5`                        |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let tip = TipConfig {
            api_url: std::env::var("TIP_API_URL").ok().filter(|s| !s.is_empty()),
            api_key: std::env::var("TIP_API_KEY").ok().filter(|s| !s.is_empty()),
            timeout_secs: std::env::var("TIP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "5".into())
                .parse()
                .expect("TIP_TIMEOUT_SECS must be a valid u64"),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            tip,
        }
    }
}
