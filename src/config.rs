//! Runtime configuration shared by the CLI and the web server

/// Default bind address
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listening port (overridden by `PORT`)
pub const DEFAULT_PORT: u16 = 5000;

/// Default upload cap in MiB
pub const DEFAULT_MAX_UPLOAD_MB: usize = 16;

/// Web server configuration
#[derive(Debug, Clone)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
    /// Largest accepted request body
    pub max_upload_bytes: usize,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT, DEFAULT_MAX_UPLOAD_MB)
    }
}

impl WebConfig {
    /// Build a config with the upload cap given in MiB
    pub fn new(host: impl Into<String>, port: u16, max_upload_mb: usize) -> Self {
        Self {
            host: host.into(),
            port,
            max_upload_bytes: max_upload_mb.saturating_mul(1024 * 1024),
        }
    }

    /// `host:port` string for binding
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
