// Configuration module entry point
// Manages application configuration and shared runtime state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{
    ClientConfig, Config, HealthConfig, HttpConfig, LoggingConfig, PerformanceConfig,
    RoutesConfig, ServerConfig,
};

impl Config {
    /// Load configuration from "config.toml" (if present) layered under
    /// `SERVER_`-prefixed environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SERVER"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8081)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.server_name", "Debug-Echo/0.1")?
            .set_default("http.max_body_size", 10_485_760)? // 10MB
            .set_default("http.cors_allow_origin", "*")?
            .set_default(
                "http.cors_allow_methods",
                "GET, POST, PUT, DELETE, OPTIONS",
            )?
            .set_default("http.cors_allow_headers", "Content-Type, Authorization")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config_file() {
        let cfg = Config::load_from("no-such-config-file").expect("defaults should load");
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 8081);
        assert_eq!(cfg.http.cors_allow_origin, "*");
        assert_eq!(cfg.http.cors_allow_methods, "GET, POST, PUT, DELETE, OPTIONS");
        assert_eq!(cfg.http.cors_allow_headers, "Content-Type, Authorization");
        assert!(cfg.routes.health.enabled);
        assert_eq!(cfg.routes.health.liveness_path, "/");
        assert_eq!(cfg.routes.health.readiness_path, "/healthz");
    }

    #[test]
    fn test_default_client_platforms() {
        let cfg = Config::load_from("no-such-config-file").expect("defaults should load");
        assert_eq!(cfg.client.platforms, ["ios", "android", "native", "web"]);
    }

    #[test]
    fn test_socket_addr_parses() {
        let cfg = Config::load_from("no-such-config-file").expect("defaults should load");
        let addr = cfg.get_socket_addr().expect("valid address");
        assert_eq!(addr.port(), 8081);
    }
}
