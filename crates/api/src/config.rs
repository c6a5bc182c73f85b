//! Application configuration loaded from environment variables.

use domain::TransitionPolicy;

/// Which of the three services a process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Users,
    Products,
    Orders,
}

impl ServiceKind {
    /// Returns the service name reported by the probes.
    pub fn name(&self) -> &'static str {
        match self {
            ServiceKind::Users => "user-service",
            ServiceKind::Products => "product-service",
            ServiceKind::Orders => "order-service",
        }
    }

    /// Returns the port the service listens on when `PORT` is unset.
    pub fn default_port(&self) -> u16 {
        match self {
            ServiceKind::Users => 8000,
            ServiceKind::Orders => 8001,
            ServiceKind::Products => 8002,
        }
    }
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST`: bind address (default: `"0.0.0.0"`)
/// - `PORT`: listen port (default: 8000 users, 8002 products, 8001 orders)
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
/// - `LOG_FORMAT`: `json` for JSON lines, anything else for plain text
/// - `ORDER_TRANSITIONS`: `permissive` (default) or `strict`
#[derive(Debug, Clone)]
pub struct Config {
    pub service: ServiceKind,
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: LogFormat,
    pub transitions: TransitionPolicy,
}

impl Config {
    /// Returns the defaults for `service`.
    pub fn for_service(service: ServiceKind) -> Self {
        Self {
            service,
            host: "0.0.0.0".to_string(),
            port: service.default_port(),
            log_level: "info".to_string(),
            log_format: LogFormat::default(),
            transitions: TransitionPolicy::default(),
        }
    }

    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env(service: ServiceKind) -> Self {
        Self::from_lookup(service, |key| std::env::var(key).ok())
    }

    fn from_lookup(service: ServiceKind, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::for_service(service);
        Self {
            service,
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: lookup("LOG_FORMAT")
                .map(|f| LogFormat::parse(&f))
                .unwrap_or(defaults.log_format),
            transitions: lookup("ORDER_TRANSITIONS")
                .and_then(|t| t.parse().ok())
                .unwrap_or(defaults.transitions),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
