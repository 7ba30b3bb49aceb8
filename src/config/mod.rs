use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

/// Token lifetime used when `JWT_EXPIRES_IN` is unset or unparseable
pub const DEFAULT_JWT_EXPIRY: Duration = Duration::from_secs(60 * 60);
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// HS256 signing secret. Login and token verification refuse to work without it.
    pub jwt_secret: Option<String>,
    pub jwt_expiry: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            _ => Environment::Development,
        };

        Self::defaults(environment).with_env_overrides()
    }

    /// Defaults without reading the environment. Handy for tests.
    pub fn defaults(environment: Environment) -> Self {
        Self {
            environment,
            server: ServerConfig {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
            },
            security: SecurityConfig {
                jwt_secret: None,
                jwt_expiry: DEFAULT_JWT_EXPIRY,
            },
        }
    }

    pub fn with_jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.security.jwt_secret = Some(secret.into());
        self
    }

    fn with_env_overrides(mut self) -> Self {
        // Server overrides
        if let Ok(v) = env::var("HOST") {
            if !v.trim().is_empty() {
                self.server.host = v.trim().to_string();
            }
        }
        if let Ok(v) = env::var("PORT") {
            match v.trim().parse() {
                Ok(port) => self.server.port = port,
                Err(_) => tracing::warn!("Ignoring invalid PORT '{}', using {}", v, self.server.port),
            }
        }

        // Security overrides
        if let Ok(v) = env::var("API_JWT_SECRET") {
            if !v.is_empty() {
                self.security.jwt_secret = Some(v);
            }
        }
        if let Ok(v) = env::var("JWT_EXPIRES_IN") {
            match parse_duration(&v) {
                Some(expiry) => self.security.jwt_expiry = expiry,
                None => tracing::warn!(
                    "Ignoring invalid JWT_EXPIRES_IN '{}', using {}s",
                    v,
                    self.security.jwt_expiry.as_secs()
                ),
            }
        }

        self
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}

/// Parse a token lifetime such as `90`, `500ms`, `1.5h`, `10 minutes`,
/// `2 days` or `1y`.
///
/// A bare number is taken as seconds. Units are case-insensitive and may be
/// separated from the number by spaces. A year is 365.25 days. Negative and
/// zero-length durations are rejected.
pub fn parse_duration(input: &str) -> Option<Duration> {
    let input = input.trim();
    let split = input
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(input.len());
    let (number, unit) = input.split_at(split);
    let value: f64 = number.parse().ok()?;

    let millis = value * unit_millis(&unit.trim().to_ascii_lowercase())?;
    if !millis.is_finite() || millis >= u64::MAX as f64 {
        return None;
    }

    let duration = Duration::from_millis(millis.round() as u64);
    if duration.is_zero() {
        None
    } else {
        Some(duration)
    }
}

fn unit_millis(unit: &str) -> Option<f64> {
    const SECOND: f64 = 1000.0;
    const DAY: f64 = 24.0 * 60.0 * 60.0 * SECOND;

    let millis = match unit {
        "ms" | "msec" | "msecs" | "millisecond" | "milliseconds" => 1.0,
        "" | "s" | "sec" | "secs" | "second" | "seconds" => SECOND,
        "m" | "min" | "mins" | "minute" | "minutes" => 60.0 * SECOND,
        "h" | "hr" | "hrs" | "hour" | "hours" => 60.0 * 60.0 * SECOND,
        "d" | "day" | "days" => DAY,
        "w" | "week" | "weeks" => 7.0 * DAY,
        "y" | "yr" | "yrs" | "year" | "years" => 365.25 * DAY,
        _ => return None,
    };
    Some(millis)
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
