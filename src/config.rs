use clap::Parser;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Hosting environment. Only `Development` changes behaviour; any other
/// name (`Staging`, `QA`, ...) runs like production.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Environment {
    Development,
    #[default]
    Production,
    Other(String),
}

impl Environment {
    pub fn is_development(&self) -> bool {
        *self == Environment::Development
    }

    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        if self.is_development() { "debug" } else { "info" }
    }
}

impl FromStr for Environment {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Ok(match name.to_ascii_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "production" | "prod" | "" => Environment::Production,
            _ => Environment::Other(name.to_string()),
        })
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => f.write_str("Development"),
            Environment::Production => f.write_str("Production"),
            Environment::Other(name) => f.write_str(name),
        }
    }
}

/// Server settings. Each flag falls back to its environment variable, then to the default.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "minimal-dus", version, about = "Parity-checking HTTP service")]
pub struct Settings {
    /// Hosting environment; `Development` enables debug logging by default
    #[arg(long = "env", env = "APP_ENV", default_value = "Production")]
    pub environment: Environment,

    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Worker count; actix picks one per core when unset
    #[arg(long, env = "WORKERS", value_parser = clap::value_parser!(u16).range(1..))]
    pub workers: Option<u16>,
}

impl Settings {
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}
