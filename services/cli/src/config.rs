use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the bakery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the command-line bakery.
#[derive(Debug, Clone)]
pub(crate) struct AppConfig {
    pub(crate) environment: AppEnvironment,
    pub(crate) data_dir: PathBuf,
    pub(crate) roster_path: Option<PathBuf>,
    pub(crate) telemetry: TelemetryConfig,
}

impl AppConfig {
    pub(crate) fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("BAKESHOP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let data_dir =
            env::var("BAKESHOP_DATA_DIR").unwrap_or_else(|_| ".bakeshop".to_string());
        if data_dir.trim().is_empty() {
            return Err(ConfigError::EmptyDataDir);
        }

        let roster_path = env::var("BAKESHOP_ROSTER").ok().map(PathBuf::from);
        let log_level = env::var("BAKESHOP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            data_dir: PathBuf::from(data_dir),
            roster_path,
            telemetry: TelemetryConfig { log_level },
        })
    }

    /// Where the player's save file lives.
    pub(crate) fn snapshot_path(&self) -> PathBuf {
        self.data_dir.join("cake-shop.json")
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub(crate) struct TelemetryConfig {
    pub(crate) log_level: String,
}

#[derive(Debug)]
pub(crate) enum ConfigError {
    EmptyDataDir,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyDataDir => write!(f, "BAKESHOP_DATA_DIR must not be blank"),
        }
    }
}

impl std::error::Error for ConfigError {}
