use std::fmt;

use bakeshop::roster::RosterImportError;
use bakeshop::{SelectionError, ServeError, SnapshotError};

use crate::config::ConfigError;
use crate::telemetry::TelemetryError;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Roster(RosterImportError),
    Snapshot(SnapshotError),
    Selection(SelectionError),
    Serve(ServeError),
    UnknownCustomer(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Roster(err) => write!(f, "roster import error: {}", err),
            AppError::Snapshot(err) => write!(f, "snapshot error: {}", err),
            AppError::Selection(err) => write!(f, "selection error: {}", err),
            AppError::Serve(err) => write!(f, "serving error: {}", err),
            AppError::UnknownCustomer(name) => {
                write!(f, "no customer named '{}' is in today's roster", name)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Roster(err) => Some(err),
            AppError::Snapshot(err) => Some(err),
            AppError::Selection(err) => Some(err),
            AppError::Serve(err) => Some(err),
            AppError::UnknownCustomer(_) => None,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<RosterImportError> for AppError {
    fn from(value: RosterImportError) -> Self {
        Self::Roster(value)
    }
}

impl From<SnapshotError> for AppError {
    fn from(value: SnapshotError) -> Self {
        Self::Snapshot(value)
    }
}

impl From<SelectionError> for AppError {
    fn from(value: SelectionError) -> Self {
        Self::Selection(value)
    }
}

impl From<ServeError> for AppError {
    fn from(value: ServeError) -> Self {
        Self::Serve(value)
    }
}
