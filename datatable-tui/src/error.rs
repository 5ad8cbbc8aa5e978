//! Top-level error type.

use datatable_lib::error::DatasetError;
use thiserror::Error;

use crate::settings::SettingsError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
