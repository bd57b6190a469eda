use thiserror::Error;

use crate::i18n::I18nError;
use crate::services::DirectoryError;

/// Errors that stop the service from starting
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Translation catalog error: {0}")]
    I18n(#[from] I18nError),

    #[error("Profile directory error: {0}")]
    Directory(#[from] DirectoryError),
}
