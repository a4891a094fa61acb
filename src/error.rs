use thiserror::Error;

use crate::config::validation::ValidationError;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {}", format_validation(.0))]
    ConfigError(Vec<ValidationError>),

    #[error("Publish error: {0}")]
    PublishError(String),

    #[error("Channel closed: {0}")]
    ChannelError(String),
}

fn format_validation(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<rumqttc::ClientError> for DashboardError {
    fn from(error: rumqttc::ClientError) -> Self {
        DashboardError::PublishError(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
