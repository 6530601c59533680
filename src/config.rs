//! Configuration for the simulator.
//!
//! Configuration can be set via environment variables:
//! - `TASKBOARD_URL` - Optional. Base address of the task board. Defaults to `http://localhost:3000`.
//! - `TASK_DESCRIPTION` - Optional. Description for the created task. Defaults to `Test multi-agent task`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

pub const DEFAULT_TASKBOARD_URL: &str = "http://localhost:3000";
pub const DEFAULT_TASK_DESCRIPTION: &str = "Test multi-agent task";

/// Simulator configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base address of the task board server
    pub base_url: String,

    /// Description sent with the task-creation request
    pub task_description: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set to an empty
    /// string.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url =
            std::env::var("TASKBOARD_URL").unwrap_or_else(|_| DEFAULT_TASKBOARD_URL.to_string());
        if base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "TASKBOARD_URL".to_string(),
                "must not be empty".to_string(),
            ));
        }

        let task_description = std::env::var("TASK_DESCRIPTION")
            .unwrap_or_else(|_| DEFAULT_TASK_DESCRIPTION.to_string());
        if task_description.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "TASK_DESCRIPTION".to_string(),
                "must not be empty".to_string(),
            ));
        }

        Ok(Self {
            base_url,
            task_description,
        })
    }

    /// Create a config with custom values (useful for testing).
    pub fn new(base_url: impl Into<String>, task_description: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            task_description: task_description.into(),
        }
    }
}
