use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Profile store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Profile is not valid JSON: {0}")]
    MalformedProfile(#[from] serde_json::Error),

    #[error("No profile named '{0}'")]
    ProfileNotFound(String),

    #[error("Invalid profile name: {0}")]
    InvalidProfileName(String),
}
