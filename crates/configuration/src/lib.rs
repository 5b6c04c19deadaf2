use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod profiles;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use profiles::ProfileStore;
pub use settings::{ApiSettings, Settings};

/// Loads the terminal configuration.
///
/// Layering: an optional `quantdesk.toml` in the working directory, then
/// `QUANTDESK_*` environment variables (e.g. `QUANTDESK_API__BASE_URL`
/// overrides `api.base_url`). Every member has a default, so running with no
/// configuration at all is valid.
pub fn load_settings() -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name("quantdesk").required(false))
        .add_source(
            config::Environment::with_prefix("QUANTDESK")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let settings = builder.try_deserialize::<Settings>()?;

    Ok(settings)
}
