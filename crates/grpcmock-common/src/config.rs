/// Failure to load configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Env(#[from] envy::Error),
}

/// Trait for loading configuration from environment variables.
///
/// Implementors derive `serde::Deserialize`; field `foo_bar` is read from
/// `FOO_BAR`. Use `#[serde(default = ...)]` for optional settings.
pub trait Config: Sized + serde::de::DeserializeOwned {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(envy::from_env()?)
    }

    /// Load from explicit `(NAME, value)` pairs instead of the process
    /// environment.
    fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter(vars)?)
    }
}
