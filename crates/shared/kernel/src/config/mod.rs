use config::{Config, Environment, Map};
use serde::de::DeserializeOwned;
use std::borrow::Cow;

/// Prefix of every environment variable read by [`load_config`].
pub const ENV_PREFIX: &str = "WORDCHECK";

/// Separator between the prefix and nested keys (`WORDCHECK__LOG__LEVEL` maps to `log.level`).
pub const ENV_SEPARATOR: &str = "__";

/// Custom error type for config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Adds `.context(...)` to results that can fail while loading configuration.
pub trait ConfigErrorExt<T> {
    /// Attaches a human-readable context to the error.
    ///
    /// # Errors
    /// Returns the original error, wrapped into [`ConfigError`] with the context attached.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError>;
}

impl<T> ConfigErrorExt<T> for Result<T, config::ConfigError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError> {
        self.map_err(|source| ConfigError::Config { source, context: Some(context.into()) })
    }
}

impl From<config::ConfigError> for ConfigError {
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

/// Loads configuration from the process environment.
///
/// Values come from variables prefixed with `WORDCHECK__`; nested structures are
/// reached with double underscores (e.g., `WORDCHECK__PALINDROME__STRICT=true`
/// maps to `palindrome.strict`). Fields without a variable keep the defaults of `T`,
/// so `T` is expected to carry `#[serde(default)]`.
///
/// No file source is read.
///
/// # Errors
/// Returns [`ConfigError`] if a variable cannot be deserialized into the field it targets.
pub fn load_config<T>() -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    build(environment())
}

/// Same as [`load_config`] but reads variables from `vars` instead of the process environment.
///
/// # Errors
/// Returns [`ConfigError`] if a variable cannot be deserialized into the field it targets.
pub fn load_config_from<T>(vars: Map<String, String>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    build(environment().source(Some(vars)))
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR).try_parsing(true)
}

fn build<T>(source: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    Config::builder()
        .add_source(source)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
