use crate::error::{ConfigError, ConfigErrorExt};
use config::{Config, Environment, File, FileFormat, Map};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Built-in defaults shipped with the widget.
pub const DEFAULT_CONFIG: &str = include_str!("../flagdeck.toml");

/// Prefix of environment overrides, e.g. `FLAGDECK__HOST__BASE_URL`.
pub const ENV_PREFIX: &str = "FLAGDECK";
const ENV_SEPARATOR: &str = "__";

/// A reusable configuration loader that layers defaults, an override document
/// and environment variables.
///
/// 1. **Defaults**: the embedded [`DEFAULT_CONFIG`] TOML document.
/// 2. **Overrides**: an optional TOML string (e.g. read from a `<meta>` tag or a test).
/// 3. **Environment**: variables prefixed with `FLAGDECK__`; nested keys use double
///    underscores (`FLAGDECK__TOAST__MAX_STACK` maps to `toast.max_stack`). On
///    `wasm32` the process environment is empty, so this layer is a no-op there.
///
/// # Errors
/// Returns [`ConfigError`] if the override is not valid TOML or the merged
/// document does not match `T`.
///
/// # Example
/// ```rust
/// use flagdeck_kernel::config::load_config;
/// use flagdeck_kernel::domain::config::WidgetConfig;
///
/// let cfg: WidgetConfig = load_config(None).unwrap_or_default();
/// assert_eq!(cfg.host.locale, "en");
/// ```
pub fn load_config<T>(overrides: Option<&str>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_from(overrides, None)
}

/// Same as [`load_config`], reading environment overrides from `env` instead of
/// the process environment when it is `Some`.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_from<T>(
    overrides: Option<&str>,
    env: Option<Map<String, String>>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let mut builder =
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

    if let Some(raw) = overrides {
        debug!(bytes = raw.len(), "Applying config overrides");
        builder = builder.add_source(File::from_str(raw, FileFormat::Toml));
    }

    let environment = Environment::with_prefix(ENV_PREFIX)
        .prefix_separator(ENV_SEPARATOR)
        .separator(ENV_SEPARATOR)
        .try_parsing(true)
        .source(env);

    let config = builder
        .add_source(environment)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
