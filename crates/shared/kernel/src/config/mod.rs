use config::{Config, Environment, File, Map};
use registrar_domain::constants::{DEFAULT_CONFIG_FILE, ENV_PREFIX, ENV_SEPARATOR};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, info};

/// Custom error type for config loading.
#[registrar_derive::registrar_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from an optional file overlaid with environment variables.
///
/// Layers, lowest priority first:
/// 1. **Defaults**: whatever `T`'s `#[serde(default)]` provides.
/// 2. **File**: `path` when given (must exist; format picked from the extension), otherwise
///    an optional `registrar.{toml,json,yaml,..}` in the working directory.
/// 3. **Environment**: variables prefixed with `REGISTRAR__`, nested with `__`
///    (e.g., `REGISTRAR__LOGGING__LEVEL=debug` maps to `logging.level`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing or unreadable, or if the
/// merged values do not deserialize into `T`.
///
/// # Example
/// ```rust
/// use registrar_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     prompt: String,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/missing.toml")).unwrap_or_default();
/// assert!(cfg.prompt.is_empty());
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load(path, None)
}

/// Same as [`load_config`], but reads overrides from `vars` instead of the process
/// environment. Keys keep their `REGISTRAR__` prefix.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_env<T, K, V>(
    path: Option<impl AsRef<Path>>,
    vars: impl IntoIterator<Item = (K, V)>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
    K: Into<String>,
    V: Into<String>,
{
    let vars: Map<String, String> = vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
    load(path, Some(vars))
}

fn load<T>(path: Option<impl AsRef<Path>>, vars: Option<Map<String, String>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let file = match &path {
        Some(p) => {
            info!("Loading config from {}", p.as_ref().display());
            File::from(p.as_ref()).required(true)
        },
        None => {
            debug!("No config path given, probing for optional '{DEFAULT_CONFIG_FILE}' file");
            File::with_name(DEFAULT_CONFIG_FILE).required(false)
        },
    };

    // The flattened config root buffers values, so env strings must arrive already typed.
    let env = Environment::with_prefix(ENV_PREFIX)
        .prefix_separator(ENV_SEPARATOR)
        .separator(ENV_SEPARATOR)
        .convert_case(config::Case::Snake)
        .try_parsing(true)
        .source(vars);

    let config = Config::builder()
        .add_source(file)
        .add_source(env)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
