/// Prefix for environment overrides (`REGISTRAR__LOGGING__LEVEL=debug`).
pub const ENV_PREFIX: &str = "REGISTRAR";
/// Separator between nested keys in environment overrides.
pub const ENV_SEPARATOR: &str = "__";
/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "registrar";
