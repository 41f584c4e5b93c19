use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Environment variable naming the folder to convert.
pub const FOLDER_ENV_VAR: &str = "VIDEO_CONVERT_PATH";

/// Prefix for environment overrides of any config key (`__` separates nested keys).
const ENV_PREFIX: &str = "VIDBATCH_";

/// Load configuration from an optional TOML file, then environment overrides.
///
/// Layers, later ones winning:
/// - the TOML file, when a path is given (it must exist)
/// - `VIDBATCH_*` variables, e.g. `VIDBATCH_CONVERTER__FFMPEG_PATH`
/// - `VIDEO_CONVERT_PATH`, mapped to `folder_path`
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let mut figment = Figment::new();

    if let Some(path) = path {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        figment = figment.merge(Toml::file(path));
    }

    let config: Config = figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .merge(
            Env::raw()
                .only(&[FOLDER_ENV_VAR])
                .map(|_| "folder_path".into()),
        )
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;

    Ok(config)
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}
