use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::converter::ConverterConfig;

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Folder whose entries are converted. Required at runtime, see `validate_config`.
    #[serde(default)]
    pub folder_path: Option<PathBuf>,
    /// Suffix identifying the files to convert (e.g. ".webm")
    #[serde(default = "default_source_extension")]
    pub source_extension: String,
    /// Suffix given to the produced files (e.g. ".mp4")
    #[serde(default = "default_target_extension")]
    pub target_extension: String,
    #[serde(default)]
    pub converter: ConverterConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            folder_path: None,
            source_extension: default_source_extension(),
            target_extension: default_target_extension(),
            converter: ConverterConfig::default(),
        }
    }
}

fn default_source_extension() -> String {
    ".webm".to_string()
}

fn default_target_extension() -> String {
    ".mp4".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml = r#"
folder_path = "/srv/recordings"
source_extension = ".mkv"
target_extension = ".mp4"

[converter]
ffmpeg_path = "/opt/ffmpeg/bin/ffmpeg"
overwrite = true
timeout_secs = 600
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.folder_path, Some(PathBuf::from("/srv/recordings")));
        assert_eq!(config.source_extension, ".mkv");
        assert_eq!(
            config.converter.ffmpeg_path,
            PathBuf::from("/opt/ffmpeg/bin/ffmpeg")
        );
        assert!(config.converter.overwrite);
        assert_eq!(config.converter.timeout_secs, Some(600));
    }

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.folder_path.is_none());
        assert_eq!(config.source_extension, ".webm");
        assert_eq!(config.target_extension, ".mp4");
        assert_eq!(config.converter.ffmpeg_path, PathBuf::from("ffmpeg"));
        assert!(!config.converter.overwrite);
    }

    #[test]
    fn test_deserialize_unknown_field_type_fails() {
        let toml = r#"
[converter]
timeout_secs = "forever"
"#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }
}
