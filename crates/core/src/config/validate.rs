use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Folder path is set and non-empty
/// - Source and target extensions are non-empty, start with '.', and differ
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    match &config.folder_path {
        Some(path) if !path.as_os_str().is_empty() => {}
        _ => return Err(ConfigError::MissingFolderPath),
    }

    validate_extension("source_extension", &config.source_extension)?;
    validate_extension("target_extension", &config.target_extension)?;

    if config.source_extension == config.target_extension {
        return Err(ConfigError::ValidationError(format!(
            "source_extension and target_extension are both {:?}",
            config.source_extension
        )));
    }

    Ok(())
}

fn validate_extension(key: &str, extension: &str) -> Result<(), ConfigError> {
    if extension.len() < 2 || !extension.starts_with('.') {
        return Err(ConfigError::ValidationError(format!(
            "{} must be a dot followed by at least one character, got {:?}",
            key, extension
        )));
    }
    Ok(())
}
