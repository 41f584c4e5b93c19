pub mod batch;
pub mod config;
pub mod converter;
pub mod testing;

pub use batch::{BatchConverter, BatchError, BatchReport, BatchSettings, FileOutcome, FileStatus};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, FOLDER_ENV_VAR,
};
pub use converter::{
    ConversionJob, ConversionResult, Converter, ConverterConfig, ConverterError, FfmpegConverter,
};
