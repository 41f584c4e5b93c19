//! Converter module for transcoding media files.
//!
//! This module provides the `Converter` trait and an FFmpeg implementation that
//! re-encodes one input file into one output file, letting FFmpeg pick codecs
//! from the output container.
//!
//! # Example
//!
//! ```ignore
//! use vidbatch_core::converter::{Converter, ConversionJob, FfmpegConverter};
//!
//! let converter = FfmpegConverter::with_defaults();
//!
//! // Validate ffmpeg is available
//! converter.validate().await?;
//!
//! let job = ConversionJob::new("/videos/talk.webm", "/videos/talk.mp4");
//! let result = converter.convert(job).await?;
//! println!("Converted in {} ms", result.duration_ms);
//! ```

mod config;
mod error;
mod ffmpeg;
mod traits;
mod types;

pub use config::ConverterConfig;
pub use error::ConverterError;
pub use ffmpeg::FfmpegConverter;
pub use traits::Converter;
pub use types::{ConversionJob, ConversionResult};
