//! Testing utilities and mock implementations.
//!
//! This module provides a mock `Converter` so batch behavior can be tested
//! without an ffmpeg installation.
//!
//! # Example
//!
//! ```rust,ignore
//! use vidbatch_core::testing::MockConverter;
//!
//! let converter = MockConverter::new();
//! converter.fail_file("broken.webm", ConverterError::conversion_failed("bad", None)).await;
//!
//! let batch = BatchConverter::new(settings, converter.clone());
//! batch.run(&mut std::io::sink()).await?;
//!
//! assert_eq!(converter.recorded_jobs().await.len(), 2);
//! ```

mod mock_converter;

pub use mock_converter::{MockConverter, RecordedConversion};

/// Test fixtures and helper functions.
pub mod fixtures {
    use std::path::Path;

    /// Create empty files with the given names inside `dir`.
    pub fn populate(dir: &Path, names: &[&str]) -> std::io::Result<()> {
        for name in names {
            std::fs::write(dir.join(name), b"")?;
        }
        Ok(())
    }
}
