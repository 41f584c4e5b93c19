//! Sequential batch runner.

use std::io::Write;
use tracing::{debug, info, warn};

use crate::converter::{ConversionJob, Converter};

use super::discovery::{find_source_files, target_file_name};
use super::error::BatchError;
use super::types::{BatchReport, BatchSettings, FileOutcome, FileStatus};

/// Converts every matching file of one folder, one at a time.
pub struct BatchConverter<C: Converter> {
    settings: BatchSettings,
    converter: C,
}

impl<C: Converter> BatchConverter<C> {
    /// Creates a new batch converter.
    pub fn new(settings: BatchSettings, converter: C) -> Self {
        Self {
            settings,
            converter,
        }
    }

    /// Returns the settings this batch runs with.
    pub fn settings(&self) -> &BatchSettings {
        &self.settings
    }

    /// Returns the underlying converter.
    pub fn converter(&self) -> &C {
        &self.converter
    }

    /// Runs the batch, writing one status line per matched file to `out`.
    ///
    /// Each conversion completes before the next starts. A transcode failure is
    /// reported and the batch moves on; any other error stops the batch and is
    /// returned, leaving the remaining files untouched.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<BatchReport, BatchError> {
        let folder = &self.settings.folder;
        let sources = find_source_files(folder, &self.settings.source_extension).await?;

        info!(
            "Found {} {} file(s) in {}",
            sources.len(),
            self.settings.source_extension,
            folder.display()
        );

        let mut report = BatchReport::default();

        for source_name in sources {
            let target_name = target_file_name(
                &source_name,
                &self.settings.source_extension,
                &self.settings.target_extension,
            );
            let job = ConversionJob::new(folder.join(&source_name), folder.join(&target_name));

            let status = match self.converter.convert(job).await {
                Ok(result) => {
                    debug!(
                        "{} -> {} ({} bytes in {} ms)",
                        source_name, target_name, result.output_size_bytes, result.duration_ms
                    );
                    FileStatus::Converted
                }
                Err(e) if e.is_transcode_failure() => {
                    warn!("Conversion of {} failed: {}", source_name, e);
                    FileStatus::Failed {
                        diagnostic: e.diagnostic(),
                    }
                }
                Err(e) => {
                    return Err(BatchError::Conversion {
                        file: source_name,
                        source: e,
                    })
                }
            };

            let outcome = FileOutcome {
                source_name,
                target_name,
                status,
            };
            writeln!(out, "{}", outcome).map_err(BatchError::Report)?;
            report.outcomes.push(outcome);
        }

        info!(
            "Batch finished: {} converted, {} failed",
            report.converted(),
            report.failed()
        );

        Ok(report)
    }
}
