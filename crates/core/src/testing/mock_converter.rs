//! Mock converter for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::converter::{ConversionJob, ConversionResult, Converter, ConverterError};

/// A recorded conversion job for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedConversion {
    /// The job that was submitted.
    pub job: ConversionJob,
    /// Whether the conversion succeeded.
    pub success: bool,
}

/// Mock implementation of the Converter trait.
///
/// Provides controllable behavior for testing:
/// - Track conversion jobs for assertions
/// - Fail chosen input files with a chosen error
/// - Fail validation
///
/// Clones share state, so a test can keep a handle after moving one into a runner.
#[derive(Debug, Clone, Default)]
pub struct MockConverter {
    /// Recorded conversions, in call order.
    conversions: Arc<RwLock<Vec<RecordedConversion>>>,
    /// Errors to return, keyed by input file name. Each is returned once.
    file_errors: Arc<RwLock<HashMap<String, ConverterError>>>,
    /// If set, the next validation fails with this error.
    validate_error: Arc<RwLock<Option<ConverterError>>>,
}

impl MockConverter {
    /// Create a new mock converter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded conversions.
    pub async fn recorded_conversions(&self) -> Vec<RecordedConversion> {
        self.conversions.read().await.clone()
    }

    /// Get the jobs submitted so far, in call order.
    pub async fn recorded_jobs(&self) -> Vec<ConversionJob> {
        self.conversions
            .read()
            .await
            .iter()
            .map(|c| c.job.clone())
            .collect()
    }

    /// Make the conversion of the input named `file_name` fail with `error`.
    pub async fn fail_file(&self, file_name: impl Into<String>, error: ConverterError) {
        self.file_errors
            .write()
            .await
            .insert(file_name.into(), error);
    }

    /// Configure the next validation to fail with the given error.
    pub async fn set_validate_error(&self, error: ConverterError) {
        *self.validate_error.write().await = Some(error);
    }

    async fn take_file_error(&self, job: &ConversionJob) -> Option<ConverterError> {
        let name = job.input_path.file_name()?.to_string_lossy().to_string();
        self.file_errors.write().await.remove(&name)
    }
}

#[async_trait]
impl Converter for MockConverter {
    fn name(&self) -> &str {
        "mock"
    }

    async fn convert(&self, job: ConversionJob) -> Result<ConversionResult, ConverterError> {
        if let Some(err) = self.take_file_error(&job).await {
            self.conversions.write().await.push(RecordedConversion {
                job,
                success: false,
            });
            return Err(err);
        }

        self.conversions.write().await.push(RecordedConversion {
            job: job.clone(),
            success: true,
        });

        Ok(ConversionResult {
            output_path: job.output_path,
            output_size_bytes: 50 * 1024 * 1024,
            duration_ms: 0,
        })
    }

    async fn validate(&self) -> Result<(), ConverterError> {
        if let Some(err) = self.validate_error.write().await.take() {
            return Err(err);
        }
        Ok(())
    }
}
