//! Batch conversion of one folder.
//!
//! Lists the folder once, keeps the entries whose name ends with the source
//! extension, and converts each into a sibling file with the target extension,
//! strictly one after another.
//!
//! # Example
//!
//! ```ignore
//! use vidbatch_core::batch::{BatchConverter, BatchSettings};
//! use vidbatch_core::converter::FfmpegConverter;
//!
//! let settings = BatchSettings::new("/videos", ".webm", ".mp4");
//! let batch = BatchConverter::new(settings, FfmpegConverter::with_defaults());
//!
//! let report = batch.run(&mut std::io::stdout()).await?;
//! println!("{} converted, {} failed", report.converted(), report.failed());
//! ```

mod discovery;
mod error;
mod runner;
mod types;

pub use discovery::{find_source_files, target_file_name};
pub use error::BatchError;
pub use runner::BatchConverter;
pub use types::{BatchReport, BatchSettings, FileOutcome, FileStatus};
