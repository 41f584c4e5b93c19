//! End-to-end batch runs against a stand-in ffmpeg executable.
//!
//! The stand-in is a shell script that copies its input to its output, fails
//! like ffmpeg does for inputs whose name contains "broken", hangs after
//! writing a partial output for inputs whose name contains "slow", and refuses
//! to overwrite when given `-n`.

#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use tempfile::TempDir;

use vidbatch_core::{
    testing::fixtures, BatchConverter, BatchSettings, Converter, ConverterConfig,
    FfmpegConverter, FileStatus,
};

const FAKE_FFMPEG: &str = r#"#!/bin/sh
if [ "$1" = "-version" ]; then
  echo "ffmpeg version stand-in"
  exit 0
fi
input=""
prev=""
no_overwrite=0
for arg in "$@"; do
  if [ "$prev" = "-i" ]; then input="$arg"; fi
  if [ "$arg" = "-n" ]; then no_overwrite=1; fi
  prev="$arg"
  out="$arg"
done
case "$input" in
  *broken*)
    echo "$input: Invalid data found when processing input" >&2
    exit 1
    ;;
esac
if [ "$no_overwrite" = 1 ] && [ -e "$out" ]; then
  echo "File '$out' already exists. Exiting." >&2
  exit 1
fi
case "$input" in
  *slow*)
    printf 'partial' > "$out"
    exec sleep 30
    ;;
esac
cp "$input" "$out"
"#;

/// Installs the stand-in once per test binary.
///
/// Every test goes through here before spawning anything, so no test forks
/// while the script is still open for writing.
fn fake_ffmpeg() -> PathBuf {
    static BIN_DIR: OnceLock<TempDir> = OnceLock::new();
    let dir = BIN_DIR.get_or_init(|| {
        let dir = TempDir::new().expect("Failed to create bin dir");
        let path = dir.path().join("ffmpeg");
        std::fs::write(&path, FAKE_FFMPEG).expect("Failed to write fake ffmpeg");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to mark fake ffmpeg executable");
        dir
    });
    dir.path().join("ffmpeg")
}

fn status_lines(out: Vec<u8>) -> Vec<String> {
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn test_batch_with_stand_in_ffmpeg() {
    let folder = TempDir::new().unwrap();
    let ffmpeg = fake_ffmpeg();

    fixtures::populate(folder.path(), &["notes.txt", "existing.webm", "existing.mp4"]).unwrap();
    std::fs::write(folder.path().join("a.webm"), b"clip a").unwrap();
    std::fs::write(folder.path().join("broken.webm"), b"garbage").unwrap();

    let converter = FfmpegConverter::new(ConverterConfig::with_ffmpeg_path(ffmpeg));
    converter.validate().await.unwrap();
    let batch = BatchConverter::new(
        BatchSettings::new(folder.path(), ".webm", ".mp4"),
        converter,
    );

    let mut out = Vec::new();
    let report = batch.run(&mut out).await.unwrap();
    let lines = status_lines(out);

    assert_eq!(lines.len(), 3);
    assert!(lines.contains(&"a.webm converted -> a.mp4".to_string()));

    let broken = lines
        .iter()
        .find(|l| l.starts_with("broken.webm conversion failed: "))
        .expect("broken.webm should be reported");
    assert!(broken.contains("Invalid data found when processing input"));

    // Existing targets are left alone unless overwrite is enabled
    let existing = report
        .outcomes
        .iter()
        .find(|o| o.source_name == "existing.webm")
        .unwrap();
    match &existing.status {
        FileStatus::Failed { diagnostic } => assert!(diagnostic.contains("already exists")),
        other => panic!("unexpected status: {:?}", other),
    }

    assert_eq!(
        std::fs::read(folder.path().join("a.mp4")).unwrap(),
        b"clip a"
    );
    assert!(!folder.path().join("broken.mp4").exists());
    assert!(!folder.path().join("notes.mp4").exists());
    assert_eq!(report.converted(), 1);
    assert_eq!(report.failed(), 2);
}

#[tokio::test]
async fn test_timed_out_conversion_leaves_no_partial_target() {
    let folder = TempDir::new().unwrap();
    let ffmpeg = fake_ffmpeg();

    std::fs::write(folder.path().join("slow.webm"), b"clip slow").unwrap();
    std::fs::write(folder.path().join("a.webm"), b"clip a").unwrap();

    let converter = FfmpegConverter::new(ConverterConfig::with_ffmpeg_path(ffmpeg).with_timeout(1));
    let batch = BatchConverter::new(
        BatchSettings::new(folder.path(), ".webm", ".mp4"),
        converter,
    );

    let started = Instant::now();
    let mut out = Vec::new();
    let report = batch.run(&mut out).await.unwrap();
    assert!(started.elapsed() < Duration::from_secs(20));

    let lines = status_lines(out);
    assert_eq!(lines.len(), 2);
    assert!(lines
        .contains(&"slow.webm conversion failed: Conversion timed out after 1 seconds".to_string()));
    assert!(lines.contains(&"a.webm converted -> a.mp4".to_string()));

    assert!(!folder.path().join("slow.mp4").exists());
    assert!(folder.path().join("slow.webm").exists());
    assert_eq!(report.failed(), 1);
}
