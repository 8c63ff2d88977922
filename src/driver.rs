//! Tool drivers: the shared orchestration behind the three extractor binaries.
//!
//! Every tool moves through the same states: validate the input path, open the
//! accessor, optionally emit the metadata preamble, then drain the indexed
//! sequence through the frame writer. The variants differ only in which of
//! those steps they perform and under which numbering convention.
//!
//! Exit-code policy: usage and precondition failures exit -1, matching the
//! historical tools; any accessor failure (open, preamble, or mid-drain) exits
//! 1. The historical tools returned 0 after swallowing extraction failures,
//! which is treated here as an oversight rather than a contract.

use std::io::Write;
use std::path::Path;

use log::{debug, info};
use thiserror::Error;

use crate::accessor::{AccessorError, RecordAccessor};
use crate::controlled_vocabulary::InstrumentModel;
use crate::emit::{Boundary, FrameWriter};
use crate::record::RecordIndex;

/// First probed index for status-log scans.
const SCAN_ORIGIN: RecordIndex = 1;
/// First probed index for tune-method segments.
const SEGMENT_ORIGIN: RecordIndex = 0;

/// Failures a tool run can end in.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The input path does not name an existing file.
    #[error("File <{0}> does not exist")]
    NotFound(String),

    /// The input file exists but does not carry the vendor extension.
    #[error("File <{0}> is not a *.raw file")]
    NotRawFile(String),

    /// The accessor failed to open or to read.
    #[error(transparent)]
    Accessor(#[from] AccessorError),

    /// The output stream could not be written.
    #[error("failed to write extractor output: {0}")]
    Io(#[from] std::io::Error),
}

impl ToolError {
    /// Process exit status for this failure.
    ///
    /// Precondition failures keep the historical -1; everything past
    /// validation exits 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound(_) | Self::NotRawFile(_) => -1,
            Self::Accessor(_) | Self::Io(_) => 1,
        }
    }

    /// Report this failure on stderr.
    ///
    /// Precondition messages are printed bare, exactly as the historical tools
    /// printed them; failures past validation carry the `Error: ` prefix.
    pub fn report(&self) {
        match self {
            Self::NotFound(_) | Self::NotRawFile(_) => eprintln!("{self}"),
            Self::Accessor(_) | Self::Io(_) => eprintln!("Error: {self}"),
        }
    }
}

/// The three extractor variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    /// Per-scan status-log pairs, 1-based, `--END_OF_SCAN_<n>` framing.
    StatusLog,
    /// The fixed two-line preamble only.
    Metadata,
    /// Preamble, then per-segment tune parameters, 0-based,
    /// `--END_OF_SEGMENT_<n>` framing.
    TuneMethod,
}

/// Check that `path` names an existing file with a `.raw` extension
/// (case-insensitive).
///
/// Runs before any accessor is constructed; a violation means no vendor code
/// is touched at all.
pub fn validate_raw_path(path: &Path) -> Result<(), ToolError> {
    if !path.exists() {
        return Err(ToolError::NotFound(path.display().to_string()));
    }
    let is_raw = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("raw"))
        .unwrap_or(false);
    if !is_raw {
        return Err(ToolError::NotRawFile(path.display().to_string()));
    }
    Ok(())
}

/// Validate `path`, open an accessor through `open`, and run the `kind`
/// pipeline writing extracted text to `out`.
pub fn run_tool<A, F, W>(kind: ToolKind, path: &Path, open: F, out: W) -> Result<(), ToolError>
where
    A: RecordAccessor,
    F: FnOnce(&Path) -> Result<A, AccessorError>,
    W: Write,
{
    validate_raw_path(path)?;
    let mut accessor = open(path)?;
    info!("opened {}", path.display());

    match kind {
        ToolKind::StatusLog => run_status_log(&mut accessor, out),
        ToolKind::Metadata => run_metadata(&mut accessor, out),
        ToolKind::TuneMethod => run_tune_method(&mut accessor, out),
    }
}

/// Status-log pipeline: drain scans from index 1 with scan framing.
pub fn run_status_log<A: RecordAccessor, W: Write>(
    accessor: &mut A,
    out: W,
) -> Result<(), ToolError> {
    let mut frames = FrameWriter::with_boundary(out, Boundary::Scan);
    drain(accessor, &mut frames, SCAN_ORIGIN)?;
    frames.flush()?;
    Ok(())
}

/// Metadata pipeline: the preamble alone, no indexed sequence.
pub fn run_metadata<A: RecordAccessor, W: Write>(
    accessor: &mut A,
    out: W,
) -> Result<(), ToolError> {
    let mut frames = FrameWriter::new(out);
    write_preamble(accessor, &mut frames)?;
    frames.flush()?;
    Ok(())
}

/// Tune-method pipeline: preamble, then segments from index 0 with segment
/// framing.
pub fn run_tune_method<A: RecordAccessor, W: Write>(
    accessor: &mut A,
    out: W,
) -> Result<(), ToolError> {
    let mut frames = FrameWriter::with_boundary(out, Boundary::Segment);
    write_preamble(accessor, &mut frames)?;
    drain(accessor, &mut frames, SEGMENT_ORIGIN)?;
    frames.flush()?;
    Ok(())
}

/// Emit the fixed single-record preamble: acquisition date, then the
/// instrument model translated to its CV accession.
fn write_preamble<A: RecordAccessor, W: Write>(
    accessor: &A,
    frames: &mut FrameWriter<W>,
) -> Result<(), ToolError> {
    let date = accessor.creation_date()?;
    let model_name = accessor.instrument_model()?;
    let model = InstrumentModel::from_model_name(&model_name);
    debug!("instrument model {model_name:?} translated to {}", model.accession());

    frames.write_pair("Sample date", &date)?;
    frames.write_pair("Instrument model CV-term", model.accession())?;
    Ok(())
}

/// Run the sequential extractor to completion, framing each record.
///
/// End of sequence is the sole success terminator; a read failure aborts the
/// drain, and output already written stays written.
fn drain<A: RecordAccessor, W: Write>(
    accessor: &mut A,
    frames: &mut FrameWriter<W>,
    origin: RecordIndex,
) -> Result<(), ToolError> {
    let mut count = 0u64;
    for item in accessor.records(origin) {
        let (index, record) = item?;
        frames.write_record(&record, index)?;
        count += 1;
    }
    info!("extracted {count} records");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessor::{Fetch, MemoryAccessor};
    use crate::record::Record;
    use std::fs::File;

    fn status_log_output(accessor: &mut MemoryAccessor) -> String {
        let mut out = Vec::new();
        run_status_log(accessor, &mut out).expect("status log run");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn missing_file_fails_validation() {
        let err = validate_raw_path(Path::new("/no/such/sample.raw")).expect_err("must fail");
        assert_eq!(err.to_string(), "File </no/such/sample.raw> does not exist");
        assert_eq!(err.exit_code(), -1);
    }

    #[test]
    fn wrong_extension_fails_validation() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("sample.dat");
        File::create(&path).expect("create fixture");

        let err = validate_raw_path(&path).expect_err("must fail");
        assert!(err.to_string().ends_with("is not a *.raw file"));
        assert_eq!(err.exit_code(), -1);
    }

    #[test]
    fn raw_extension_is_case_insensitive() {
        let dir = tempfile::tempdir().expect("tempdir");
        for name in ["a.raw", "b.RAW", "c.Raw"] {
            let path = dir.path().join(name);
            File::create(&path).expect("create fixture");
            validate_raw_path(&path).expect("accepted");
        }
    }

    #[test]
    fn validation_runs_before_open() {
        let opened = std::cell::Cell::new(false);
        let result = run_tool(
            ToolKind::StatusLog,
            Path::new("/no/such/sample.raw"),
            |_| {
                opened.set(true);
                Ok(MemoryAccessor::new(1, Vec::new()))
            },
            Vec::new(),
        );
        assert!(result.is_err());
        assert!(!opened.get());
    }

    #[test]
    fn status_log_single_scan() {
        let mut accessor = MemoryAccessor::new(1, vec![Record::new().with("T", "1")]);
        assert_eq!(status_log_output(&mut accessor), "T\t1\n--END_OF_SCAN_1\n");
    }

    #[test]
    fn status_log_numbering_starts_at_one() {
        let mut accessor = MemoryAccessor::new(
            1,
            vec![
                Record::new().with("a", "1"),
                Record::new().with("b", "2"),
            ],
        );
        assert_eq!(
            status_log_output(&mut accessor),
            "a\t1\n--END_OF_SCAN_1\nb\t2\n--END_OF_SCAN_2\n"
        );
    }

    #[test]
    fn status_log_zero_scans_is_success() {
        let mut accessor = MemoryAccessor::new(1, Vec::new());
        assert_eq!(status_log_output(&mut accessor), "");
    }

    #[test]
    fn metadata_preamble() {
        let mut accessor = MemoryAccessor::new(1, Vec::new())
            .with_instrument_model("LTQ Orbitrap Velos")
            .with_creation_date("2014-Aug-26 03:05:12 UTC");

        let mut out = Vec::new();
        run_metadata(&mut accessor, &mut out).expect("metadata run");
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "Sample date\t2014-Aug-26 03:05:12 UTC\n\
             Instrument model CV-term\tMS:1001742\n"
        );
    }

    #[test]
    fn metadata_unknown_model_uses_generic_term() {
        let mut accessor = MemoryAccessor::new(1, Vec::new())
            .with_instrument_model("Mystery Box 9000");

        let mut out = Vec::new();
        run_metadata(&mut accessor, &mut out).expect("metadata run");
        assert!(String::from_utf8(out)
            .expect("utf8")
            .contains("Instrument model CV-term\tMS:1000031"));
    }

    #[test]
    fn tune_method_header_then_segments_from_zero() {
        let mut accessor = MemoryAccessor::new(
            0,
            vec![
                Record::new().with("Source voltage", "4.1"),
                Record::new(),
            ],
        )
        .with_instrument_model("Q Exactive")
        .with_creation_date("2015-Jan-02 11:30:00 UTC");

        let mut out = Vec::new();
        run_tune_method(&mut accessor, &mut out).expect("tune method run");
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "Sample date\t2015-Jan-02 11:30:00 UTC\n\
             Instrument model CV-term\tMS:1001911\n\
             Source voltage\t4.1\n\
             --END_OF_SEGMENT_0\n\
             --END_OF_SEGMENT_1\n"
        );
    }

    #[test]
    fn read_failure_exits_nonzero_and_keeps_partial_output() {
        struct FailsAfterOne {
            inner: MemoryAccessor,
        }
        impl RecordAccessor for FailsAfterOne {
            fn record_at(&mut self, index: RecordIndex) -> Result<Fetch, AccessorError> {
                if index > 1 {
                    Err(AccessorError::read(index, "unreadable packet"))
                } else {
                    self.inner.record_at(index)
                }
            }
            fn instrument_model(&self) -> Result<String, AccessorError> {
                self.inner.instrument_model()
            }
            fn creation_date(&self) -> Result<String, AccessorError> {
                self.inner.creation_date()
            }
        }

        let mut accessor = FailsAfterOne {
            inner: MemoryAccessor::new(1, vec![Record::new().with("T", "1")]),
        };
        let mut out = Vec::new();
        let err = run_status_log(&mut accessor, &mut out).expect_err("must fail");
        assert_eq!(err.exit_code(), 1);
        // The first scan was already written and is not retracted.
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "T\t1\n--END_OF_SCAN_1\n"
        );
    }
}
