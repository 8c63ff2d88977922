//! # rawmon - Instrument Monitoring Extractors for Thermo RAW Files
//!
//! `rawmon` is a family of small command-line extractors that pull instrument
//! metadata, status-log key/value pairs, and tune-method parameters out of
//! Thermo RAW files and print them as a line-oriented text stream for a
//! downstream importer.
//!
//! ## The extraction protocol
//!
//! All three tools share one pipeline:
//!
//! - A [`RecordAccessor`](accessor::RecordAccessor) exposes, per index, either
//!   a record's label/value pairs or a distinguished end-of-sequence result.
//!   The vendor SDK lives behind this trait and is never consulted about a
//!   total count.
//! - The sequential extractor ([`Records`](extract::Records)) probes
//!   successive indices from a fixed origin and stops at the first
//!   end-of-sequence result. Probing past the end is the expected terminator,
//!   not an error.
//! - The [`FrameWriter`](emit::FrameWriter) flattens each record into
//!   tab-separated `label\tvalue` lines and, for the sequence-producing tools,
//!   appends a `--END_OF_SCAN_<n>` / `--END_OF_SEGMENT_<n>` boundary line so a
//!   line-oriented consumer can re-segment the flat stream.
//!
//! Two numbering conventions are deliberately preserved: status-log scans are
//! 1-based, tune-method segments are 0-based. Downstream consumers parse the
//! literal boundary text, so unifying them would break compatibility.
//!
//! ## Quick Start
//!
//! ```rust
//! use rawmon::accessor::MemoryAccessor;
//! use rawmon::driver::run_status_log;
//! use rawmon::record::Record;
//!
//! let mut accessor = MemoryAccessor::new(1, vec![
//!     Record::new().with("Ion Injection Time (ms)", "11.4"),
//! ]);
//!
//! let mut out = Vec::new();
//! run_status_log(&mut accessor, &mut out)?;
//! assert_eq!(out, b"Ion Injection Time (ms)\t11.4\n--END_OF_SCAN_1\n");
//! # Ok::<(), rawmon::driver::ToolError>(())
//! ```
//!
//! ## The tools
//!
//! | Tool | Emits |
//! |------|-------|
//! | `thermo-status-log` | per-scan status pairs, `--END_OF_SCAN_<n>` framing, scans from 1 |
//! | `thermo-metadata` | `Sample date` and `Instrument model CV-term` lines only |
//! | `thermo-tune-method` | metadata header, then per-segment tune pairs, `--END_OF_SEGMENT_<n>` framing, segments from 0 |
//!
//! The binaries require the `thermo` feature, which pulls in the
//! `thermorawfilereader` vendor bridge (and a .NET 8 runtime at run time). The
//! library core has no vendor dependency and is what the test suite exercises.
//!
//! ## Architecture
//!
//! - [`record`]: the ordered label/value record type
//! - [`accessor`]: the accessor trait, its error taxonomy, and an in-memory
//!   implementation
//! - [`extract`]: the sequential probe loop
//! - [`emit`]: tab-separated framing with boundary markers
//! - [`controlled_vocabulary`]: instrument-model CV translation
//! - [`driver`]: per-tool orchestration and exit-code policy
//! - [`thermo`]: the vendor bridge (feature `thermo`)

#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod accessor;
pub mod controlled_vocabulary;
pub mod driver;
pub mod emit;
pub mod extract;
pub mod record;

#[cfg(feature = "thermo")]
pub mod thermo;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::accessor::{AccessorError, Fetch, MemoryAccessor, RecordAccessor};
    pub use crate::controlled_vocabulary::{CvTerm, InstrumentModel};
    pub use crate::driver::{
        run_metadata, run_status_log, run_tool, run_tune_method, ToolError, ToolKind,
    };
    pub use crate::emit::{Boundary, FrameWriter};
    pub use crate::extract::Records;
    pub use crate::record::{Record, RecordIndex};

    #[cfg(feature = "thermo")]
    pub use crate::thermo::{RecordSource, ThermoAccessor, ThermoError};
}
