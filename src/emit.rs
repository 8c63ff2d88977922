//! Frame serialization: tab-separated label/value lines with optional boundary
//! markers.
//!
//! The boundary marker is a deliberately cheap framing device. It lets a
//! line-oriented downstream reader regroup a flat stream into per-record chunks
//! without a length prefix or a structured serialization format; labels and
//! values are not expected to collide with the marker's literal prefix.

use std::io::{self, Write};

use crate::record::{Record, RecordIndex};

/// Which boundary marker a tool emits after each record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// `--END_OF_SCAN_<n>`, used by the status-log tool (1-based scans).
    Scan,
    /// `--END_OF_SEGMENT_<n>`, used by the tune-method tool (0-based segments).
    Segment,
}

impl Boundary {
    fn tag(self) -> &'static str {
        match self {
            Boundary::Scan => "SCAN",
            Boundary::Segment => "SEGMENT",
        }
    }
}

/// Serializes records as `label\tvalue` lines on an output stream.
///
/// Pairs are written one per line in original order, label and value separated
/// by a single tab, with no quoting or escaping: embedded tabs and newlines
/// pass through verbatim. When a [`Boundary`] is configured, each record is
/// followed by its boundary line; a record with zero pairs still gets one.
pub struct FrameWriter<W: Write> {
    writer: W,
    boundary: Option<Boundary>,
}

impl<W: Write> FrameWriter<W> {
    /// Frame writer without boundary markers.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            boundary: None,
        }
    }

    /// Frame writer that follows each record with a boundary line.
    pub fn with_boundary(writer: W, boundary: Boundary) -> Self {
        Self {
            writer,
            boundary: Some(boundary),
        }
    }

    /// Write a single label/value line outside of any record framing.
    ///
    /// Used for the fixed metadata preamble, which is not part of the indexed
    /// sequence and never gets a boundary line.
    pub fn write_pair(&mut self, label: &str, value: &str) -> io::Result<()> {
        writeln!(self.writer, "{label}\t{value}")
    }

    /// Write one record, then its boundary line if framing is enabled.
    ///
    /// `index` is the record's position under the calling tool's numbering
    /// convention and appears verbatim in the boundary marker.
    pub fn write_record(&mut self, record: &Record, index: RecordIndex) -> io::Result<()> {
        for (label, value) in record.pairs() {
            writeln!(self.writer, "{label}\t{value}")?;
        }
        if let Some(boundary) = self.boundary {
            writeln!(self.writer, "--END_OF_{}_{}", boundary.tag(), index)?;
        }
        Ok(())
    }

    /// Flush the underlying stream.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Consume the frame writer, returning the underlying stream.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
