//! The record accessor interface consumed by the extractor tools.
//!
//! The vendor SDK that actually parses the RAW binary format lives behind this
//! trait. The tools never learn a record count up front: they probe successive
//! indices and rely on a distinguished [`Fetch::EndOfSequence`] result to know
//! when the sequence is exhausted. Probing past the end is the expected, normal
//! terminator, kept strictly apart from genuine read failures so that "no more
//! data" and "something broke reading record N" cannot be confused.

use thiserror::Error;

use crate::extract::Records;
use crate::record::{Record, RecordIndex};

/// Fallback description for vendor failures that carry no message.
const UNKNOWN_EXCEPTION: &str = "Unknown exception.";

/// Result of probing an accessor for the record at one index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetch {
    /// A record exists at the probed index.
    Found(Record),
    /// No record exists at the probed index; the sequence is complete.
    ///
    /// This is a normal outcome, not an error, and is the sole stopping
    /// condition for sequential extraction.
    EndOfSequence,
}

/// Failures reported by a record accessor.
///
/// End-of-sequence is deliberately not represented here; it travels through
/// [`Fetch`] instead, so every `Err` from an accessor is a hard failure.
#[derive(Debug, Error)]
pub enum AccessorError {
    /// The data source could not be opened.
    #[error("failed to open the raw file: {0}")]
    Open(String),

    /// The record at `index` exists (or should exist) but could not be read.
    #[error("failed to read record {index}: {message}")]
    Read {
        /// Index of the record that failed to read.
        index: RecordIndex,
        /// Vendor-reported failure description.
        message: String,
    },

    /// A file-level scalar (instrument model, acquisition date) could not be read.
    #[error("failed to read file metadata: {0}")]
    Metadata(String),
}

impl AccessorError {
    /// Open failure with the vendor's message, or the unknown-exception
    /// fallback when the vendor reports nothing usable.
    pub fn open(message: impl Into<String>) -> Self {
        Self::Open(vendor_message(message.into()))
    }

    /// Read failure at `index` with the vendor's message.
    pub fn read(index: RecordIndex, message: impl Into<String>) -> Self {
        Self::Read {
            index,
            message: vendor_message(message.into()),
        }
    }

    /// Metadata failure with the vendor's message.
    pub fn metadata(message: impl Into<String>) -> Self {
        Self::Metadata(vendor_message(message.into()))
    }
}

/// Some vendor exceptions surface without any description. The original tools
/// printed a fixed fallback in that case; keep the same behavior.
fn vendor_message(message: String) -> String {
    if message.trim().is_empty() {
        UNKNOWN_EXCEPTION.to_string()
    } else {
        message
    }
}

/// Indexed access to a vendor data source's records, plus the two file-level
/// scalars needed for the metadata preamble.
pub trait RecordAccessor {
    /// Probe for the record at `index`.
    ///
    /// Returns `Ok(Fetch::Found)` with the record, `Ok(Fetch::EndOfSequence)`
    /// when the index is past the last available record, and `Err` only for
    /// genuine failures.
    fn record_at(&mut self, index: RecordIndex) -> Result<Fetch, AccessorError>;

    /// Vendor-reported instrument model name (e.g. `"LTQ Orbitrap Velos"`).
    fn instrument_model(&self) -> Result<String, AccessorError>;

    /// Sample acquisition date, already formatted for text output.
    fn creation_date(&self) -> Result<String, AccessorError>;

    /// Iterate over all records starting at `origin`, stopping at the first
    /// end-of-sequence probe.
    fn records(&mut self, origin: RecordIndex) -> Records<'_, Self>
    where
        Self: Sized,
    {
        Records::new(self, origin)
    }
}

/// In-memory accessor backed by a vector of records.
///
/// Used by the test suite and useful for wiring the extraction pipeline without
/// a vendor runtime installed.
#[derive(Debug, Clone)]
pub struct MemoryAccessor {
    origin: RecordIndex,
    records: Vec<Record>,
    instrument_model: String,
    creation_date: String,
}

impl MemoryAccessor {
    /// Create an accessor holding `records`, addressable starting at `origin`.
    pub fn new(origin: RecordIndex, records: Vec<Record>) -> Self {
        Self {
            origin,
            records,
            instrument_model: "LTQ Orbitrap Velos".to_string(),
            creation_date: "2014-Aug-26 03:05:12 UTC".to_string(),
        }
    }

    /// Override the instrument model name.
    pub fn with_instrument_model(mut self, model: impl Into<String>) -> Self {
        self.instrument_model = model.into();
        self
    }

    /// Override the acquisition date string.
    pub fn with_creation_date(mut self, date: impl Into<String>) -> Self {
        self.creation_date = date.into();
        self
    }
}

impl RecordAccessor for MemoryAccessor {
    fn record_at(&mut self, index: RecordIndex) -> Result<Fetch, AccessorError> {
        if index < self.origin {
            return Ok(Fetch::EndOfSequence);
        }
        match self.records.get((index - self.origin) as usize) {
            Some(record) => Ok(Fetch::Found(record.clone())),
            None => Ok(Fetch::EndOfSequence),
        }
    }

    fn instrument_model(&self) -> Result<String, AccessorError> {
        Ok(self.instrument_model.clone())
    }

    fn creation_date(&self) -> Result<String, AccessorError> {
        Ok(self.creation_date.clone())
    }
}
