//! `RecordAccessor` implementation on top of `thermorawfilereader`.

use std::path::Path;

use chrono::{DateTime, Utc};
use log::debug;
use thermorawfilereader::RawFileReader;

use crate::accessor::{AccessorError, Fetch, RecordAccessor};
use crate::record::{Record, RecordIndex};
use crate::thermo::ThermoError;

/// Which indexed record family the accessor serves.
///
/// The vendor file carries both per-scan status-log data and per-segment tune
/// data; each extractor tool reads exactly one of the two. The metadata tool
/// never probes records, so either variant works for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSource {
    /// Per-scan extended header (status log) pairs, probed 1-based.
    StatusLog,
    /// Per-segment tune method parameters, probed 0-based.
    TuneMethod,
}

/// Check if the current platform supports Thermo RAW file reading.
fn check_platform_support() -> Result<(), ThermoError> {
    // Thermo's RawFileReader .NET assemblies only support x86/x86_64 architectures
    #[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
    {
        return Err(ThermoError::PlatformNotSupported(format!(
            "Current architecture '{}' is not supported. \
             Thermo RAW file reading requires Windows, Linux, or macOS on x86/x86_64.",
            std::env::consts::ARCH
        )));
    }

    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    Ok(())
}

/// Record accessor backed by a Thermo RAW file.
pub struct ThermoAccessor {
    reader: RawFileReader,
    source: RecordSource,
}

impl ThermoAccessor {
    /// Open a RAW file and serve records from `source`.
    ///
    /// Path existence and extension checks happen in the tool driver before
    /// this is called; failures here are vendor-level open failures.
    pub fn open<P: AsRef<Path>>(path: P, source: RecordSource) -> Result<Self, ThermoError> {
        check_platform_support()?;

        let path = path.as_ref();
        let mut reader = RawFileReader::open(path)
            .map_err(|e| ThermoError::OpenError(format!("{}: {}", path.display(), e)))?;

        // Monitoring extraction never touches peak data; skip signal decoding.
        reader.set_signal_loading(false);

        debug!("opened {} with {} spectra", path.display(), reader.len());
        Ok(Self { reader, source })
    }

    fn status_log_at(&mut self, scan: RecordIndex) -> Result<Fetch, AccessorError> {
        // Scans are numbered from 1 on the wire; the vendor reader indexes
        // from 0.
        if scan == 0 || scan as usize > self.reader.len() {
            return Ok(Fetch::EndOfSequence);
        }
        let index = (scan - 1) as usize;

        let trailers = self
            .reader
            .get_raw_trailers_for(index)
            .ok_or_else(|| AccessorError::read(scan, format!("no extended header for scan {scan}")))?;

        let mut record = Record::new();
        for item in trailers.iter() {
            record.push(item.label.clone(), item.value.clone());
        }
        Ok(Fetch::Found(record))
    }

    fn tune_method_at(&mut self, segment: RecordIndex) -> Result<Fetch, AccessorError> {
        if segment > u8::MAX as u64 {
            return Ok(Fetch::EndOfSequence);
        }
        let method = self
            .reader
            .instrument_method(segment as u8)
            .map_err(|e| AccessorError::read(segment, e.to_string()))?;

        match method {
            Some(method) => {
                let text = method.text().unwrap_or_default();
                Ok(Fetch::Found(parse_method_text(&text)))
            }
            None => Ok(Fetch::EndOfSequence),
        }
    }
}

impl RecordAccessor for ThermoAccessor {
    fn record_at(&mut self, index: RecordIndex) -> Result<Fetch, AccessorError> {
        match self.source {
            RecordSource::StatusLog => self.status_log_at(index),
            RecordSource::TuneMethod => self.tune_method_at(index),
        }
    }

    fn instrument_model(&self) -> Result<String, AccessorError> {
        let model = self.reader.instrument_model();
        Ok(model.model().unwrap_or("Unknown").to_string())
    }

    fn creation_date(&self) -> Result<String, AccessorError> {
        let description = self.reader.file_description();
        match description.creation_date() {
            Some(raw) => Ok(format_sample_date(raw)),
            None => Err(AccessorError::metadata("no creation date in file header")),
        }
    }
}

/// Flatten the vendor's method report text into label/value pairs.
///
/// Method reports are "label: value" lines interleaved with section headers.
/// A line without a separator is kept as a label with an empty value so the
/// downstream consumer sees every line of the report.
fn parse_method_text(text: &str) -> Record {
    let mut record = Record::new();
    for line in text.lines() {
        let line = line.trim_end();
        if line.trim().is_empty() {
            continue;
        }
        match line.split_once(':') {
            Some((label, value)) => record.push(label.trim(), value.trim()),
            None => record.push(line.trim(), ""),
        }
    }
    record
}

/// Format an acquisition timestamp the way the downstream importer parses it
/// (`yyyy-MMM-dd hh:mm:ss zzz`, 12-hour clock).
///
/// Timestamps the vendor reports in a shape chrono cannot parse pass through
/// unchanged.
fn format_sample_date(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(date) => date
            .with_timezone(&Utc)
            .format("%Y-%b-%d %I:%M:%S UTC")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_text_flattens_to_pairs() {
        let record = parse_method_text(
            "MS Run Time (min): 60.00\n\nTune Data\nCapillary Temp (C): 275.0\n",
        );
        let pairs: Vec<_> = record.pairs().collect();
        assert_eq!(
            pairs,
            vec![
                ("MS Run Time (min)", "60.00"),
                ("Tune Data", ""),
                ("Capillary Temp (C)", "275.0"),
            ]
        );
    }

    #[test]
    fn rfc3339_date_is_reformatted() {
        assert_eq!(
            format_sample_date("2014-08-26T15:05:12+00:00"),
            "2014-Aug-26 03:05:12 UTC"
        );
    }

    #[test]
    fn unparseable_date_passes_through() {
        assert_eq!(
            format_sample_date("26/08/2014 15:05"),
            "26/08/2014 15:05"
        );
    }

    #[test]
    fn open_rejects_on_unsupported_platform_or_missing_file() {
        let result = ThermoAccessor::open("/nonexistent/file.raw", RecordSource::StatusLog);
        assert!(result.is_err());
    }
}
