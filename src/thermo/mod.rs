//! Thermo RAW file access for the extractor tools.
//!
//! This module adapts the `thermorawfilereader` crate, which wraps the official
//! .NET RawFileReader library, to the [`RecordAccessor`] interface the tools
//! consume.
//!
//! # Requirements
//!
//! - .NET 8 runtime must be installed on the system
//! - Thermo's RawFileReader license terms apply (bundled via thermorawfilereader)
//!
//! # Platform Support
//!
//! Thermo's RawFileReader .NET assemblies require x86/x86_64. On other
//! architectures (including Apple Silicon), opening a file fails with a
//! `PlatformNotSupported` error.
//!
//! [`RecordAccessor`]: crate::accessor::RecordAccessor

pub mod accessor;
pub mod error;

pub use accessor::{RecordSource, ThermoAccessor};
pub use error::ThermoError;
