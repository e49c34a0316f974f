//! Scanning of `go doc -all` output into a module model.
//!
//! This module provides:
//! - `scan_doc` to walk the documentation line list, pairing declarations
//!   with their description lines and collecting constant blocks
//! - `DocSource` and the `GoDoc` implementation that shells out to the Go
//!   toolchain for the raw text
//! - `Module`, the caller-owned collection of accepted signatures handed
//!   to the downstream generator

mod module;
mod scan;
mod source;

pub use module::{module_base_name, Module};
pub use scan::{scan_doc, ScanResult};
pub use source::{DocSource, GoDoc, SourceError};
