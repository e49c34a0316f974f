//! blobgen: a typed Bloblang plugin model from Go package documentation.
//!
//! The pipeline runs `go doc -all` over a module, parses each printed
//! function-declaration line into a [`FunctionSignature`], drops the
//! signatures whose argument types the generated wrappers cannot marshal,
//! and hands the surviving model to a downstream code generator as JSON.

mod doc;
mod parser;
pub(crate) mod settings;
pub(crate) mod types;

pub use doc::{module_base_name, scan_doc, DocSource, GoDoc, Module, ScanResult, SourceError};
pub use parser::{parse_declaration, resolve_arguments, resolve_returns, ParseError};
pub use settings::{discover_settings, load_settings, ModuleSettings, Settings};
pub use types::{
    bloblang_type, classify, is_eligible, is_native_type, Arg, Constant, FilterPolicy,
    FunctionSignature, ParameterClass,
};
