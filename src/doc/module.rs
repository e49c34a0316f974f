//! The caller-owned module model assembled from one scan pass.

use std::collections::BTreeMap;

use log::info;
use serde::Serialize;

use super::scan::scan_doc;
use super::source::{DocSource, SourceError};
use crate::types::{classify, is_eligible, Constant, FilterPolicy, FunctionSignature, ParameterClass};

/// All accepted signatures and constants of one introspected Go module.
///
/// Owned by the caller of the parsing pass; there is no shared registry.
#[derive(Debug, Clone, Serialize)]
pub struct Module {
    /// Output-facing module name (last path segment, dashes mapped to
    /// underscores).
    pub name: String,
    /// The module path as given to `go doc`.
    pub path: String,
    /// Prefix for generated plugin names; may be empty.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub prefix: String,
    /// Signatures that passed the native-type filter, in input order.
    pub functions: Vec<FunctionSignature>,
    /// Constant-block entries, in input order.
    pub constants: Vec<Constant>,
}

impl Module {
    /// Load documentation text from `source` and build the module model.
    pub fn load(
        source: &dyn DocSource,
        module_path: &str,
        prefix: impl Into<String>,
        policy: FilterPolicy,
    ) -> Result<Module, SourceError> {
        let text = source.load(module_path)?;
        Ok(Module::from_doc(module_path, prefix, &text, policy))
    }

    /// Build the module model from already-fetched documentation text.
    pub fn from_doc(
        module_path: &str,
        prefix: impl Into<String>,
        text: &str,
        policy: FilterPolicy,
    ) -> Module {
        let scan = scan_doc(text);
        let parsed = scan.functions.len();

        let functions: Vec<FunctionSignature> = scan
            .functions
            .into_iter()
            .filter(|sig| is_eligible(sig, policy))
            .collect();

        info!(
            "{}: {} of {} parsed functions eligible, {} lines skipped",
            module_path,
            functions.len(),
            parsed,
            scan.skipped
        );

        Module {
            name: module_base_name(module_path),
            path: module_path.to_string(),
            prefix: prefix.into(),
            functions,
            constants: scan.constants,
        }
    }

    /// Group accepted signatures by the parameter class of their first
    /// argument, the shape the generator templates iterate over.
    ///
    /// Eligibility guarantees at least one argument per signature.
    pub fn functions_by_class(&self) -> BTreeMap<ParameterClass, Vec<&FunctionSignature>> {
        let mut map: BTreeMap<ParameterClass, Vec<&FunctionSignature>> = BTreeMap::new();
        for sig in &self.functions {
            if let Some(first) = sig.args.first() {
                map.entry(classify(&first.ty)).or_default().push(sig);
            }
        }
        map
    }
}

/// Derive the output-facing module name from a module path, e.g.
/// `github.com/acme/go-strutil` becomes `go_strutil`.
pub fn module_base_name(module_path: &str) -> String {
    module_path
        .rsplit('/')
        .next()
        .unwrap_or(module_path)
        .replace('-', "_")
}
