//! Validation system for assembled icon packages.
//!
//! Runs a suite of checks against an assembly and reports warnings.
//! Used by `fatex validate` and after every `fatex build`.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::assemble::Assembly;
use crate::output::Printer;
use crate::types::Catalog;

/// Run all validation checks against the assembly.
pub fn validate_assembly(assembly: &Assembly, catalog: &Catalog) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_identifier_charset(assembly));
    result.merge(checks::check_internal_names(assembly));
    result.merge(checks::check_duplicate_codepoints(assembly));
    result.merge(checks::check_skipped_styles(assembly));
    result.merge(checks::check_empty_variants(assembly, catalog));

    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = printer.severity(&d.severity.to_string(), d.severity == Severity::Error);
        eprintln!("  {}[{}]: {}", label, d.code, d.message);
        if let Some(help) = &d.help {
            eprintln!("    {} {}", printer.dim("help:"), help);
        }
    }
}
