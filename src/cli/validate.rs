//! Validate command implementation.

use clap::Args;

use crate::error::{FatexError, Result};
use crate::output::{plural, Printer};
use crate::validation::{print_diagnostics, validate_assembly, Diagnostic, ValidationResult};

use super::project::{Project, SourceArgs};

/// Check a release without writing any packages
#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let project = Project::load(&args.source, printer)?;

    let result = match project.assemble() {
        Ok(assembly) => validate_assembly(&assembly, &project.catalog),
        Err(e @ (FatexError::NameCollision { .. } | FatexError::MissingVariant { .. })) => {
            let mut result = ValidationResult::new();
            result.push(Diagnostic::error("fatex::validate::assembly", e.to_string()));
            result
        }
        Err(e) => return Err(e),
    };

    print_diagnostics(&result, printer);

    let failed = result.has_errors() || (args.strict && result.has_warnings());
    if failed {
        return Err(FatexError::Validation {
            message: format!(
                "{}, {}",
                plural(result.error_count(), "error", "errors"),
                plural(result.warning_count(), "warning", "warnings")
            ),
            help: args
                .strict
                .then(|| "Warnings fail validation in --strict mode".to_string()),
        });
    }

    printer.status(
        "Validated",
        &format!(
            "{} {} release ({})",
            plural(project.records.len(), "icon", "icons"),
            project.family,
            plural(result.warning_count(), "warning", "warnings")
        ),
    );
    Ok(())
}
