//! List command implementation.
//!
//! Prints one line per packaged icon to stdout:
//! `<style> <macro> <internal name> <codepoint>`, tab separated.

use std::io::{self, Write};

use clap::Args;

use crate::assemble::Assembly;
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::types::Style;

use super::project::{Project, SourceArgs};

/// List the macros a build would generate
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Only list icons of this style
    #[arg(long)]
    pub style: Option<Style>,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let project = Project::load(&args.source, printer)?;
    let assembly = project.assemble()?;

    let lines = list_lines(&assembly, args.style);
    let mut stdout = io::stdout().lock();
    for line in &lines {
        writeln!(stdout, "{}", line)?;
    }

    printer.info("Listed", &plural(lines.len(), "macro", "macros"));
    Ok(())
}

fn list_lines(assembly: &Assembly, style: Option<Style>) -> Vec<String> {
    assembly
        .iter()
        .filter(|(s, _)| style.map_or(true, |wanted| wanted == *s))
        .flat_map(|(s, icons)| {
            icons.iter().map(move |icon| {
                format!(
                    "{}\t{}\t{}\t{}",
                    s, icon.macro_name, icon.internal_name, icon.codepoint_upper
                )
            })
        })
        .collect()
}
