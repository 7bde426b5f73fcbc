//! Rendering of check results as text or JSON.

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use casecheck_diagnostics::Severity;
use casecheck_linter::{NamingViolation, Role, ViolationRecord, classify};
use colored::Colorize;
use serde::Serialize;

use crate::check::FileResult;
use crate::{ExitStatus, OutputFormat};

/// A violation as written by `--format json`.
#[derive(Debug, Serialize)]
struct JsonViolation {
    path: String,
    rule: String,
    severity: Severity,
    message: String,
    #[serde(flatten)]
    record: ViolationRecord,
}

pub(crate) struct Report<'a> {
    results: &'a [FileResult],
}

impl<'a> Report<'a> {
    pub(crate) fn new(results: &'a [FileResult]) -> Self {
        Self { results }
    }

    fn violations(&self) -> impl Iterator<Item = (&'a Path, &'a NamingViolation)> + 'a {
        self.results.iter().flat_map(|result| {
            let path = result.path.as_path();
            result
                .outcome
                .iter()
                .flatten()
                .map(move |violation| (path, violation))
        })
    }

    fn failures(&self) -> impl Iterator<Item = (&'a Path, &'a anyhow::Error)> + 'a {
        self.results
            .iter()
            .filter_map(|result| result.outcome.as_ref().err().map(|err| (result.path.as_path(), err)))
    }

    pub(crate) fn violation_count(&self) -> usize {
        self.violations().count()
    }

    /// Violations per role, in [`Role::ALL`] order.
    pub(crate) fn counts_by_role(&self) -> [(Role, usize); Role::ALL.len()] {
        let mut counts = Role::ALL.map(|role| (role, 0));
        for (_, violation) in self.violations() {
            if let Some(entry) = counts.iter_mut().find(|(role, _)| *role == violation.role()) {
                entry.1 += 1;
            }
        }
        counts
    }

    /// Input errors win over violations.
    pub(crate) fn exit_status(&self) -> ExitStatus {
        if self.failures().next().is_some() {
            ExitStatus::Failure
        } else if self.violation_count() > 0 {
            ExitStatus::Violations
        } else {
            ExitStatus::Clean
        }
    }

    pub(crate) fn print(&self, format: OutputFormat, quiet: bool) -> Result<()> {
        for (path, err) in self.failures() {
            eprintln!("{} {}: {err:#}", "error:".red().bold(), path.display());
        }

        let stdout = io::stdout();
        let mut out = stdout.lock();
        match format {
            OutputFormat::Text => self.write_text(&mut out, quiet)?,
            OutputFormat::Json => self.write_json(&mut out)?,
        }
        out.flush()?;
        Ok(())
    }

    pub(crate) fn write_text(&self, out: &mut impl Write, quiet: bool) -> io::Result<()> {
        if !quiet {
            for (path, violation) in self.violations() {
                let diagnostic = violation.to_diagnostic();
                let severity = match diagnostic.severity {
                    Severity::Warning => diagnostic.severity.to_string().yellow(),
                    Severity::Error => diagnostic.severity.to_string().red(),
                };
                writeln!(
                    out,
                    "{}:{}:{}: {} {} {}",
                    path.display().to_string().bold(),
                    violation.occurrence.line,
                    violation.occurrence.column,
                    severity.bold(),
                    format!("[{}]", violation.role()).cyan(),
                    diagnostic.kind.body
                )?;
                if let Some(suggested) = &violation.suggested {
                    writeln!(out, "  {} rename to '{suggested}'", "help:".green())?;
                }
            }
        }

        let total = self.violation_count();
        let failed = self.failures().count();
        if total == 0 && failed == 0 {
            writeln!(out, "{}", "All checks passed!".green().bold())?;
            return Ok(());
        }

        if total > 0 {
            let files = self
                .results
                .iter()
                .filter(|result| result.outcome.as_ref().is_ok_and(|v| !v.is_empty()))
                .count();
            let by_role = self
                .counts_by_role()
                .into_iter()
                .filter(|(_, count)| *count > 0)
                .map(|(role, count)| format!("{role}: {count}"))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(
                out,
                "Found {} {} in {} {} ({by_role}).",
                total.to_string().red().bold(),
                plural(total, "violation", "violations"),
                files,
                plural(files, "file", "files"),
            )?;
        }
        if failed > 0 {
            writeln!(
                out,
                "{} {} could not be checked.",
                failed.to_string().red().bold(),
                plural(failed, "file", "files"),
            )?;
        }
        Ok(())
    }

    pub(crate) fn write_json(&self, out: &mut impl Write) -> Result<()> {
        let violations: Vec<JsonViolation> = self
            .violations()
            .map(|(path, violation)| {
                let diagnostic = violation.to_diagnostic();
                JsonViolation {
                    path: path.display().to_string(),
                    rule: diagnostic.kind.name,
                    severity: diagnostic.severity,
                    message: diagnostic.kind.body,
                    record: violation.to_record(),
                }
            })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &violations)?;
        writeln!(out)?;
        Ok(())
    }
}

fn plural<'s>(count: usize, one: &'s str, many: &'s str) -> &'s str {
    if count == 1 { one } else { many }
}

/// `casecheck classify`: one `name<TAB>style` line per name.
pub(crate) fn print_classifications(names: &[String]) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for name in names {
        writeln!(out, "{name}\t{}", classify(name))?;
    }
    Ok(())
}
