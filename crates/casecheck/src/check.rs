//! The `check` command: resolve settings, find files, check them in parallel.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use casecheck_config::Config;
use casecheck_linter::{NamingRules, NamingViolation, Properties, check_bytes};
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::report::Report;
use crate::{CheckArgs, ExitStatus};

/// Outcome of checking one file.
#[derive(Debug)]
pub(crate) struct FileResult {
    pub(crate) path: PathBuf,
    pub(crate) outcome: Result<Vec<NamingViolation>>,
}

pub(crate) fn run(args: &CheckArgs) -> Result<ExitStatus> {
    let config = resolve_config(args.config.as_deref())?;
    let rules = build_rules(&config, &args.rules)?;

    let roots = if args.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        args.paths.clone()
    };
    let files = collect_files(&roots, &config);
    tracing::debug!(files = files.len(), "collected files");

    let results = check_files(files, &rules);
    let report = Report::new(&results);
    report.print(args.format, args.quiet)?;
    Ok(report.exit_status())
}

/// Loads the explicit config, or the nearest `casecheck.toml`, or the defaults.
fn resolve_config(explicit: Option<&Path>) -> Result<Config> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => std::env::current_dir()
            .ok()
            .and_then(|cwd| Config::find(&cwd)),
    };

    match path {
        Some(path) => Config::load(&path).with_context(|| format!("invalid config {}", path.display())),
        None => Ok(Config::default()),
    }
}

/// Applies `[naming]` from the config, then each `--rule` override in order.
pub(crate) fn build_rules(config: &Config, overrides: &[String]) -> Result<NamingRules> {
    let properties: Properties = config.naming_entries().collect();
    let mut rules = NamingRules::try_from_config(&properties).context("invalid [naming] section")?;

    for entry in overrides {
        rules
            .apply_override(entry)
            .with_context(|| format!("invalid --rule '{entry}'"))?;
    }
    Ok(rules)
}

/// Expands directories into the files the config accepts. Paths named
/// explicitly are kept even when their extension does not match, so missing
/// files surface as errors.
pub(crate) fn collect_files(roots: &[PathBuf], config: &Config) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for root in roots {
        if !root.is_dir() {
            files.push(root.clone());
            continue;
        }

        let mut found: Vec<PathBuf> = WalkDir::new(root)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    tracing::warn!("skipping unreadable entry: {err}");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file() && config.accepts_path(entry.path()))
            .map(walkdir::DirEntry::into_path)
            .collect();
        found.sort();
        files.extend(found);
    }
    files
}

/// Checks every file with the same rules; results keep the input order.
pub(crate) fn check_files(files: Vec<PathBuf>, rules: &NamingRules) -> Vec<FileResult> {
    files
        .into_par_iter()
        .map(|path| {
            let outcome = check_file(&path, rules);
            FileResult { path, outcome }
        })
        .collect()
}

fn check_file(path: &Path, rules: &NamingRules) -> Result<Vec<NamingViolation>> {
    let bytes = std::fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
    let violations = check_bytes(&bytes, rules)?;
    tracing::debug!(path = %path.display(), violations = violations.len(), "checked file");
    Ok(violations)
}
