//! Checks standard input, a single file or a directory of `.json` files and
//! prints a human-readable verdict.
//!
//! Verdicts go to `out`, per-document diagnostics to `err`. Every function
//! returns the process exit code: 0 when everything checked is valid, 1
//! otherwise.

use std::{
    ffi::OsStr,
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use jsonvet::{ParserOptions, parse_with_options};
use thiserror::Error;

/// Failures that stop the tool before a verdict can be printed.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("Error: {} is not a valid file or directory.", .0.display())]
    NotFound(PathBuf),
    #[error("Error: cannot list {}: {source}", .path.display())]
    ReadDir { path: PathBuf, source: io::Error },
    #[error("Error: cannot read standard input: {0}")]
    Stdin(#[source] io::Error),
    #[error("Error: cannot write output: {0}")]
    Output(#[from] io::Error),
}

/// Validates all of `input`.
pub(crate) fn check_stdin(
    mut input: impl Read,
    options: ParserOptions,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<i32, CliError> {
    let mut text = String::new();
    input.read_to_string(&mut text).map_err(CliError::Stdin)?;

    match parse_with_options(&text, options) {
        Ok(_) => {
            writeln!(out, "Valid JSON")?;
            Ok(0)
        }
        Err(e) => {
            writeln!(err, "Invalid JSON: {e}")?;
            Ok(1)
        }
    }
}

/// Dispatches on what `path` names on disk.
pub(crate) fn check_path(
    path: &Path,
    options: ParserOptions,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<i32, CliError> {
    if path.is_dir() {
        check_dir(path, options, out, err)
    } else if path.is_file() {
        check_file(path, options, out, err)
    } else {
        Err(CliError::NotFound(path.to_owned()))
    }
}

fn check_file(
    path: &Path,
    options: ParserOptions,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<i32, CliError> {
    if validate_file(path, options, err)? {
        writeln!(out, "{}: Valid JSON", path.display())?;
        Ok(0)
    } else {
        writeln!(err, "{}: Invalid JSON", path.display())?;
        Ok(1)
    }
}

fn check_dir(
    dir: &Path,
    options: ParserOptions,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<i32, CliError> {
    let read_dir_error = |source| CliError::ReadDir {
        path: dir.to_owned(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_error)? {
        let path = entry.map_err(read_dir_error)?.path();
        if has_json_extension(&path) {
            files.push(path);
        }
    }
    files.sort();
    tracing::debug!(dir = %dir.display(), files = files.len(), "checking directory");

    let mut passed = Vec::new();
    let mut failed = Vec::new();
    for path in &files {
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        if validate_file(path, options, err)? {
            passed.push(name);
        } else {
            failed.push(name);
        }
    }

    writeln!(out, "JSON Directory Report:")?;
    writeln!(out, "Passed Files:")?;
    for name in &passed {
        writeln!(out, "  {name}")?;
    }
    writeln!(out, "Failed Files:")?;
    for name in &failed {
        writeln!(out, "  {name}")?;
    }

    Ok(i32::from(!failed.is_empty()))
}

fn has_json_extension(path: &Path) -> bool {
    path.file_name()
        .and_then(OsStr::to_str)
        .is_some_and(|name| name.to_ascii_lowercase().ends_with(".json"))
}

/// Reports problems with `path` to `err`; returns whether it is valid.
fn validate_file(
    path: &Path,
    options: ParserOptions,
    err: &mut impl Write,
) -> Result<bool, CliError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(source) => {
            tracing::debug!(path = %path.display(), error = %source, "unreadable");
            writeln!(err, "Error reading file {}: {source}", path.display())?;
            return Ok(false);
        }
    };

    match parse_with_options(&text, options) {
        Ok(_) => {
            tracing::debug!(path = %path.display(), "valid");
            Ok(true)
        }
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "invalid");
            writeln!(err, "Invalid JSON in {}: {e}", path.display())?;
            Ok(false)
        }
    }
}
