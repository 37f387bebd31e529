//! The opsym CLI.
//!
//! Rewrites the C++ alternative operator spellings (`and`, `or`, `not_eq`,
//! ...) into their symbolic forms across a directory tree, leaving comments
//! and string/char literals untouched, and blanks legacy
//! `#include <ciso646>` lines. Files are rewritten in place through a temp
//! file and atomic rename.
//!
//! Options:
//! - `ROOT` - directory to process (defaults to the current directory)
//! - `--check` - report files that would change, write nothing, exit 1 if any
//! - `--json` - output per-file results as JSON (one object per line)
//!
//! A file that cannot be read or decoded is reported and skipped; the rest
//! of the run continues and the process exits nonzero at the end.

mod discovery;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use opsym_common::{FileError, FileErrorKind, OperatorTable};
use opsym_rewrite::rewrite_source;

#[derive(Parser)]
#[command(
    name = "opsym",
    version,
    about = "Rewrite C++ alternative operator spellings to their symbols"
)]
struct Cli {
    /// Directory tree to process
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Report files that would change without rewriting them
    #[arg(long)]
    check: bool,

    /// Output per-file results as JSON (one object per line)
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            if cli.json {
                let msg = serde_json::json!({
                    "status": "error",
                    "message": e,
                });
                eprintln!("{}", msg);
            } else {
                eprintln!("error: {}", e);
            }
            process::exit(2);
        }
    }
}

/// Walk the tree, rewrite every matching file, and report per-file results.
///
/// Returns the process exit code: 0 on full success, 1 if any file failed
/// or (under `--check`) any file would change. Only setup failures (missing
/// root, unreadable directory) surface as `Err`.
fn run(cli: &Cli) -> Result<i32, String> {
    if !cli.root.exists() {
        return Err(format!("Directory '{}' does not exist", cli.root.display()));
    }
    if !cli.root.is_dir() {
        return Err(format!("'{}' is not a directory", cli.root.display()));
    }

    let table = OperatorTable::new();
    let files = discovery::discover_source_files(&cli.root)?;

    let mut changed = 0usize;
    let mut failed = 0usize;

    for relative in &files {
        let path = cli.root.join(relative);
        match process_file(&path, &table, cli.check) {
            Ok(true) => {
                changed += 1;
                if cli.json {
                    let status = if cli.check { "would-rewrite" } else { "rewritten" };
                    report_json(relative, status, None);
                } else if cli.check {
                    println!("would rewrite {}", relative.display());
                } else {
                    println!("rewrote {}", relative.display());
                }
            }
            Ok(false) => {
                if cli.json {
                    report_json(relative, "unchanged", None);
                }
            }
            Err(e) => {
                failed += 1;
                if cli.json {
                    report_json(relative, "error", Some(&e.kind.to_string()));
                } else {
                    eprintln!("error: {}", e);
                }
            }
        }
    }

    if !cli.json {
        let verb = if cli.check { "would be rewritten" } else { "rewritten" };
        println!("{} of {} files {}", changed, files.len(), verb);
    }

    if failed > 0 || (cli.check && changed > 0) {
        Ok(1)
    } else {
        Ok(0)
    }
}

/// Read, transform, and (outside `--check`) write back one file.
///
/// Returns whether the file's contents changed. Unchanged files are never
/// rewritten, so their timestamps survive a run.
fn process_file(path: &Path, table: &OperatorTable, check: bool) -> Result<bool, FileError> {
    let bytes = std::fs::read(path)
        .map_err(|e| FileError::new(path, FileErrorKind::Read(e.to_string())))?;
    let source = String::from_utf8(bytes)
        .map_err(|_| FileError::new(path, FileErrorKind::NotUtf8))?;

    let rewritten = rewrite_source(&source, table);
    if rewritten == source {
        return Ok(false);
    }
    if !check {
        write_atomic(path, &rewritten)
            .map_err(|e| FileError::new(path, FileErrorKind::Write(e.to_string())))?;
    }
    Ok(true)
}

/// Write the new contents to a temp file in the target's directory and
/// rename it over the original, so a failed write never leaves a
/// half-written file behind.
fn write_atomic(path: &Path, contents: &str) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Emit one JSON result object on stdout.
fn report_json(relative: &Path, status: &str, message: Option<&str>) {
    let mut obj = serde_json::json!({
        "file": relative.display().to_string(),
        "status": status,
    });
    if let Some(message) = message {
        obj["message"] = serde_json::Value::String(message.to_string());
    }
    println!("{}", obj);
}
