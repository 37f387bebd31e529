//! File discovery for the rewriter.
//!
//! Recursively collects C/C++ source and header files under a root
//! directory, filtered by a fixed extension set.

use std::path::{Path, PathBuf};

/// Extensions of the files the rewriter processes.
pub const SOURCE_EXTENSIONS: &[&str] = &["cpp", "cc", "cxx", "hpp", "hxx", "h"];

/// Recursively discover C/C++ source files under `root`.
///
/// Returns paths relative to `root`, sorted alphabetically for determinism.
/// Hidden entries (names starting with `.`) are skipped, so trees like
/// `.git` are never touched.
pub fn discover_source_files(root: &Path) -> Result<Vec<PathBuf>, String> {
    let mut files = Vec::new();
    discover_recursive(root, root, &mut files)
        .map_err(|e| format!("Failed to walk directory '{}': {}", root.display(), e))?;
    files.sort();
    Ok(files)
}

/// Internal recursive walker that collects matching files as relative paths.
fn discover_recursive(
    root: &Path,
    dir: &Path,
    files: &mut Vec<PathBuf>,
) -> std::io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let entry_path = entry.path();
        let file_name = entry.file_name();
        let name_str = file_name.to_string_lossy();

        // Skip hidden directories and files
        if name_str.starts_with('.') {
            continue;
        }

        if entry_path.is_dir() {
            discover_recursive(root, &entry_path, files)?;
        } else if has_source_extension(&entry_path) {
            let relative = entry_path
                .strip_prefix(root)
                .unwrap_or(&entry_path)
                .to_path_buf();
            files.push(relative);
        }
    }
    Ok(())
}

/// Whether the path carries one of the processed extensions.
fn has_source_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_extension_filter() {
        assert!(has_source_extension(Path::new("a.cpp")));
        assert!(has_source_extension(Path::new("b.cc")));
        assert!(has_source_extension(Path::new("c.cxx")));
        assert!(has_source_extension(Path::new("d.hpp")));
        assert!(has_source_extension(Path::new("e.hxx")));
        assert!(has_source_extension(Path::new("f.h")));
        assert!(!has_source_extension(Path::new("g.c")));
        assert!(!has_source_extension(Path::new("readme.txt")));
        assert!(!has_source_extension(Path::new("Makefile")));
        assert!(!has_source_extension(Path::new("h.CPP")));
    }

    #[test]
    fn test_discover_source_files() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();

        fs::write(root.join("main.cpp"), "").unwrap();
        fs::create_dir_all(root.join("include")).unwrap();
        fs::write(root.join("include/util.hpp"), "").unwrap();
        fs::write(root.join("notes.txt"), "").unwrap();
        fs::create_dir_all(root.join(".git")).unwrap();
        fs::write(root.join(".git/config.h"), "").unwrap();

        let files = discover_source_files(root).unwrap();
        let file_strs: Vec<&str> = files.iter().map(|p| p.to_str().unwrap()).collect();

        assert_eq!(file_strs, vec!["include/util.hpp", "main.cpp"]);
    }

    #[test]
    fn test_discover_is_sorted() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();

        fs::write(root.join("z.h"), "").unwrap();
        fs::write(root.join("a.h"), "").unwrap();
        fs::create_dir_all(root.join("m")).unwrap();
        fs::write(root.join("m/b.cc"), "").unwrap();

        let files = discover_source_files(root).unwrap();
        let file_strs: Vec<&str> = files.iter().map(|p| p.to_str().unwrap()).collect();

        assert_eq!(file_strs, vec!["a.h", "m/b.cc", "z.h"]);
    }
}
