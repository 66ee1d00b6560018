//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Resolve file patterns to actual file paths
///
/// A pattern without glob metacharacters that names an existing file is
/// taken literally, so dictionary names containing `[` still resolve.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let literal = PathBuf::from(pattern);
        if literal.is_file() {
            files.push(literal);
            continue;
        }

        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::NoInputFiles(patterns.join(", ")).into());
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn pattern(dir: &TempDir, name: &str) -> String {
        dir.path().join(name).to_string_lossy().into_owned()
    }

    #[test]
    fn test_resolves_glob() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.dict"), "").unwrap();
        fs::write(temp_dir.path().join("a.dict"), "").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "").unwrap();

        let files = resolve_patterns(&[pattern(&temp_dir, "*.dict")]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.dict", "b.dict"]);
    }

    #[test]
    fn test_deduplicates() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.dict"), "").unwrap();

        let files = resolve_patterns(&[
            pattern(&temp_dir, "a.dict"),
            pattern(&temp_dir, "*.dict"),
        ])
        .unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_literal_name_with_brackets() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("dict[1].dict"), "").unwrap();

        let files = resolve_patterns(&[pattern(&temp_dir, "dict[1].dict")]).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_no_matches() {
        let temp_dir = TempDir::new().unwrap();
        let err = resolve_patterns(&[pattern(&temp_dir, "*.dict")]).unwrap_err();
        assert!(err.to_string().starts_with("No files found"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[".to_string()]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid file pattern: [");
    }
}
