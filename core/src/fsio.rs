#![deny(missing_docs)]

//! # File Layout Writer
//!
//! The file-system seam used by the descriptor generator to materialize
//! package source trees. The generator only ever goes through the
//! [`FileSystem`] trait, so it can be unit-tested against the in-memory
//! implementation without touching a disk.

use crate::error::{AppError, AppResult};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory and text-file primitives the generator relies on.
pub trait FileSystem {
    /// Creates a directory and any missing parents. Idempotent.
    fn create_dir_all(&self, path: &Path) -> AppResult<()>;

    /// Writes a text file, overwriting any previous content.
    fn write_text(&self, path: &Path, contents: &str) -> AppResult<()>;

    /// Copies a file, overwriting the destination if present.
    fn copy_file(&self, from: &Path, to: &Path) -> AppResult<()>;

    /// Whether a file or directory exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Removes a directory tree.
    fn remove_dir_all(&self, path: &Path) -> AppResult<()>;

    /// Lists the files directly under `dir` (not recursive), sorted by name.
    ///
    /// `pattern` filters on file name: a single leading or trailing `*`
    /// matches a suffix or prefix respectively; anything else must match
    /// exactly.
    fn list_files(&self, dir: &Path, pattern: Option<&str>) -> AppResult<Vec<PathBuf>>;
}

fn matches_pattern(name: &str, pattern: &str) -> bool {
    if pattern == "*" {
        true
    } else if let Some(suffix) = pattern.strip_prefix('*') {
        name.ends_with(suffix)
    } else if let Some(prefix) = pattern.strip_suffix('*') {
        name.starts_with(prefix)
    } else {
        name == pattern
    }
}

/// Real implementation backed by `std::fs`.
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn create_dir_all(&self, path: &Path) -> AppResult<()> {
        fs::create_dir_all(path)?;
        Ok(())
    }

    fn write_text(&self, path: &Path, contents: &str) -> AppResult<()> {
        fs::write(path, contents)?;
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> AppResult<()> {
        fs::copy(from, to)?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> AppResult<()> {
        fs::remove_dir_all(path)?;
        Ok(())
    }

    fn list_files(&self, dir: &Path, pattern: Option<&str>) -> AppResult<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| AppError::General(format!("{}", e)))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy();
            if pattern.is_none_or(|p| matches_pattern(&name, p)) {
                files.push(entry.into_path());
            }
        }

        files.sort();
        Ok(files)
    }
}

/// Map-backed implementation for unit tests and dry runs.
///
/// Tracks written files and created directories; nothing reaches a disk.
#[derive(Default)]
pub struct MemoryFileSystem {
    files: RefCell<BTreeMap<PathBuf, String>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
}

impl MemoryFileSystem {
    /// Creates an empty in-memory file system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a file, e.g. a spec the generator is expected to copy.
    pub fn seed_file(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files.borrow_mut().insert(path.into(), contents.into());
    }

    /// Returns the content of a written file, if any.
    pub fn read(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    /// Whether a directory was explicitly created.
    pub fn dir_created(&self, path: &Path) -> bool {
        self.dirs.borrow().contains(path)
    }

    /// Number of files currently stored.
    pub fn file_count(&self) -> usize {
        self.files.borrow().len()
    }
}

impl FileSystem for MemoryFileSystem {
    fn create_dir_all(&self, path: &Path) -> AppResult<()> {
        let mut dirs = self.dirs.borrow_mut();
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            dirs.insert(current.clone());
        }
        Ok(())
    }

    fn write_text(&self, path: &Path, contents: &str) -> AppResult<()> {
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> AppResult<()> {
        let contents = self.read(from).ok_or_else(|| {
            AppError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no such file: {}", from.display()),
            ))
        })?;
        self.files.borrow_mut().insert(to.to_path_buf(), contents);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path) || self.dirs.borrow().contains(path)
    }

    fn remove_dir_all(&self, path: &Path) -> AppResult<()> {
        self.files
            .borrow_mut()
            .retain(|p, _| !p.starts_with(path));
        self.dirs.borrow_mut().retain(|p| !p.starts_with(path));
        Ok(())
    }

    fn list_files(&self, dir: &Path, pattern: Option<&str>) -> AppResult<Vec<PathBuf>> {
        let files = self.files.borrow();
        Ok(files
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .filter(|p| {
                let name = p.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
                pattern.is_none_or(|pat| matches_pattern(&name, pat))
            })
            .cloned()
            .collect())
    }
}
