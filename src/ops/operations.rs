//! Filesystem operations
//!
//! Handles the workspace file operations: remove, create_folder, rename,
//! and directory listing. Existence and type preconditions are checked
//! before the OS call so callers get a typed error instead of a platform
//! surprise (notably the silent-overwrite behavior of rename on some
//! platforms).

use log::{error, info};
use std::fs;
use std::path::Path;

use crate::error::OpsError;
use crate::ops::results::{CreateFolderResult, RemoveResult, RemovedKind, RenameResult};

/// Deletes a file or a directory tree
///
/// A directory is removed recursively with all its contents; a regular file
/// is removed alone. Anything else (absent path, dangling symlink, special
/// file) is reported as not found without touching the filesystem.
pub fn remove(path: &Path) -> Result<RemoveResult, OpsError> {
    if path.is_dir() {
        match fs::remove_dir_all(path) {
            Ok(_) => {
                info!("Removed directory tree {}", path.display());
                Ok(RemoveResult {
                    path: path.to_path_buf(),
                    kind: RemovedKind::Directory,
                })
            }
            Err(e) => {
                error!("Failed to remove directory {}: {}", path.display(), e);
                Err(OpsError::from(e))
            }
        }
    } else if path.is_file() {
        match fs::remove_file(path) {
            Ok(_) => {
                info!("Removed file {}", path.display());
                Ok(RemoveResult {
                    path: path.to_path_buf(),
                    kind: RemovedKind::File,
                })
            }
            Err(e) => {
                error!("Failed to remove file {}: {}", path.display(), e);
                Err(OpsError::from(e))
            }
        }
    } else {
        Err(OpsError::NotFound(path.display().to_string()))
    }
}

/// Creates a directory and any missing parents
///
/// Idempotent: an already existing directory is a success with
/// `created == false`, not an error.
pub fn create_folder(path: &Path) -> Result<CreateFolderResult, OpsError> {
    if path.is_dir() {
        return Ok(CreateFolderResult {
            path: path.to_path_buf(),
            created: false,
        });
    }

    match fs::create_dir_all(path) {
        Ok(_) => {
            info!("Created directory {}", path.display());
            Ok(CreateFolderResult {
                path: path.to_path_buf(),
                created: true,
            })
        }
        Err(e) => {
            error!("Failed to create directory {}: {}", path.display(), e);
            Err(OpsError::from(e))
        }
    }
}

/// Moves a file or directory to a new path
///
/// The source must exist and the destination must not; both are checked
/// before the OS rename is attempted, and a precondition failure leaves the
/// filesystem untouched.
pub fn rename(from: &Path, to: &Path) -> Result<RenameResult, OpsError> {
    if !from.exists() {
        return Err(OpsError::NotFound(from.display().to_string()));
    }

    if to.exists() {
        return Err(OpsError::DestinationExists(to.display().to_string()));
    }

    match fs::rename(from, to) {
        Ok(_) => {
            info!("Renamed {} to {}", from.display(), to.display());
            Ok(RenameResult {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
            })
        }
        Err(e) => {
            error!(
                "Failed to rename {} to {}: {}",
                from.display(),
                to.display(),
                e
            );
            Err(OpsError::from(e))
        }
    }
}

/// Lists the contents of a directory
///
/// Entries are sorted by name; directories carry a trailing `/`.
pub fn list_directory(path: &Path) -> Result<Vec<String>, OpsError> {
    if !path.exists() {
        return Err(OpsError::NotFound(path.display().to_string()));
    }

    if !path.is_dir() {
        return Err(OpsError::NotADirectory(path.display().to_string()));
    }

    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) => {
            error!("Failed to list directory {}: {}", path.display(), e);
            return Err(OpsError::from(e));
        }
    };

    let mut file_list = vec![];
    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().to_string();

        let name_with_type = match entry.file_type() {
            Ok(file_type) if file_type.is_dir() => format!("{}/", name),
            _ => name,
        };

        file_list.push(name_with_type);
    }
    file_list.sort();

    info!(
        "Listed directory {} - {} entries",
        path.display(),
        file_list.len()
    );

    Ok(file_list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_remove_deletes_directory_tree() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("x");
        fs::create_dir_all(root.join("y")).unwrap();
        File::create(root.join("y").join("data.txt")).unwrap();

        let result = remove(&root).unwrap();
        assert_eq!(result.kind, RemovedKind::Directory);
        assert!(!root.exists());
    }

    #[test]
    fn test_remove_deletes_only_the_named_file() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("a.txt");
        let sibling = dir.path().join("b.txt");
        File::create(&target).unwrap();
        File::create(&sibling).unwrap();

        let result = remove(&target).unwrap();
        assert_eq!(result.kind, RemovedKind::File);
        assert!(!target.exists());
        assert!(sibling.exists());
    }

    #[test]
    fn test_remove_missing_path_reports_not_found() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");

        match remove(&missing) {
            Err(OpsError::NotFound(_)) => {}
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_create_folder_builds_intermediate_directories() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("c");

        let result = create_folder(&nested).unwrap();
        assert!(result.created);
        assert!(nested.is_dir());
    }

    #[test]
    fn test_create_folder_is_idempotent() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("x").join("y");

        assert!(create_folder(&target).unwrap().created);
        let second = create_folder(&target).unwrap();
        assert!(!second.created);
        assert!(target.is_dir());
    }

    #[test]
    fn test_rename_moves_content() {
        let dir = tempdir().unwrap();
        let from = dir.path().join("old.txt");
        let to = dir.path().join("new.txt");
        let mut f = File::create(&from).unwrap();
        f.write_all(b"payload").unwrap();

        rename(&from, &to).unwrap();
        assert!(!from.exists());
        assert_eq!(fs::read(&to).unwrap(), b"payload");
    }

    #[test]
    fn test_rename_missing_source_mutates_nothing() {
        let dir = tempdir().unwrap();
        let from = dir.path().join("ghost");
        let to = dir.path().join("new");

        match rename(&from, &to) {
            Err(OpsError::NotFound(_)) => {}
            other => panic!("expected NotFound, got {:?}", other),
        }
        assert!(!to.exists());
    }

    #[test]
    fn test_rename_refuses_existing_destination() {
        let dir = tempdir().unwrap();
        let from = dir.path().join("old.txt");
        let to = dir.path().join("new.txt");
        fs::write(&from, b"old").unwrap();
        fs::write(&to, b"new").unwrap();

        match rename(&from, &to) {
            Err(OpsError::DestinationExists(_)) => {}
            other => panic!("expected DestinationExists, got {:?}", other),
        }
        assert_eq!(fs::read(&from).unwrap(), b"old");
        assert_eq!(fs::read(&to).unwrap(), b"new");
    }

    #[test]
    fn test_list_directory_sorts_and_marks_directories() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        File::create(dir.path().join("b.txt")).unwrap();
        File::create(dir.path().join("a.txt")).unwrap();

        let entries = list_directory(dir.path()).unwrap();
        assert_eq!(entries, vec!["a.txt", "b.txt", "sub/"]);
    }

    #[test]
    fn test_list_directory_on_file_reports_not_a_directory() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.txt");
        File::create(&file).unwrap();

        match list_directory(&file) {
            Err(OpsError::NotADirectory(_)) => {}
            other => panic!("expected NotADirectory, got {:?}", other),
        }
    }
}
