use std::fs;
use std::path::PathBuf;

use crate::domain::NewsDocument;
use crate::errors::NewsResult;
use crate::storage::traits::ContentStore;

/// Writes markdown documents into a single content directory
#[derive(Debug, Clone)]
pub struct FsContentStore {
    root: PathBuf,
}

impl FsContentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, document: &NewsDocument) -> PathBuf {
        self.root.join(&document.file_name)
    }
}

impl ContentStore for FsContentStore {
    fn prepare(&self) -> NewsResult<()> {
        fs::create_dir_all(&self.root)?;
        Ok(())
    }

    fn write(&self, document: &NewsDocument) -> NewsResult<PathBuf> {
        let path = self.path_for(document);
        fs::write(&path, document.body.as_bytes())?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn document(name: &str, body: &str) -> NewsDocument {
        NewsDocument {
            file_name: name.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_prepare_creates_nested_directories() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("site").join("content");
        let store = FsContentStore::new(&root);

        store.prepare().unwrap();
        assert!(root.is_dir());

        // A second call on an existing directory is fine
        store.prepare().unwrap();
    }

    #[test]
    fn test_write_utf8_document() {
        let temp_dir = TempDir::new().unwrap();
        let store = FsContentStore::new(temp_dir.path());

        let path = store
            .write(&document("news-2024-05-01-1.md", "# Año nuevo\n"))
            .unwrap();

        assert_eq!(path, temp_dir.path().join("news-2024-05-01-1.md"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "# Año nuevo\n");
    }

    #[test]
    fn test_write_overwrites_same_name() {
        let temp_dir = TempDir::new().unwrap();
        let store = FsContentStore::new(temp_dir.path());

        store.write(&document("news-2024-05-01-1.md", "first")).unwrap();
        let path = store.write(&document("news-2024-05-01-1.md", "second")).unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "second");
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_without_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let store = FsContentStore::new(temp_dir.path().join("missing"));

        let result = store.write(&document("news-2024-05-01-1.md", "body"));
        assert!(matches!(result, Err(crate::errors::NewsError::Io(_))));
    }
}
