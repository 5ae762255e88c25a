//! Storage for uploaded and highlighted documents.
//!
//! Documents are addressed by generated handles (`<uuid>.pdf`); the
//! highlighted copy of a document lives under the derived handle
//! `<uuid>_highlighted.pdf`. Stores enforce the configured size limit before
//! anything is written.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use uuid::Uuid;

const PDF_SUFFIX: &str = ".pdf";
const HIGHLIGHTED_SUFFIX: &str = "_highlighted.pdf";

/// Name of a stored document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentHandle(String);

impl DocumentHandle {
    /// Generate a fresh, unique handle.
    pub fn generate() -> Self {
        Self(format!("{}{}", Uuid::new_v4(), PDF_SUFFIX))
    }

    /// Validate a handle received from outside (e.g. a download URL).
    ///
    /// Handles are plain file names: no path separators, no parent
    /// references, not empty.
    pub fn parse(name: &str) -> Result<Self> {
        let invalid = name.is_empty()
            || name.contains(|c: char| c == '/' || c == '\\')
            || name == "."
            || name.contains("..");
        if invalid {
            return Err(Error::InvalidHandle(name.to_string()));
        }
        Ok(Self(name.to_string()))
    }

    /// Handle under which the highlighted copy is stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_highlighter::storage::DocumentHandle;
    ///
    /// let handle = DocumentHandle::parse("report.pdf").unwrap();
    /// assert_eq!(handle.highlighted().as_str(), "report_highlighted.pdf");
    /// ```
    pub fn highlighted(&self) -> Self {
        let stem = self.0.strip_suffix(PDF_SUFFIX).unwrap_or(&self.0);
        Self(format!("{}{}", stem, HIGHLIGHTED_SUFFIX))
    }

    /// The handle as a file name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A place to keep document bytes between upload and download.
pub trait DocumentStore {
    /// Store a new document under a generated handle.
    fn store(&self, bytes: &[u8]) -> Result<DocumentHandle> {
        let handle = DocumentHandle::generate();
        self.store_as(&handle, bytes)?;
        Ok(handle)
    }

    /// Store (or replace) a document under a given handle.
    fn store_as(&self, handle: &DocumentHandle, bytes: &[u8]) -> Result<()>;

    /// Read a stored document.
    fn retrieve(&self, handle: &DocumentHandle) -> Result<Vec<u8>>;
}

fn check_size(bytes: &[u8], limit: usize) -> Result<()> {
    if bytes.len() > limit {
        return Err(Error::DocumentTooLarge {
            size: bytes.len(),
            limit,
        });
    }
    Ok(())
}

/// In-memory store, shareable across threads.
#[derive(Debug)]
pub struct MemoryStore {
    max_document_bytes: usize,
    documents: Mutex<HashMap<DocumentHandle, Vec<u8>>>,
}

impl MemoryStore {
    /// Create an empty store with a size limit.
    pub fn new(max_document_bytes: usize) -> Self {
        Self {
            max_document_bytes,
            documents: Mutex::new(HashMap::new()),
        }
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DocumentStore for MemoryStore {
    fn store_as(&self, handle: &DocumentHandle, bytes: &[u8]) -> Result<()> {
        check_size(bytes, self.max_document_bytes)?;
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(handle.clone(), bytes.to_vec());
        Ok(())
    }

    fn retrieve(&self, handle: &DocumentHandle) -> Result<Vec<u8>> {
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(handle)
            .cloned()
            .ok_or_else(|| Error::DocumentNotFound(handle.to_string()))
    }
}

/// Store backed by a directory, one file per handle.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
    max_document_bytes: usize,
}

impl DirectoryStore {
    /// Open (creating if needed) a directory store.
    pub fn open(root: impl AsRef<Path>, max_document_bytes: usize) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        log::debug!("Document store at {}", root.display());
        Ok(Self {
            root,
            max_document_bytes,
        })
    }

    /// Path of the file backing a handle.
    pub fn path_of(&self, handle: &DocumentHandle) -> PathBuf {
        self.root.join(handle.as_str())
    }
}

impl DocumentStore for DirectoryStore {
    fn store_as(&self, handle: &DocumentHandle, bytes: &[u8]) -> Result<()> {
        check_size(bytes, self.max_document_bytes)?;
        let path = self.path_of(handle);
        fs::write(&path, bytes)?;
        log::debug!("Stored {} bytes at {}", bytes.len(), path.display());
        Ok(())
    }

    fn retrieve(&self, handle: &DocumentHandle) -> Result<Vec<u8>> {
        match fs::read(self.path_of(handle)) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(Error::DocumentNotFound(handle.to_string()))
            },
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_handles_are_unique() {
        let a = DocumentHandle::generate();
        let b = DocumentHandle::generate();
        assert_ne!(a, b);
        assert!(a.as_str().ends_with(".pdf"));
    }

    #[test]
    fn test_highlighted_handle() {
        let handle = DocumentHandle::generate();
        let out = handle.highlighted();
        assert!(out.as_str().ends_with("_highlighted.pdf"));
        assert_eq!(
            out.as_str().trim_end_matches("_highlighted.pdf"),
            handle.as_str().trim_end_matches(".pdf")
        );
    }

    #[test]
    fn test_parse_rejects_paths() {
        assert!(DocumentHandle::parse("ok.pdf").is_ok());
        for bad in ["", ".", "../etc/passwd", "a/b.pdf", "a\\b.pdf", "..pdf"] {
            assert!(
                matches!(DocumentHandle::parse(bad), Err(Error::InvalidHandle(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new(1024);
        let handle = store.store(b"%PDF-1.7").unwrap();
        assert_eq!(store.retrieve(&handle).unwrap(), b"%PDF-1.7");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_store_size_limit() {
        let store = MemoryStore::new(4);
        let err = store.store(b"too large").unwrap_err();
        assert!(matches!(err, Error::DocumentTooLarge { size: 9, limit: 4 }));
        assert!(store.is_empty());
    }

    #[test]
    fn test_memory_store_missing() {
        let store = MemoryStore::new(4);
        let err = store.retrieve(&DocumentHandle::generate()).unwrap_err();
        assert!(matches!(err, Error::DocumentNotFound(_)));
    }
}
