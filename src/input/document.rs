//! In-memory document representation

use crate::error::Result;
use std::path::Path;
use tokio::fs;

/// A document supplied by the caller: raw bytes plus a display name.
/// Read once by the extractor, then discarded.
#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl Document {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Load a document from disk, using the file name as display name.
    pub async fn from_path(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());
        Ok(Self { name, bytes })
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_size() {
        let doc = Document::new("resume.txt", b"hello".to_vec());
        assert_eq!(doc.size(), 5);
        assert_eq!(doc.name, "resume.txt");
    }

    #[tokio::test]
    async fn test_document_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.txt");
        std::fs::write(&path, "some resume text").unwrap();

        let doc = Document::from_path(&path).await.unwrap();
        assert_eq!(doc.name, "sample.txt");
        assert_eq!(doc.size(), 16);
    }
}
