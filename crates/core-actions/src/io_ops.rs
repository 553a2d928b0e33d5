//! File IO for load and save.
//!
//! Synchronous and whole-file. Loading selects the highlighting rule from the
//! file name; saving writes `Document::to_bytes` and leaves dirty tracking to
//! the caller so a failed write keeps the document dirty.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use core_text::{Document, select_syntax};
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Read `path` into a clean document highlighted for its file name.
pub fn open_file(path: &Path, tab_stop: usize) -> Result<Document, LoadError> {
    let bytes = fs::read(path).map_err(|source| {
        error!(target: "io", path = %path.display(), error = %source, "file_open_error");
        LoadError::Open {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let syntax = select_syntax(&path.to_string_lossy());
    let doc = Document::from_bytes(&bytes, tab_stop, syntax);
    info!(
        target: "io",
        bytes = bytes.len(),
        rows = doc.len(),
        filetype = doc.filetype().unwrap_or("none"),
        "file_read_ok"
    );
    Ok(doc)
}

/// Create or truncate `path` and write all of `bytes`. Returns the byte count.
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<usize, SaveError> {
    let result = (|| -> io::Result<()> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o644);
        }
        let mut file = options.open(path)?;
        file.write_all(bytes)?;
        file.flush()
    })();
    match result {
        Ok(()) => {
            info!(target: "io", bytes = bytes.len(), "file_write_ok");
            Ok(bytes.len())
        }
        Err(e) => {
            error!(target: "io", path = %path.display(), error = %e, "file_write_error");
            Err(SaveError::Io(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn open_file_strips_terminators_and_selects_syntax() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.c");
        fs::write(&path, "int a;\r\nint b;\n").unwrap();
        let doc = open_file(&path, 8).unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.rows()[0].raw(), b"int a;");
        assert_eq!(doc.filetype(), Some("c"));
        assert!(!doc.is_dirty());
    }

    #[test]
    fn open_missing_file_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        let err = open_file(&path, 8).unwrap_err();
        assert!(err.to_string().contains("absent.txt"));
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let doc = Document::from_bytes(b"a\n\tb\n\nc", 8, None);
        let n = write_file(&path, &doc.to_bytes()).unwrap();
        assert_eq!(n, 8);
        let back = open_file(&path, 8).unwrap();
        let rows: Vec<Vec<u8>> = back.rows().iter().map(|r| r.raw().to_vec()).collect();
        assert_eq!(rows, vec![b"a".to_vec(), b"\tb".to_vec(), Vec::new(), b"c".to_vec()]);
    }

    #[test]
    fn write_truncates_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.txt");
        fs::write(&path, "a much longer previous body\n").unwrap();
        write_file(&path, b"x\n").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"x\n");
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no").join("such").join("f.txt");
        let err = write_file(&path, b"x").unwrap_err();
        assert!(matches!(err, SaveError::Io(_)));
    }
}
