//! Loading source text.

use crate::error::{InterpreterError, Result};
use std::path::Path;

/// Read a whole source file into memory.
pub fn read_source(path: &Path) -> Result<Vec<u8>> {
    tracing::debug!(path = %path.display(), "reading source file");
    std::fs::read(path).map_err(|source| InterpreterError::ReadSource {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"print 1;").unwrap();
        assert_eq!(read_source(file.path()).unwrap(), b"print 1;");
    }

    #[test]
    fn test_read_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.lox");
        match read_source(&path) {
            Err(InterpreterError::ReadSource { path: reported, source }) => {
                assert_eq!(reported, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected ReadSource error, got {:?}", other),
        }
    }
}
