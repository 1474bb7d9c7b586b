// src/persistence.rs - Loading and saving buffers as plain line files

use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::buffer::Buffer;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PersistenceError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Read the lines of `path`. A path that does not exist yields no lines.
///
/// Bytes that are not valid UTF-8 decode to U+FFFD rather than failing the
/// load, so the whole file is always kept.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<String>, PersistenceError> {
    let path = path.as_ref();
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!("{} does not exist, starting empty", path.display());
            return Ok(Vec::new());
        }
        Err(err) => return Err(PersistenceError::io(path, err)),
    };
    let content = String::from_utf8_lossy(&bytes);
    let lines: Vec<String> = content.lines().map(str::to_string).collect();
    info!("loaded {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Write each line followed by a newline. Returns the number of lines written.
pub fn save<P, I, S>(path: P, lines: I) -> Result<usize, PersistenceError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    let mut out = String::new();
    let mut count = 0;
    for line in lines {
        out.push_str(line.as_ref());
        out.push('\n');
        count += 1;
    }
    let mut file = fs::File::create(path).map_err(|e| PersistenceError::io(path, e))?;
    file.write_all(out.as_bytes())
        .map_err(|e| PersistenceError::io(path, e))?;
    info!("wrote {} lines to {}", count, path.display());
    Ok(count)
}

/// Load `path` straight into a [`Buffer`].
pub fn load_buffer<P: AsRef<Path>>(path: P) -> Result<Buffer, PersistenceError> {
    load(path).map(Buffer::from_lines)
}

/// Save the present lines of `buffer` and clear its modified flag.
pub fn save_buffer<P: AsRef<Path>>(path: P, buffer: &mut Buffer) -> Result<usize, PersistenceError> {
    let count = save(path, buffer.lines())?;
    buffer.modified = false;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_load_missing_path_is_empty() {
        let dir = TempDir::new().unwrap();
        let lines = load(dir.path().join("missing.c")).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_load_directory_is_error() {
        let dir = TempDir::new().unwrap();
        assert!(load(dir.path()).is_err());
    }

    #[test]
    fn test_save_writes_trailing_newlines() {
        let file = NamedTempFile::new().unwrap();
        let count = save(file.path(), ["int x;", "", "return 0;"]).unwrap();
        assert_eq!(count, 3);
        let content = fs::read_to_string(file.path()).unwrap();
        assert_eq!(content, "int x;\n\nreturn 0;\n");
    }

    #[test]
    fn test_save_buffer_clears_modified() {
        let file = NamedTempFile::new().unwrap();
        let mut buffer = Buffer::new();
        buffer.set(0, "hello").unwrap();
        assert!(buffer.modified);
        save_buffer(file.path(), &mut buffer).unwrap();
        assert!(!buffer.modified);

        let loaded = load_buffer(file.path()).unwrap();
        assert_eq!(loaded.lines().collect::<Vec<_>>(), vec!["hello"]);
        assert!(!loaded.modified);
    }

    #[test]
    fn test_load_handles_crlf() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "mov eax, 1\r\nret\r\n").unwrap();
        assert_eq!(load(file.path()).unwrap(), vec!["mov eax, 1", "ret"]);
    }

    #[test]
    fn test_load_latin1_keeps_every_line() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), b"int caf\xe9 = 1;\nreturn 0;\n").unwrap();
        assert_eq!(load(file.path()).unwrap().len(), 2);

        let buffer = load_buffer(file.path()).unwrap();
        assert_eq!(
            buffer.lines().collect::<Vec<_>>(),
            vec!["int caf? = 1;", "return 0;"]
        );
    }
}
