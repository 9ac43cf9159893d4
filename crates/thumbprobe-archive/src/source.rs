use std::fs::File;
use std::io::{self, BufReader, Read, Seek};
use std::path::Path;

use zip::result::ZipError;

use crate::error::{Error, Result};

/// Read-only view over a zip container.
///
/// Open failures are split into two classes: [`Error::Open`] when the file
/// cannot be reached or read at all, and [`Error::Corrupted`] when the bytes
/// are readable but do not form a valid container.
pub struct ZipSource<R: Read + Seek> {
    archive: zip::ZipArchive<R>,
}

impl ZipSource<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let open_err = |source: io::Error| Error::Open {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(open_err)?;
        if file.metadata().map_err(open_err)?.is_dir() {
            return Err(open_err(io::Error::from(io::ErrorKind::IsADirectory)));
        }

        Self::new(BufReader::new(file)).map_err(|err| match err {
            Error::Io(source) => open_err(source),
            other => other,
        })
    }
}

impl<R: Read + Seek> ZipSource<R> {
    pub fn new(reader: R) -> Result<Self> {
        let archive = zip::ZipArchive::new(reader).map_err(classify)?;
        Ok(Self { archive })
    }

    /// Entry names exactly as stored in the central directory.
    pub fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.archive.file_names()
    }

    pub fn len(&self) -> usize {
        self.archive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archive.is_empty()
    }

    /// Read at most `limit` bytes from the start of the named entry.
    ///
    /// Header probing only needs a prefix, and the declared and inflated sizes
    /// of an entry are untrusted.
    pub fn read_entry(&mut self, name: &str, limit: u64) -> Result<Vec<u8>> {
        let entry_err = |reason: String| Error::EntryRead {
            name: name.to_owned(),
            reason,
        };

        let file = self
            .archive
            .by_name(name)
            .map_err(|err| entry_err(err.to_string()))?;

        let capacity = file.size().min(limit).min(1 << 20) as usize;
        let mut content = Vec::with_capacity(capacity);
        file.take(limit)
            .read_to_end(&mut content)
            .map_err(|err| entry_err(err.to_string()))?;
        Ok(content)
    }
}

fn classify(err: ZipError) -> Error {
    match err {
        ZipError::Io(source)
            if !matches!(
                source.kind(),
                io::ErrorKind::UnexpectedEof | io::ErrorKind::InvalidData
            ) =>
        {
            Error::Io(source)
        }
        other => Error::Corrupted {
            reason: other.to_string(),
        },
    }
}
