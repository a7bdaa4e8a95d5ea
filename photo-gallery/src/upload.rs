//! Upload inputs and the streaming read step of the upload pipeline.

use std::fmt;
use std::io;
use std::path::Path;
use tokio::io::{AsyncRead, AsyncReadExt};

/// A file handed to the pipeline: a name, a declared byte size and a reader
pub struct UploadFile {
    name: String,
    size: u64,
    reader: Box<dyn AsyncRead + Send + Unpin>,
}

impl UploadFile {
    pub fn new(
        name: impl Into<String>,
        size: u64,
        reader: impl AsyncRead + Send + Unpin + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            size,
            reader: Box::new(reader),
        }
    }

    /// In-memory file; the size is the buffer length
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let size = bytes.len() as u64;
        Self::new(name, size, io::Cursor::new(bytes))
    }

    /// Opens a file on disk, taking name and size from the filesystem
    pub async fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let file = tokio::fs::File::open(path).await?;
        let size = file.metadata().await?.len();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());

        Ok(Self::new(name, size, file))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Reads the whole file in `chunk_size` pieces.
    ///
    /// `on_progress` receives the percentage read so far after every chunk,
    /// but only when the declared size is non-zero. A reader that yields more
    /// than the declared size is an `InvalidData` error; reading stops at the
    /// first chunk past it.
    pub(crate) async fn read_all<F>(
        &mut self,
        chunk_size: usize,
        mut on_progress: F,
    ) -> io::Result<Vec<u8>>
    where
        F: FnMut(f64),
    {
        let mut content = Vec::with_capacity(self.size.min(64 * 1024 * 1024) as usize);
        let mut buffer = vec![0u8; chunk_size.max(1)];
        let mut loaded: u64 = 0;

        loop {
            let n = self.reader.read(&mut buffer).await?;
            if n == 0 {
                break;
            }
            loaded += n as u64;
            if loaded > self.size {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!(
                        "{} is larger than its declared size of {} bytes",
                        self.name, self.size
                    ),
                ));
            }
            content.extend_from_slice(&buffer[..n]);

            if self.size > 0 {
                on_progress(loaded as f64 / self.size as f64 * 100.0);
            }
        }

        Ok(content)
    }
}

impl fmt::Debug for UploadFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadFile")
            .field("name", &self.name)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

/// Steps a single upload moves through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStage {
    Pending,
    Reading,
    Decoding,
    PublishingOptimistic,
    Persisting,
    Committed,
    RolledBack,
}

impl UploadStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadStage::Pending => "pending",
            UploadStage::Reading => "reading",
            UploadStage::Decoding => "decoding",
            UploadStage::PublishingOptimistic => "publishing-optimistic",
            UploadStage::Persisting => "persisting",
            UploadStage::Committed => "committed",
            UploadStage::RolledBack => "rolled-back-with-error",
        }
    }
}

impl fmt::Display for UploadStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
