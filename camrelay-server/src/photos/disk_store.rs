use crate::error::PhotoError;
use crate::photos::PhotoStore;
use async_trait::async_trait;
use bytes::Bytes;
use camrelay_core::PhotoEvent;
use chrono::{DateTime, SecondsFormat, Utc};
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

const PHOTO_EXTENSION: &str = "png";

/// Stores photos as `photo-<unix-millis>.png` files in one directory.
#[derive(Debug, Clone)]
pub struct DiskPhotoStore {
    dir: PathBuf,
}

impl DiskPhotoStore {
    /// Opens the store, creating the directory if needed.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, PhotoError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl PhotoStore for DiskPhotoStore {
    async fn store(&self, data: Bytes) -> Result<PhotoEvent, PhotoError> {
        let now = Utc::now();
        let mut millis = now.timestamp_millis();

        let (filename, path, file) = loop {
            let filename = format!("photo-{millis}.{PHOTO_EXTENSION}");
            let path = self.dir.join(&filename);
            match fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => break (filename, path, file),
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => millis += 1,
                Err(e) => return Err(e.into()),
            }
        };

        write_or_remove(&path, file, &data).await?;
        debug!("Wrote {} ({} bytes)", filename, data.len());

        Ok(PhotoEvent {
            filename,
            timestamp: iso_timestamp(now),
            size: data.len() as u64,
        })
    }

    async fn list(&self) -> Result<Vec<PhotoEvent>, PhotoError> {
        let mut entries = fs::read_dir(&self.dir).await?;
        let mut photos = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(PHOTO_EXTENSION) {
                continue;
            }
            let metadata = entry.metadata().await?;
            if !metadata.is_file() {
                continue;
            }
            let stored_at = metadata.created().or_else(|_| metadata.modified())?;

            photos.push(PhotoEvent {
                filename: entry.file_name().to_string_lossy().into_owned(),
                timestamp: iso_timestamp(DateTime::<Utc>::from(stored_at)),
                size: metadata.len(),
            });
        }

        photos.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(photos)
    }
}

/// Writes `data` to the freshly created file at `path`. On failure the file
/// is deleted so a partial photo never shows up in listings.
async fn write_or_remove<W>(path: &Path, mut out: W, data: &[u8]) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let written = match out.write_all(data).await {
        Ok(()) => out.flush().await,
        Err(e) => Err(e),
    };
    drop(out);

    if let Err(e) = written {
        if let Err(cleanup) = fs::remove_file(path).await {
            warn!("Failed to remove partial photo {}: {}", path.display(), cleanup);
        }
        return Err(e);
    }
    Ok(())
}

fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
