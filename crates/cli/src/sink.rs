//! File-backed report sink.
//!
//! Opens the output file once with create-and-truncate semantics, writes one
//! line at a time, and flushes when the report is finished. Each append is
//! fully awaited before the next line is issued, so a mid-run failure leaves
//! a prefix of the report rather than an interleaved one. The handle closes
//! on drop on every exit path.

use std::path::Path;

use async_trait::async_trait;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use report::{ReportError, ReportSink};

/// [`ReportSink`] over a freshly truncated file.
#[derive(Debug)]
pub struct FileSink {
    file: File,
}

impl FileSink {
    /// Creates `path`, truncating any prior content.
    pub async fn create(path: &Path) -> Result<Self, ReportError> {
        let file = File::create(path)
            .await
            .map_err(|source| ReportError::Sink { source })?;
        Ok(Self { file })
    }
}

#[async_trait]
impl ReportSink for FileSink {
    async fn append(&mut self, line: &str) -> Result<(), ReportError> {
        self.file
            .write_all(format!("{line}\n").as_bytes())
            .await
            .map_err(|source| ReportError::Sink { source })
    }

    async fn finish(&mut self) -> Result<(), ReportError> {
        self.file
            .flush()
            .await
            .map_err(|source| ReportError::Sink { source })
    }
}
