//! Bootstrap wheel downloads with checksum verification

use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use tempfile::NamedTempFile;
use tracing::info;

use crate::artifact::BootstrapArtifact;
use crate::error::fs::write_failed;
use crate::error::pipeline::download_failed;
use crate::error::{MkenvError, Result};
use crate::hash::{md5_hex, verify_md5};
use crate::progress::Spinner;
use crate::ui::Reporter;

/// Retrieves the body behind a URL
pub trait Fetcher {
    fn fetch(&mut self, url: &str) -> Result<Vec<u8>>;
}

/// Blocking HTTP fetcher
///
/// One request per call, no retries.
pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout_connect(Duration::from_secs(30))
                .build(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&mut self, url: &str) -> Result<Vec<u8>> {
        let spinner = Spinner::start(&format!("Fetching {url}"));

        let response = self.agent.get(url).call().map_err(|e| match &e {
            ureq::Error::Status(code, _) => download_failed(url, format!("HTTP {code}")),
            ureq::Error::Transport(_) => download_failed(url, e.to_string()),
        })?;

        let mut bytes = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut bytes)
            .map_err(|e| download_failed(url, e.to_string()))?;

        spinner.finish();
        Ok(bytes)
    }
}

/// What [`download`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// A file with the expected name was already present; nothing fetched
    AlreadyPresent(PathBuf),
    Downloaded(PathBuf),
}

/// Download `artifact` into `dir` unless its file name already exists there.
///
/// An existing file is trusted as-is; its checksum is not re-checked. Fetched
/// bytes must match the artifact's MD5, otherwise nothing is written and
/// [`MkenvError::ChecksumMismatch`] is returned.
pub fn download(
    artifact: &BootstrapArtifact,
    dir: &Path,
    fetcher: &mut dyn Fetcher,
    reporter: &dyn Reporter,
) -> Result<DownloadOutcome> {
    let filename = artifact.filename();
    let destination = dir.join(filename);

    if destination.is_file() {
        reporter.warn(&format!("{} already exists", destination.display()));
        return Ok(DownloadOutcome::AlreadyPresent(destination));
    }

    reporter.success(&format!(
        "Downloading {filename} to {} from {}",
        destination.display(),
        artifact.url
    ));
    info!(url = artifact.url, "downloading bootstrap wheel");
    let data = fetcher.fetch(artifact.url)?;

    let actual = md5_hex(&data);
    if !verify_md5(artifact.md5, &actual) {
        return Err(MkenvError::ChecksumMismatch {
            filename: filename.to_string(),
            expected: artifact.md5.to_string(),
            actual,
        });
    }

    // Written under a temporary name so an interrupted write never leaves a
    // file that a later run would skip as "already exists".
    let mut partial = NamedTempFile::new_in(dir).map_err(|e| write_failed(dir, &e))?;
    partial
        .write_all(&data)
        .map_err(|e| write_failed(&destination, &e))?;
    partial
        .persist(&destination)
        .map_err(|e| write_failed(&destination, &e.error))?;

    Ok(DownloadOutcome::Downloaded(destination))
}
