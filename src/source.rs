//! Suppliers of raw result-sheet text
//!
//! Fetching is kept behind the [`CsvSource`] trait so the lookup flow can run
//! against a published sheet URL, a local export or in-memory text alike.
//! Remote fetching needs the `http` feature.

use std::path::{Path, PathBuf};
#[cfg(feature = "http")]
use std::time::Duration;

use tracing::debug;

use crate::constants::BYTE_ORDER_MARK;
use crate::error::{PortalError, Result};

/// Anything that can hand over the bytes of a CSV document
pub trait CsvSource {
    /// Human-readable location, used in logs and errors
    fn describe(&self) -> String;

    /// Fetch the whole document
    fn fetch(&self) -> Result<Vec<u8>>;

    /// Fetch and decode the document as text
    fn fetch_text(&self) -> Result<String> {
        let bytes = self.fetch()?;
        debug!("Fetched {} bytes from {}", bytes.len(), self.describe());
        decode_text(&self.describe(), bytes)
    }
}

/// Decode fetched bytes as UTF-8, dropping a leading byte order mark.
///
/// Non-text input is the one hard failure of the ingestion path.
pub fn decode_text(source_name: &str, bytes: Vec<u8>) -> Result<String> {
    let text = String::from_utf8(bytes).map_err(|e| PortalError::NotText {
        source_name: source_name.to_string(),
        offset: e.utf8_error().valid_up_to(),
    })?;

    Ok(match text.strip_prefix(BYTE_ORDER_MARK) {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

/// A CSV export on the local filesystem
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CsvSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<Vec<u8>> {
        std::fs::read(&self.path).map_err(|e| {
            PortalError::source_unavailable(self.describe(), format!("failed to read file: {}", e))
        })
    }
}

/// Text held in memory, used for demo data and tests
#[derive(Debug, Clone)]
pub struct MemorySource {
    name: String,
    text: String,
}

impl MemorySource {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

impl CsvSource for MemorySource {
    fn describe(&self) -> String {
        self.name.clone()
    }

    fn fetch(&self) -> Result<Vec<u8>> {
        Ok(self.text.as_bytes().to_vec())
    }
}

/// A published sheet fetched over HTTP(S)
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    timeout: Duration,
}

#[cfg(feature = "http")]
impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }
}

#[cfg(feature = "http")]
impl CsvSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> Result<Vec<u8>> {
        let unavailable = |reason: String| PortalError::source_unavailable(&self.url, reason);

        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| unavailable(format!("failed to build HTTP client: {}", e)))?;

        let response = client
            .get(&self.url)
            .send()
            .map_err(|e| unavailable(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(unavailable(format!("HTTP error! Status: {}", status.as_u16())));
        }

        response
            .bytes()
            .map(|body| body.to_vec())
            .map_err(|e| unavailable(format!("failed to read response body: {}", e)))
    }
}

/// Whether a location names a remote sheet
pub fn is_remote(location: &str) -> bool {
    let lower = location.trim().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Pick a source for a configured location.
///
/// `http://` and `https://` locations need the `http` feature; anything else
/// is read as a file path, with an optional `file://` prefix.
pub fn source_for(location: &str, timeout_secs: u64) -> Result<Box<dyn CsvSource>> {
    let location = location.trim();

    if is_remote(location) {
        return remote_source(location, timeout_secs);
    }

    let path = location.strip_prefix("file://").unwrap_or(location);
    Ok(Box::new(FileSource::new(path)))
}

#[cfg(feature = "http")]
fn remote_source(url: &str, timeout_secs: u64) -> Result<Box<dyn CsvSource>> {
    Ok(Box::new(HttpSource::new(
        url,
        Duration::from_secs(timeout_secs),
    )))
}

#[cfg(not(feature = "http"))]
fn remote_source(url: &str, _timeout_secs: u64) -> Result<Box<dyn CsvSource>> {
    Err(PortalError::source_unavailable(
        url,
        "remote sheets need the `http` feature; rebuild with --features http or point the college at a local CSV export",
    ))
}
