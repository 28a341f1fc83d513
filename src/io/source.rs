//! Dataset locations: remote URLs or local files.

use std::{fmt, path::PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Where a dataset comes from. Strings starting with `http://` or `https://`
/// are URLs; anything else is a filesystem path.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Source {
    Url(String),
    File(PathBuf),
}

impl From<&str> for Source {
    fn from(s: &str) -> Self {
        if s.starts_with("http://") || s.starts_with("https://") {
            Source::Url(s.to_string())
        } else {
            Source::File(PathBuf::from(s))
        }
    }
}

impl From<String> for Source {
    fn from(s: String) -> Self { Source::from(s.as_str()) }
}

impl From<PathBuf> for Source {
    fn from(path: PathBuf) -> Self { Source::File(path) }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Url(url) => f.write_str(url),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl Source {
    pub fn is_remote(&self) -> bool { matches!(self, Source::Url(_)) }

    /// Read the whole dataset into memory. One attempt, no retry.
    pub fn fetch(&self) -> Result<Vec<u8>> {
        match self {
            Source::File(path) => std::fs::read(path)
                .with_context(|| format!("[io::source] Failed to read {}", path.display())),
            Source::Url(url) => fetch_url(url),
        }
    }
}

#[cfg(feature = "download")]
fn fetch_url(url: &str) -> Result<Vec<u8>> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!("stationmap/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("[io::source] Failed to build HTTP client")?;

    let resp = client.get(url).send()
        .with_context(|| format!("[io::source] GET {url}"))?
        .error_for_status()
        .with_context(|| format!("[io::source] GET {url} returned error status"))?;

    let bytes = resp.bytes()
        .with_context(|| format!("[io::source] Failed to read response body from {url}"))?;
    log::debug!("[io::source] {url}: {} bytes", bytes.len());
    Ok(bytes.to_vec())
}

#[cfg(not(feature = "download"))]
fn fetch_url(url: &str) -> Result<Vec<u8>> {
    anyhow::bail!("[io::source] Cannot fetch {url}: built without the `download` feature")
}
