//! Client configuration and credential storage.
//!
//! The bearer token lives in a single file inside the data directory, the
//! desktop counterpart of the browser's `jwt_token` cookie.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Url;

use crate::error::{Error, Result};

/// Production search API.
pub const DEFAULT_API_BASE: &str = "https://apis.ccbp.in";

/// Name of the credential file inside the data directory.
pub const TOKEN_FILE: &str = "jwt_token";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for [`crate::VideoApi`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: Url,
    pub token: Option<String>,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Build a config for the given API base, e.g. `https://apis.ccbp.in`.
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| Error::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            base_url,
            token: None,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of the search endpoint, `<base>/videos/all`.
    pub fn search_url(&self) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["videos", "all"]);
        Ok(url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_API_BASE).expect("default API base is a valid URL"),
            token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Default data directory, `<platform data dir>/nxtwatch`.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("nxtwatch")
}

/// File-backed storage for the bearer token.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(TOKEN_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored token. Missing or blank files yield `None`.
    pub fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Persist a token, creating the data directory if needed.
    pub fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token.trim())?;
        tracing::debug!(path = %self.path.display(), "Stored credential");
        Ok(())
    }

    /// Remove the stored token. Succeeds if nothing was stored.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_search_url() {
        let config = ClientConfig::new("https://apis.ccbp.in").unwrap();
        assert_eq!(config.search_url().unwrap().as_str(), "https://apis.ccbp.in/videos/all");

        let config = ClientConfig::new("http://127.0.0.1:8080/api/").unwrap();
        assert_eq!(
            config.search_url().unwrap().as_str(),
            "http://127.0.0.1:8080/api/videos/all"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(ClientConfig::new("not a url"), Err(Error::InvalidUrl(_))));
        assert!(matches!(ClientConfig::new("mailto:me@example.com"), Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_blank_token_dropped() {
        let config = ClientConfig::default().with_token(Some("   ".into()));
        assert_eq!(config.token, None);
        assert_eq!(config.base_url.as_str(), "https://apis.ccbp.in/");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_credential_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = CredentialStore::new(dir.path().join("nested"));

        assert_eq!(store.load().unwrap(), None);

        store.save("  abc.def.ghi\n").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("abc.def.ghi"));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        store.clear().unwrap();
    }

    #[test]
    fn test_blank_credential_file() {
        let dir = TempDir::new().unwrap();
        let store = CredentialStore::new(dir.path());
        fs::write(store.path(), "\n\n").unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}
