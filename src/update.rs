//! Update check
//!
//! Fetches a one-line version marker and compares it with the compiled-in
//! version. Every failure is swallowed: the check never blocks the display.

use reqwest::blocking::Client;
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Version compiled into this binary
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Error, Debug)]
pub enum UpdateError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Version marker is empty")]
    Empty,
}

/// Where the remote version marker comes from
pub trait VersionSource {
    fn fetch(&self) -> Result<String, UpdateError>;
}

/// Plain-text version marker served over HTTP
pub struct HttpVersionSource {
    client: Client,
    url: String,
}

impl HttpVersionSource {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, UpdateError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .user_agent(concat!("brlfetch/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

impl VersionSource for HttpVersionSource {
    fn fetch(&self) -> Result<String, UpdateError> {
        let body = self
            .client
            .get(&self.url)
            .send()?
            .error_for_status()?
            .text()?;
        Ok(body)
    }
}

/// An update is available
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    pub local: String,
    pub remote: String,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "brlfetch {} is available (you have {}). Run `brlfetch update` to install it.",
            self.remote, self.local
        )
    }
}

/// Compare the remote marker against `local`; `None` when current or unreachable
pub fn check(source: &dyn VersionSource, local: &str) -> Option<Advisory> {
    let remote = match source.fetch() {
        Ok(body) => body.trim().to_string(),
        Err(err) => {
            debug!("update check skipped: {err}");
            return None;
        }
    };

    if remote.is_empty() {
        debug!("update check skipped: {}", UpdateError::Empty);
        return None;
    }

    let local = local.trim();
    if remote == local {
        debug!(version = local, "up to date");
        return None;
    }

    Some(Advisory {
        local: local.to_string(),
        remote,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str);

    impl VersionSource for Fixed {
        fn fetch(&self) -> Result<String, UpdateError> {
            Ok(self.0.to_string())
        }
    }

    struct Unreachable;

    impl VersionSource for Unreachable {
        fn fetch(&self) -> Result<String, UpdateError> {
            Err(UpdateError::Empty)
        }
    }

    #[test]
    fn same_version_after_trim_is_silent() {
        assert_eq!(check(&Fixed("1.0.0\n"), "1.0.0"), None);
        assert_eq!(check(&Fixed("  1.0.0  "), "1.0.0"), None);
    }

    #[test]
    fn newer_version_names_both() {
        let advisory = check(&Fixed("1.1.0\n"), "1.0.0").expect("advisory");
        let message = advisory.to_string();
        assert!(message.contains("1.1.0"));
        assert!(message.contains("1.0.0"));
        assert!(message.contains("brlfetch update"));
    }

    #[test]
    fn failures_are_silent() {
        assert_eq!(check(&Unreachable, "1.0.0"), None);
        assert_eq!(check(&Fixed("   \n"), "1.0.0"), None);
    }

    #[test]
    fn unroutable_url_is_silent() {
        let source = HttpVersionSource::new("http://127.0.0.1:9/VERSION", Duration::from_secs(1))
            .expect("client");
        assert_eq!(check(&source, VERSION), None);
    }
}
