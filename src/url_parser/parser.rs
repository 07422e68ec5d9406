use serde::{Deserialize, Deserializer};
use std::str::FromStr;
use tracing::{debug, error, instrument, trace};

use super::error::{Result, UrlError};
use super::model::{Fields, Url};
use super::splitter::split;

impl Url {
    /// Creates a Url from a string of any scheme
    ///
    /// This function performs the following steps:
    /// 1. Splits the string into raw components
    /// 2. Separates the auth part into user and password
    /// 3. Strips the `:`, `?` and `#` delimiters
    /// 4. Lower-cases every textual component, query and fragment included
    ///
    /// An explicit port is kept as given; the scheme default is only applied
    /// by [`Url::port`].
    ///
    /// # Errors
    /// * `UrlError::InvalidUrl` - The string could not be split into components
    #[instrument(level = "debug", skip_all, fields(url = %input))]
    pub fn create_from_string(input: &str) -> Result<Url> {
        let raw = match split(input) {
            Ok(raw) => raw,
            Err(e) => {
                error!("Failed to split URL '{}': {}", input, e);
                return Err(UrlError::InvalidUrl {
                    input: input.to_string(),
                    reason: e.to_string(),
                });
            }
        };

        // Passwords are not always present
        let (user, password) = match raw.auth.as_deref() {
            Some(auth) => {
                let mut parts = auth.splitn(2, ':');
                (
                    parts.next().map(str::to_lowercase),
                    parts.next().map(str::to_lowercase),
                )
            }
            None => (None, None),
        };

        let scheme = raw
            .protocol
            .as_deref()
            .map(|p| p.trim_end_matches(':').to_lowercase());

        let mut pathname = raw.pathname.as_deref().map(str::to_lowercase);
        if scheme.as_deref() == Some("file") {
            if let Some(path) = pathname.as_mut().filter(|p| p.starts_with("///")) {
                trace!("Dropping extra slash from file path '{}'", path);
                path.remove(0);
            }
        }

        let fields = Fields {
            scheme,
            user,
            password,
            hostname: raw.hostname.as_deref().map(str::to_lowercase),
            port: raw.port,
            pathname,
            search: raw.search.as_deref().map(|s| s[1..].to_lowercase()),
            fragment: raw.hash.as_deref().map(|h| h[1..].to_lowercase()),
        };

        let url = Url::from_fields(fields);
        debug!("Parsed URL: {}", url);
        Ok(url)
    }

    /// Alias of [`Url::create_from_string`]
    pub fn parse(input: &str) -> Result<Url> {
        Self::create_from_string(input)
    }
}

/// Alias of [`Url::create_from_string`]
pub fn create_from_string(input: &str) -> Result<Url> {
    Url::create_from_string(input)
}

/// Alias of [`Url::create_from_string`]
pub fn parse(input: &str) -> Result<Url> {
    Url::create_from_string(input)
}

impl FromStr for Url {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self> {
        Url::create_from_string(s)
    }
}

impl TryFrom<&str> for Url {
    type Error = UrlError;

    fn try_from(s: &str) -> Result<Self> {
        Url::create_from_string(s)
    }
}

impl<'de> Deserialize<'de> for Url {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Url::create_from_string(&s).map_err(serde::de::Error::custom)
    }
}
