use std::any::{type_name, Any};
use tracing::debug;

use super::error::{Result, UrlError};
use super::model::Url;

// Modification methods: each returns a new Url with one component replaced.
// Values are stored as given; only the parser lower-cases.
impl Url {
    pub fn set_scheme(&self, scheme: &str) -> Url {
        self.with_fields(|f| f.scheme = Some(scheme.to_string()))
    }

    /// Alias of [`Url::set_scheme`]
    pub fn set_protocol(&self, protocol: &str) -> Url {
        self.set_scheme(protocol)
    }

    /// Replaces both user and password
    pub fn set_auth(&self, user: &str, password: Option<&str>) -> Url {
        self.with_fields(|f| {
            f.user = Some(user.to_string());
            f.password = password.map(String::from);
        })
    }

    pub fn set_hostname(&self, hostname: &str) -> Url {
        self.with_fields(|f| f.hostname = Some(hostname.to_string()))
    }

    /// Replaces one hostname label; an index past the last label changes nothing
    pub fn set_subdomain(&self, index: usize, subdomain: &str) -> Url {
        let mut subdomains = self.subdomains();
        if let Some(label) = subdomains.get_mut(index) {
            *label = subdomain.to_string();
        }
        self.set_hostname(&subdomains.join("."))
    }

    pub fn set_pathname(&self, pathname: &str) -> Url {
        self.with_fields(|f| f.pathname = Some(pathname.to_string()))
    }

    /// Replaces segment `index`, or appends when `index` equals the segment
    /// count. The new segment is percent-encoded.
    pub fn set_path_segment(&self, index: usize, segment: &str) -> Result<Url> {
        let mut segments = self.path_segments();
        let encoded = urlencoding::encode(segment).into_owned();

        if index < segments.len() {
            segments[index] = encoded;
        } else if index == segments.len() {
            segments.push(encoded);
        } else {
            debug!(
                "Rejecting path segment {} for '{}' ({} segments)",
                index,
                self,
                segments.len()
            );
            return Err(UrlError::InvalidPathIndex {
                index,
                segments: segments.len(),
            });
        }

        Ok(self.set_pathname(&format!("/{}", segments.join("/"))))
    }

    /// Replaces the whole path with the given segments, each percent-encoded
    pub fn set_path_segments(&self, segments: &[&str]) -> Url {
        let encoded: Vec<String> = segments
            .iter()
            .map(|s| urlencoding::encode(s).into_owned())
            .collect();
        self.set_pathname(&format!("/{}", encoded.join("/")))
    }

    /// Sets one query parameter and re-encodes the whole query string
    pub fn set_query_param(&self, name: &str, value: &str) -> Url {
        let mut params = self.query_params();
        params.set(name, value);
        let search = params.encode();
        self.with_fields(|f| f.search = Some(search))
    }

    /// Fills every component that is absent here with the one from `other`
    ///
    /// Components present on `self` always win, even when `other` is the more
    /// specific URL. An empty component or a zero port counts as absent.
    pub fn merge_with(&self, other: &Url) -> Url {
        let theirs = other.fields();
        self.with_fields(|f| {
            f.scheme = f.scheme.take().or_else(|| theirs.scheme.clone());
            f.user = f.user.take().or_else(|| theirs.user.clone());
            f.password = f.password.take().or_else(|| theirs.password.clone());
            f.hostname = f.hostname.take().or_else(|| theirs.hostname.clone());
            f.port = f.port.filter(|p| *p != 0).or(theirs.port);
            f.pathname = f.pathname.take().or_else(|| theirs.pathname.clone());
            f.search = f.search.take().or_else(|| theirs.search.clone());
            f.fragment = f.fragment.take().or_else(|| theirs.fragment.clone());
        })
    }

    /// [`Url::merge_with`] for callers holding a value of unknown type
    pub fn try_merge_with<T: Any>(&self, other: &T) -> Result<Url> {
        match (other as &dyn Any).downcast_ref::<Url>() {
            Some(url) => Ok(self.merge_with(url)),
            None => {
                debug!("Refusing to merge '{}' with a {}", self, type_name::<T>());
                Err(UrlError::InvalidMergeArgument {
                    found: type_name::<T>().to_string(),
                })
            }
        }
    }
}
