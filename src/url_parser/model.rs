use serde::Serialize;

use super::query::QueryParams;
use super::scheme::default_port;

/// The eight stored components of a URL
///
/// Empty strings are stored as `None`, so "absent" and "empty" are the same
/// state. An explicit port is kept as given, zero included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub(crate) struct Fields {
    pub scheme: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub hostname: Option<String>,
    pub port: Option<u16>,
    pub pathname: Option<String>,
    pub search: Option<String>,
    pub fragment: Option<String>,
}

impl Fields {
    fn normalized(self) -> Self {
        Self {
            scheme: self.scheme.filter(|s| !s.is_empty()),
            user: self.user.filter(|s| !s.is_empty()),
            password: self.password.filter(|s| !s.is_empty()),
            hostname: self.hostname.filter(|s| !s.is_empty()),
            port: self.port,
            pathname: self.pathname.filter(|s| !s.is_empty()),
            search: self.search.filter(|s| !s.is_empty()),
            fragment: self.fragment.filter(|s| !s.is_empty()),
        }
    }
}

/// An immutable URL (or URL fragment such as `/path?q=1`)
///
/// Every `set_*` method returns a new `Url` and leaves the receiver as it was.
/// Build one with [`Url::parse`] or start from [`Url::new`] and chain setters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Url {
    fields: Fields,
}

impl Url {
    /// An empty relative URL; serializes to `""`
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_fields(fields: Fields) -> Self {
        Self {
            fields: fields.normalized(),
        }
    }

    pub(crate) fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Copies all eight fields, lets `change` replace some of them, and
    /// builds a new Url from the result
    pub(crate) fn with_fields(&self, change: impl FnOnce(&mut Fields)) -> Self {
        let mut fields = self.fields.clone();
        change(&mut fields);
        Self::from_fields(fields)
    }

    pub fn scheme(&self) -> Option<&str> {
        self.fields.scheme.as_deref()
    }

    /// Alias of [`Url::scheme`]
    pub fn protocol(&self) -> Option<&str> {
        self.scheme()
    }

    pub fn user(&self) -> Option<&str> {
        self.fields.user.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.fields.password.as_deref()
    }

    /// `user` or `user:password`; `None` without a user
    pub fn auth(&self) -> Option<String> {
        let user = self.user()?;
        Some(match self.password() {
            Some(password) => format!("{}:{}", user, password),
            None => user.to_string(),
        })
    }

    pub fn hostname(&self) -> Option<&str> {
        self.fields.hostname.as_deref()
    }

    /// The explicit port, or the scheme's default (80 for http, 443 for https)
    pub fn port(&self) -> Option<u16> {
        self.fields.port.or_else(|| default_port(self.scheme()))
    }

    /// The stored pathname, `"/"` when there is none
    pub fn pathname(&self) -> &str {
        self.fields.pathname.as_deref().unwrap_or("/")
    }

    /// The query string with its leading `?`
    pub fn search(&self) -> Option<String> {
        self.fields.search.as_ref().map(|s| format!("?{}", s))
    }

    /// The fragment with its leading `#`
    pub fn hash(&self) -> Option<String> {
        self.fields.fragment.as_ref().map(|f| format!("#{}", f))
    }

    /// Alias of [`Url::hash`]
    pub fn fragment(&self) -> Option<String> {
        self.hash()
    }

    pub fn is_absolute(&self) -> bool {
        self.fields.scheme.is_some()
    }

    pub fn is_relative(&self) -> bool {
        !self.is_absolute()
    }

    pub fn has_query_param(&self, name: &str) -> bool {
        self.query_params().contains(name)
    }

    pub fn query_param(&self, name: &str) -> Option<String> {
        self.query_params().get(name).map(str::to_string)
    }

    pub fn query_param_or(&self, name: &str, default: &str) -> String {
        self.query_param(name).unwrap_or_else(|| default.to_string())
    }

    /// Decodes the search string; recomputed on every call
    pub fn query_params(&self) -> QueryParams {
        QueryParams::decode(self.fields.search.as_deref().unwrap_or(""))
    }

    pub fn path_segment(&self, index: usize) -> Option<String> {
        self.path_segments().into_iter().nth(index)
    }

    /// `/path/to/file` gives `["path", "to", "file"]`; an empty path gives `[""]`
    pub fn path_segments(&self) -> Vec<String> {
        let pathname = self.pathname();
        let pathname = pathname.strip_prefix('/').unwrap_or(pathname);
        pathname.split('/').map(String::from).collect()
    }

    pub fn subdomain(&self, index: usize) -> Option<String> {
        self.subdomains().into_iter().nth(index)
    }

    /// Hostname labels, empty when there is no hostname
    pub fn subdomains(&self) -> Vec<String> {
        match self.hostname() {
            Some(hostname) => hostname.split('.').map(String::from).collect(),
            None => Vec::new(),
        }
    }

    /// Snapshot of every accessor, for display or serialization
    pub fn components(&self) -> UrlComponents {
        UrlComponents {
            href: self.href(),
            scheme: self.scheme().map(String::from),
            auth: self.auth(),
            user: self.user().map(String::from),
            password: self.password().map(String::from),
            hostname: self.hostname().map(String::from),
            port: self.port(),
            pathname: self.pathname().to_string(),
            search: self.search(),
            hash: self.hash(),
            is_absolute: self.is_absolute(),
            query_params: self.query_params(),
            path_segments: self.path_segments(),
            subdomains: self.subdomains(),
        }
    }
}

/// Every derived view of a [`Url`] at once
#[derive(Debug, Clone, Serialize)]
pub struct UrlComponents {
    pub href: String,
    pub scheme: Option<String>,
    pub auth: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub hostname: Option<String>,
    pub port: Option<u16>,
    pub pathname: String,
    pub search: Option<String>,
    pub hash: Option<String>,
    pub is_absolute: bool,
    pub query_params: QueryParams,
    pub path_segments: Vec<String>,
    pub subdomains: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Url {
        Url::from_fields(Fields {
            scheme: Some("http".into()),
            hostname: Some("www.google.com".into()),
            pathname: Some("/path/to/file".into()),
            search: Some("q=testing&nocache".into()),
            fragment: Some("something".into()),
            ..Fields::default()
        })
    }

    #[test]
    fn test_empty_strings_are_absent() {
        let url = Url::from_fields(Fields {
            scheme: Some(String::new()),
            pathname: Some(String::new()),
            ..Fields::default()
        });
        assert_eq!(url, Url::new());
        assert_eq!(url.scheme(), None);
        assert_eq!(url.pathname(), "/");
    }

    #[test]
    fn test_default_port_only_when_unset() {
        let url = sample();
        assert_eq!(url.port(), Some(80));
        let url = url.with_fields(|f| f.port = Some(8080));
        assert_eq!(url.port(), Some(8080));
        let url = url.with_fields(|f| {
            f.port = None;
            f.scheme = Some("ftp".into());
        });
        assert_eq!(url.port(), None);
    }

    #[test]
    fn test_prefixed_search_and_hash() {
        let url = sample();
        assert_eq!(url.search().as_deref(), Some("?q=testing&nocache"));
        assert_eq!(url.hash().as_deref(), Some("#something"));
        assert_eq!(url.fragment(), url.hash());
        assert_eq!(Url::new().search(), None);
        assert_eq!(Url::new().hash(), None);
    }

    #[test]
    fn test_auth() {
        let url = Url::from_fields(Fields {
            user: Some("user".into()),
            ..Fields::default()
        });
        assert_eq!(url.auth().as_deref(), Some("user"));
        let url = url.with_fields(|f| f.password = Some("secret".into()));
        assert_eq!(url.auth().as_deref(), Some("user:secret"));
        let url = url.with_fields(|f| f.user = None);
        assert_eq!(url.auth(), None);
    }

    #[test]
    fn test_query_param_lookup() {
        let url = sample();
        assert!(url.has_query_param("nocache"));
        assert!(!url.has_query_param("bacon"));
        assert_eq!(url.query_param("q").as_deref(), Some("testing"));
        assert_eq!(url.query_param("nocache").as_deref(), Some(""));
        assert_eq!(url.query_param("bacon"), None);
        assert_eq!(url.query_param_or("bacon", "crispy"), "crispy");
        assert_eq!(url.query_params().len(), 2);
    }

    #[test]
    fn test_segments_and_subdomains() {
        let url = sample();
        assert_eq!(url.path_segments(), vec!["path", "to", "file"]);
        assert_eq!(url.path_segment(1).as_deref(), Some("to"));
        assert_eq!(url.path_segment(3), None);
        assert_eq!(url.subdomains(), vec!["www", "google", "com"]);
        assert_eq!(url.subdomain(2).as_deref(), Some("com"));
        assert_eq!(url.subdomain(3), None);
    }

    #[test]
    fn test_segments_of_empty_url() {
        let url = Url::new();
        assert_eq!(url.path_segments(), vec![""]);
        assert!(url.subdomains().is_empty());
        assert_eq!(url.subdomain(0), None);
    }

    #[test]
    fn test_absolute_and_relative() {
        assert!(sample().is_absolute());
        assert!(!sample().is_relative());
        assert!(Url::new().is_relative());
    }
}
