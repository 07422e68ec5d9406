use once_cell::sync::Lazy;
use std::collections::HashMap;

// These need expanding to cover other schemes
pub static DEFAULT_PORTS: Lazy<HashMap<&'static str, u16>> = Lazy::new(|| {
    HashMap::from([("http", 80), ("https", 443)])
});

/// Schemes whose remainder is never an authority
pub const HOSTLESS_SCHEMES: [&str; 1] = ["javascript"];

/// Schemes written without the `//` after the colon
const OPAQUE_SCHEMES: [&str; 1] = ["mailto"];

/// Port implied by the scheme when none is given explicitly
pub fn default_port(scheme: Option<&str>) -> Option<u16> {
    scheme.and_then(|s| DEFAULT_PORTS.get(s).copied())
}

/// Text placed between `scheme:` and the authority when serializing
pub fn separator(scheme: &str) -> &'static str {
    if OPAQUE_SCHEMES.contains(&scheme) || is_hostless(scheme) {
        ""
    } else {
        "//"
    }
}

pub fn is_hostless(scheme: &str) -> bool {
    HOSTLESS_SCHEMES.contains(&scheme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ports() {
        assert_eq!(default_port(Some("http")), Some(80));
        assert_eq!(default_port(Some("https")), Some(443));
        assert_eq!(default_port(Some("ftp")), None);
        assert_eq!(default_port(None), None);
    }

    #[test]
    fn test_separator() {
        assert_eq!(separator("mailto"), "");
        assert_eq!(separator("http"), "//");
        assert_eq!(separator("file"), "//");
        assert_eq!(separator("javascript"), "");
    }
}
