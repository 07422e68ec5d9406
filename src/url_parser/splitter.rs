use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::trace;

use super::scheme::is_hostless;

static PROTOCOL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9.+-]+:").unwrap()
});

// Characters that can never appear in a hostname
const FORBIDDEN_HOST_CHARS: &[char] = &['<', '>', '"', '{', '}', '|', '\\', '^', '`'];

/// Why a string could not be split into URL components
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    #[error("port '{0}' is not a number between 0 and 65535")]
    InvalidPort(String),
    #[error("hostname '{0}' contains invalid characters")]
    InvalidHost(String),
    #[error("unterminated IPv6 address in '{0}'")]
    UnterminatedIpv6(String),
}

/// Unprocessed pieces of a URL string
///
/// Nothing here is normalised: `protocol` keeps its trailing `:`, `search`
/// its leading `?` and `hash` its leading `#`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawParts {
    pub protocol: Option<String>,
    pub auth: Option<String>,
    pub hostname: Option<String>,
    pub port: Option<u16>,
    pub pathname: Option<String>,
    pub search: Option<String>,
    pub hash: Option<String>,
}

/// Splits a URL string into its raw components
///
/// Empty or blank input yields empty parts. An authority is only looked for
/// after a protocol, so relative references
/// such as `/path` or `//cdn/path` are returned entirely as a pathname.
pub fn split(input: &str) -> Result<RawParts, SplitError> {
    let rest = input.trim();
    let mut parts = RawParts::default();

    let rest = match rest.find('#') {
        Some(i) => {
            parts.hash = Some(rest[i..].to_string());
            &rest[..i]
        }
        None => rest,
    };
    let rest = match rest.find('?') {
        Some(i) => {
            parts.search = Some(rest[i..].to_string());
            &rest[..i]
        }
        None => rest,
    };

    let rest = match PROTOCOL_REGEX.find(rest) {
        Some(m) => {
            parts.protocol = Some(m.as_str().to_string());
            &rest[m.end()..]
        }
        None => rest,
    };

    let has_authority = parts
        .protocol
        .as_deref()
        .map(|p| !is_hostless(&p[..p.len() - 1].to_ascii_lowercase()))
        .unwrap_or(false);

    let path = if has_authority {
        let after = rest.strip_prefix("//").unwrap_or(rest);
        let end = after.find('/').unwrap_or(after.len());
        let (authority, path) = after.split_at(end);
        trace!("Splitting authority '{}'", authority);
        split_authority(authority, &mut parts)?;
        path
    } else {
        rest
    };
    parts.pathname = non_empty(path);

    trace!("Split URL parts: {:?}", parts);
    Ok(parts)
}

fn split_authority(authority: &str, parts: &mut RawParts) -> Result<(), SplitError> {
    let host = match authority.rfind('@') {
        Some(i) => {
            parts.auth = non_empty(&authority[..i]);
            &authority[i + 1..]
        }
        None => authority,
    };

    let (hostname, port) = if host.starts_with('[') {
        let close = host
            .find(']')
            .ok_or_else(|| SplitError::UnterminatedIpv6(host.to_string()))?;
        let tail = &host[close + 1..];
        let port = match tail.strip_prefix(':') {
            Some(port) => port,
            None if tail.is_empty() => "",
            None => return Err(SplitError::InvalidHost(host.to_string())),
        };
        (&host[..=close], port)
    } else {
        match host.rfind(':') {
            Some(i) => (&host[..i], &host[i + 1..]),
            None => (host, ""),
        }
    };

    if hostname
        .chars()
        .any(|c| c.is_whitespace() || c.is_control() || FORBIDDEN_HOST_CHARS.contains(&c))
    {
        return Err(SplitError::InvalidHost(hostname.to_string()));
    }

    parts.hostname = non_empty(hostname);
    parts.port = parse_port(port)?;
    Ok(())
}

fn parse_port(port: &str) -> Result<Option<u16>, SplitError> {
    if port.is_empty() {
        return Ok(None);
    }
    if !port.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SplitError::InvalidPort(port.to_string()));
    }
    port.parse::<u16>()
        .map(Some)
        .map_err(|_| SplitError::InvalidPort(port.to_string()))
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
