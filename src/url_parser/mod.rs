//! Immutable URL value objects.
//!
//! A [`Url`] is split into eight components when it is parsed, exposes
//! derived views (query parameters, path segments, subdomains) and is never
//! modified in place: every setter returns a new `Url`.

mod error;
mod model;
mod mutators;
mod parser;
mod query;
mod scheme;
mod splitter;
mod url_reconstructor;


pub use error::{Result, UrlError};
pub use model::{Url, UrlComponents};
pub use parser::{create_from_string, parse};
pub use query::QueryParams;
pub use scheme::default_port;
pub use splitter::{split, RawParts, SplitError};
