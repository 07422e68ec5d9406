pub mod config;
pub mod url_parser;
pub mod utils;

pub use url_parser::{create_from_string, parse, QueryParams, Url, UrlComponents, UrlError};
