use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum CvefeedError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Feed is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("Malformed feed document: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Item {item} has no <{field}> element")]
    MissingField { item: usize, field: &'static str },

    #[error("Item {item} has an unparseable pubDate {value:?}: {reason}")]
    InvalidDate {
        item: usize,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Interrupted")]
    Interrupted,
}

impl From<std::convert::Infallible> for CvefeedError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

pub type Result<T> = std::result::Result<T, CvefeedError>;
