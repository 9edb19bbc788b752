extern crate reqwest;

use reqwest::StatusCode;
use std::{error::Error as StdError, fmt, io, result::Result as StdResult};

#[derive(Debug)]
pub struct Error(Box<Inner>);
#[derive(Debug)]
pub enum Kind {
    Builder(reqwest::Error),
    Network(reqwest::Error),
    Decode(reqwest::Error),
    Status(StatusCode),
    /// `FAILED` envelope, carrying the platform's comment.
    Api(String),
    /// Submission page has no program source.
    Extract,
    Io(io::Error),
}
#[derive(Debug)]
struct Inner {
    kind: Kind,
    url: Option<String>,
}

pub type Result<T> = StdResult<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(url) = &self.0.url {
            write!(f, "Couldn't fetch {}: ", url)?;
        }
        match &self.0.kind {
            Kind::Builder(err) => write!(f, "Error building client: {}", err),
            Kind::Network(err) => write!(f, "Error sending request: {}", err),
            Kind::Decode(err) => write!(f, "Error decoding response: {}", err),
            Kind::Status(status) => write!(f, "Unexpected HTTP status {}", status),
            Kind::Api(comment) => write!(f, "API request failed: {}", comment),
            Kind::Extract => f.write_str("Program source not found in page"),
            Kind::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.0.kind {
            Kind::Builder(x) | Kind::Network(x) | Kind::Decode(x) => Some(x),
            Kind::Io(x) => Some(x),
            Kind::Status(_) | Kind::Api(_) | Kind::Extract => None,
        }
    }
}
impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::with_kind(Kind::Io(err))
    }
}
impl Error {
    pub(crate) fn with_kind(kind: Kind) -> Self {
        Self(Box::new(Inner { kind, url: None }))
    }
    pub(crate) fn with_url<T: Into<String>>(kind: Kind, url: T) -> Self {
        Self(Box::new(Inner {
            kind,
            url: Some(url.into()),
        }))
    }
    pub fn kind(&self) -> &Kind {
        &self.0.kind
    }
    pub fn url(&self) -> Option<&str> {
        self.0.url.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_url() {
        let err = Error::with_url(
            Kind::Status(StatusCode::SERVICE_UNAVAILABLE),
            "https://codeforces.com/api/contest.list",
        );
        assert_eq!(
            err.to_string(),
            "Couldn't fetch https://codeforces.com/api/contest.list: Unexpected HTTP status 503 Service Unavailable"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn io_error_keeps_source() {
        let err = Error::from(io::Error::new(io::ErrorKind::Other, "disk full"));
        assert!(matches!(err.kind(), Kind::Io(_)));
        assert!(err.url().is_none());
        assert_eq!(err.to_string(), "I/O error: disk full");
        assert!(err.source().is_some());
    }
}
