use std::fmt;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{context}: {source}")]
    Transport {
        context: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("{context}: unexpected response body: {source}")]
    Decode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{context}: {reason}")]
    InvalidArgument {
        context: &'static str,
        reason: String,
    },

    #[error("`{0}` is not an absolute http(s) URL")]
    InvalidBaseUrl(String),

    #[error("Malformed token: {0}")]
    MalformedToken(String),
}

impl Error {
    pub(crate) fn invalid_argument(context: &'static str, reason: impl Into<String>) -> Error {
        Error::InvalidArgument {
            context,
            reason: reason.into(),
        }
    }

    /// HTTP status associated with the failure.
    ///
    /// Arguments rejected before a request is sent report `400 Bad Request`.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Http(e) => Some(e.status),
            Error::InvalidArgument { .. } => Some(StatusCode::BAD_REQUEST),
            Error::Transport { source, .. } => source.status(),
            _ => None,
        }
    }

    pub fn is_invalid_grant(&self) -> bool {
        match self {
            Error::Http(e) => e.error.as_deref() == Some("invalid_grant"),
            _ => false,
        }
    }
}

/// Body Keycloak sends along with 4xx/5xx responses.
///
/// OAuth endpoints use `error`/`error_description`, the admin API uses
/// `errorMessage`. Either may be missing.
#[derive(Deserialize, Debug, Default)]
struct ServerErrorBody {
    error: Option<String>,

    error_description: Option<String>,

    #[serde(rename = "errorMessage")]
    error_message: Option<String>,
}

#[derive(Error, Debug)]
pub struct HttpError {
    pub context: &'static str,
    pub status: StatusCode,
    pub body: String,
    pub error: Option<String>,
    pub description: Option<String>,
}

impl HttpError {
    pub(crate) fn new(context: &'static str, status: StatusCode, body: String) -> HttpError {
        let parsed = serde_json::from_str::<ServerErrorBody>(&body).unwrap_or_default();

        HttpError {
            context,
            status,
            body,
            error: parsed.error,
            description: parsed.error_description.or(parsed.error_message),
        }
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.context, self.status)?;

        match (&self.error, &self.description) {
            (Some(error), Some(description)) => write!(f, ": {}: {}", error, description),
            (Some(error), None) => write!(f, ": {}", error),
            (None, Some(description)) => write!(f, ": {}", description),
            (None, None) => Ok(()),
        }
    }
}
