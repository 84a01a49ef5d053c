use reqwest::StatusCode;
use std::fmt;

/// A request that never produced a usable structured response.
#[derive(Debug)]
pub enum TransportError {
    Request(reqwest::Error),
    Decode(serde_json::Error),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Request(e) => write!(f, "request failed: {e}"),
            TransportError::Decode(e) => write!(f, "unreadable response body: {e}"),
        }
    }
}

impl std::error::Error for TransportError {}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        TransportError::Request(e)
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(e: serde_json::Error) -> Self {
        TransportError::Decode(e)
    }
}

/// Fetching or parsing the activity catalog failed.
#[derive(Debug)]
pub enum LoadError {
    Transport(TransportError),
    Status(StatusCode),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Transport(e) => write!(f, "{e}"),
            LoadError::Status(status) => write!(f, "upstream answered {status}"),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<reqwest::Error> for LoadError {
    fn from(e: reqwest::Error) -> Self {
        LoadError::Transport(e.into())
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Transport(e.into())
    }
}

/// A sign-up or unregister request that did not succeed.
#[derive(Debug)]
pub enum SignupError {
    /// The upstream answered with a non-2xx status and a JSON body.
    Rejected {
        status: StatusCode,
        detail: Option<String>,
    },
    Transport(TransportError),
}

impl fmt::Display for SignupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignupError::Rejected { status, detail: Some(detail) } => {
                write!(f, "rejected with {status}: {detail}")
            }
            SignupError::Rejected { status, detail: None } => write!(f, "rejected with {status}"),
            SignupError::Transport(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SignupError {}

impl From<reqwest::Error> for SignupError {
    fn from(e: reqwest::Error) -> Self {
        SignupError::Transport(e.into())
    }
}

impl From<serde_json::Error> for SignupError {
    fn from(e: serde_json::Error) -> Self {
        SignupError::Transport(e.into())
    }
}
