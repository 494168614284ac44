use serde::Deserialize;

/// A failed insert. `Display` is the text shown to the visitor.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("{message}")]
    Rejected {
        status: u16,
        code: Option<String>,
        message: String,
    },
    #[error("{0}")]
    Transport(String),
    #[error("could not encode record: {0}")]
    Encode(String),
}

// PostgREST error body.
#[derive(Deserialize)]
struct ErrorResponse {
    message: String,
    #[serde(default)]
    code: Option<String>,
}

impl StoreError {
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        StoreError::Rejected {
            status,
            code: None,
            message: message.into(),
        }
    }

    /// Builds the error for a non-2xx response from its status and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorResponse>(body) {
            Ok(err) => StoreError::Rejected {
                status,
                code: err.code,
                message: err.message,
            },
            Err(_) if !body.trim().is_empty() => StoreError::rejected(status, body.trim()),
            Err(_) => StoreError::rejected(status, format!("HTTP {}", status)),
        }
    }
}

impl From<gloo_net::Error> for StoreError {
    fn from(e: gloo_net::Error) -> Self {
        StoreError::Transport(e.to_string())
    }
}
