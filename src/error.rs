use thiserror::Error;

/// Errors surfaced by every client operation.
///
/// Nothing is retried or downgraded: transport errors, decode errors and
/// synthesized REST errors all propagate to the immediate caller unchanged.
#[derive(Error, Debug)]
pub enum TeamCityError {
    #[error("HTTP error: {0}")]
    Http(#[from] ureq::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Non-success status code, carrying the raw response body.
    #[error("API error ({status}) when performing {verb} on {resource}: {body}")]
    Rest {
        status: u16,
        verb: &'static str,
        resource: String,
        body: String,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported feature type: {0}")]
    UnsupportedFeature(String),
}

impl TeamCityError {
    /// True when the server reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, TeamCityError::Rest { status: 404, .. })
    }
}

pub type Result<T> = std::result::Result<T, TeamCityError>;
