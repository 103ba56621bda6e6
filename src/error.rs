use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("missing API credential: set {0} in the environment or in .env")]
    MissingCredential(&'static str),

    #[error("maxResults must be greater than zero")]
    InvalidMaxResults,

    #[error("search request failed with HTTP {status}: {message}")]
    RemoteRequest { status: u16, message: String },

    #[error("search request could not be completed")]
    Transport(#[source] reqwest::Error),

    #[error("malformed search response")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("could not write CSV output")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
