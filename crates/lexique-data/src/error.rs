use lexique_types::Dataset;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server returned {status} for {dataset}")]
    Status {
        dataset: Dataset,
        status: reqwest::StatusCode,
    },

    #[error("Malformed response for {dataset}: {source}")]
    Malformed {
        dataset: Dataset,
        #[source]
        source: serde_json::Error,
    },
}
