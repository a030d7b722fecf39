use std::time::Duration;

use serde::de::DeserializeOwned;

use lexique_config::source::SourceConfig;
use lexique_types::{BilingualText, Dataset, GrammarPoint, VerbConjugation, VocabularyEntry};

use crate::error::FetchError;

/// Read-only access to the four static datasets. The HTTP client below is
/// the production implementation; tests substitute in-memory sources.
#[async_trait::async_trait]
pub trait DatasetSource: Send + Sync {
    async fn fetch_vocabulary(&self) -> Result<Vec<VocabularyEntry>, FetchError>;
    async fn fetch_grammar(&self) -> Result<Vec<GrammarPoint>, FetchError>;
    async fn fetch_verbs(&self) -> Result<Vec<VerbConjugation>, FetchError>;
    async fn fetch_texts(&self) -> Result<Vec<BilingualText>, FetchError>;
}

#[derive(Clone)]
pub struct DatasetClient {
    source: SourceConfig,
    client: reqwest::Client,
}

impl DatasetClient {
    pub fn new(config: &SourceConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            source: config.clone(),
            client,
        })
    }

    /// Fetch one dataset resource and decode it as a JSON array
    async fn fetch<T>(&self, dataset: Dataset) -> Result<Vec<T>, FetchError>
    where
        T: DeserializeOwned,
    {
        let url = self.source.resource_url(dataset.file_name());
        tracing::debug!("Fetching {dataset} from {url}");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("Fetch of {dataset} failed with status {status}");
            return Err(FetchError::Status { dataset, status });
        }

        // Body is read as text first so a decode failure is reported as a
        // malformed dataset, not a transport error.
        let body = response.text().await?;
        let records: Vec<T> = serde_json::from_str(&body)
            .map_err(|source| FetchError::Malformed { dataset, source })?;

        tracing::info!("Loaded {} {dataset} records", records.len());
        Ok(records)
    }
}

#[async_trait::async_trait]
impl DatasetSource for DatasetClient {
    async fn fetch_vocabulary(&self) -> Result<Vec<VocabularyEntry>, FetchError> {
        self.fetch(Dataset::Vocabulary).await
    }

    async fn fetch_grammar(&self) -> Result<Vec<GrammarPoint>, FetchError> {
        self.fetch(Dataset::Grammar).await
    }

    async fn fetch_verbs(&self) -> Result<Vec<VerbConjugation>, FetchError> {
        self.fetch(Dataset::Verbs).await
    }

    async fn fetch_texts(&self) -> Result<Vec<BilingualText>, FetchError> {
        self.fetch(Dataset::Texts).await
    }
}
