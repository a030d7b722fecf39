use crate::error::FetchError;

/// Tri-state outcome of one dataset load. `Failed` is terminal for the
/// attempt; a new load starts over from `Pending`.
#[derive(Debug, Default)]
pub enum LoadState<T> {
    #[default]
    Pending,
    Ready(Vec<T>),
    Failed(FetchError),
}

impl<T> LoadState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::Pending)
    }

    /// Loaded records, only when the load succeeded. A failed load never
    /// presents an empty slice as success.
    pub fn records(&self) -> Option<&[T]> {
        match self {
            LoadState::Ready(records) => Some(records),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> From<Result<Vec<T>, FetchError>> for LoadState<T> {
    fn from(result: Result<Vec<T>, FetchError>) -> Self {
        match result {
            Ok(records) => LoadState::Ready(records),
            Err(err) => LoadState::Failed(err),
        }
    }
}
