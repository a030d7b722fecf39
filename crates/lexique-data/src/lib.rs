pub mod client;
pub mod error;
pub mod state;

pub use client::{DatasetClient, DatasetSource};
pub use error::FetchError;
pub use state::LoadState;
