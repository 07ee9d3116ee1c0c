pub mod algolia;
pub mod client;
pub mod types;

pub use algolia::AlgoliaClient;
pub use client::{SearchClient, SearchError};
pub use types::{RequestUrl, SearchResponse, Story};
