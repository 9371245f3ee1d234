pub mod client;
pub mod fetch;
pub mod transport;
pub mod types;

pub use client::{ApiClient, CsvUpload, LoginOutcome, Refreshed};
pub use fetch::FetchTransport;
pub use transport::{ApiRequest, ApiResponse, Method, RequestBody, Transport, UploadFile};
pub use types::*;

use crate::config::Config;

/// Client wired to the browser fetch API for the given config.
pub fn browser_client(config: &Config) -> ApiClient<FetchTransport> {
    ApiClient::new(FetchTransport::new(config.clone()))
}
