pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod pages;
pub mod session;
pub mod view;

pub use api::{ApiClient, Transport};
pub use error::ApiError;
pub use session::Session;
