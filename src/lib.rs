pub mod client;
pub mod config;
pub mod credential;
pub mod default_colors;
pub mod error;
pub mod location;
pub mod page;
pub mod render;
pub mod server;
pub mod types;

pub use client::ApiClient;
pub use credential::Credential;
pub use error::{FetchError, FetchResult};
pub use page::{BookDetailPage, PageState};
