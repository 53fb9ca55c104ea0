pub mod client;
pub mod credential;
pub mod types;

pub use client::{SignageApiClient, SignageConfig};
pub use credential::BasicCredentials;
pub use types::{AllCardSignageLinks, CardLink, CardSignageLink, ContentRequest, SignageStatus};
