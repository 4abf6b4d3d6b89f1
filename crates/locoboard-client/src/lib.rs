pub mod client;
pub mod error;
pub mod types;

pub use client::LocationApiClient;
pub use error::ClientError;
pub use types::AddLocationResponse;
