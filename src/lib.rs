pub mod config;
pub mod error;
pub mod fetch;
pub mod storage;

pub use config::FetchConfig;
pub use error::{ErrorKind, FetchError};
pub use fetch::Fetcher;
