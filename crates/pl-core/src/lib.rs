pub mod config;
pub mod error;
pub mod types;

pub use config::{ApiConfig, AppConfig, ServerConfig};
pub use error::{PlError, Result};
pub use types::{PageMetadata, PagingMetadata, PeoplePage, Person};
