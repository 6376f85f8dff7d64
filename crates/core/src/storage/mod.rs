mod error;
mod http_mapping;
mod traits;
mod types;

pub use error::{ListLimitError, RepositoryError, Result};
pub use http_mapping::repository_error_to_status_code;
pub use traits::{NewsRepository, ScoreRepository};
pub use types::ListLimit;
