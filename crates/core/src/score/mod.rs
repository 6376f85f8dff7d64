mod requests;
mod types;

pub use requests::{DeleteScoreRequest, PostScoreRequest};
pub use types::ScoreEntry;
