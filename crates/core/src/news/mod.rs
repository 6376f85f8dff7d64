mod ids;
mod requests;
mod types;

pub use ids::{next_post_id, FIRST_POST_ID};
pub use requests::{DeleteNewsRequest, PostNewsRequest};
pub use types::{NewsDraft, NewsKey, NewsPost};
