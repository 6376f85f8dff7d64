mod extract;

pub mod error;
pub mod health;
pub mod news;
pub mod root;
pub mod score;

pub use error::AppError;
