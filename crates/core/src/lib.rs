//! Core for the gamefeed backend.
//!
//! Pure data types, request validation and repository contracts shared by
//! the server. Nothing in this crate performs I/O.

pub mod news;
pub mod score;
pub mod serde;
pub mod status;
pub mod storage;
pub mod validation;
