//! Request and response DTOs for the JSON API.
//!
//! These types define the wire format. Server-side domain models convert into them
//! at the controller boundary via `into_dto()`.

pub mod api;
pub mod bug;
pub mod comment_thread;
pub mod user;
