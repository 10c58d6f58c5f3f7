//! HTTP request handlers.
//!
//! Controllers extract path, session, and body data, convert DTOs into parameter
//! types, call a service, and convert the result back into a DTO. Access control is
//! applied by route middleware before the handler runs.

pub mod bug;
pub mod comment_thread;
pub mod root;
pub mod user;
