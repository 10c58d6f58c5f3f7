//! Request processing that runs before handlers.
//!
//! - `auth` - Session-based authentication guards and route middleware
//! - `session` - Type-safe wrapper over the request session
//! - `validate` - JSON body extraction with field validation

pub mod auth;
pub mod session;
pub mod validate;
