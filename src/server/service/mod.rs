//! Business logic layer between controllers and repositories.
//!
//! Services take domain parameter types, orchestrate one or more repositories, and
//! return domain models or `AppError`.

pub mod bug;
pub mod comment_thread;
pub mod user;

#[cfg(test)]
mod test;
