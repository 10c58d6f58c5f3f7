//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories are generic over `ConnectionTrait` so they
//! accept either the pool or an open transaction. They use SeaORM entity models
//! internally and return domain models to the service layer.

pub mod bug;
pub mod comment_thread;
pub mod crud;
pub mod lookup;
pub mod user;

#[cfg(test)]
mod test;
