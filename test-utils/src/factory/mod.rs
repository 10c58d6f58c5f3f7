//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert rows into the database and handle
//! foreign key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let lookups = factory::lookup::create_default_lookups(&db).await?;
//!
//!     // Create with all dependencies
//!     let (user, lookups, bug) = factory::helpers::create_bug_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let dev = factory::user::UserFactory::new(&db)
//!     .user_name("maintainer")
//!     .dev(true)
//!     .build()
//!     .await?;
//!
//! let bug = factory::bug::BugFactory::new(&db, dev.id, &lookups)
//!     .bug_name("Login button unresponsive")
//!     .status("in progress")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `lookup` - Create status, severity, and app lookup rows
//! - `bug` - Create bugs together with their status/app/severity links
//! - `comment_thread` - Create comments on a bug
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod bug;
pub mod comment_thread;
pub mod helpers;
pub mod lookup;
pub mod user;

pub use bug::create_bug;
pub use comment_thread::create_comment;
pub use lookup::create_default_lookups;
pub use user::{create_dev, create_user};
