pub use super::app::Entity as App;
pub use super::bug::Entity as Bug;
pub use super::bug_app::Entity as BugApp;
pub use super::bug_severity::Entity as BugSeverity;
pub use super::bug_status::Entity as BugStatus;
pub use super::comment_thread::Entity as CommentThread;
pub use super::severity::Entity as Severity;
pub use super::status::Entity as Status;
pub use super::user::Entity as User;
