mod bug;
mod comment_thread;
mod lookup;
mod user;
