pub mod sqlite;
mod user;

pub use user::{StorageError, UserStorage};
