pub mod error;
pub mod password;
pub mod record;
pub mod store;

// Re-export the main types and functions
pub use error::DirectoryError;
pub use password::{digest_password, validate_password_length, HashScheme, PasswordDigest};
pub use record::UserRecord;
pub use store::Directory;
