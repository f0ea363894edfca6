// First, declare the modules folder itself
mod modules;

// Re-export everything from modules for easier access
pub use modules::{cli, config, directory, utils};

// Re-export commonly used types
pub use modules::config::DirectoryConfig;
pub use modules::directory::{Directory, DirectoryError, HashScheme, UserRecord};

// Constants
pub const MIN_PASSWORD_LENGTH: usize = 4;
pub const LOG_FILE: &str = "directory.log";
pub const SALT_LENGTH: usize = 16;
pub const DERIVED_KEY_LENGTH: usize = 32;
pub const PBKDF2_ITERATIONS: u32 = 100_000;

// Type aliases
pub type HmacSha256 = hmac::Hmac<sha2::Sha256>;
