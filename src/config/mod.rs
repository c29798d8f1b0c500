mod env;
mod loader;
mod types;

pub use env::EnvFile;
pub use loader::{CONFIG_FILE_NAME, load};
pub use types::RunConfig;
