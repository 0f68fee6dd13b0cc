// Types representing compiled sentence templates

mod classify;
mod error;
mod types;

// Re-export all public symbols
pub use classify::*;
pub use error::*;
pub use types::*;
