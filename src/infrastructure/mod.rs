//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations
//! - `compose/` - docker-compose descriptor and deploy script rendering
//! - `secret` - UUID-backed manager secrets

pub mod compose;
pub mod fs;
pub mod secret;

pub use compose::ComposeRenderer;
pub use fs::LocalFs;
pub use secret::UuidSecret;
