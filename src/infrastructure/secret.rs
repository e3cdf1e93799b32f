//! Random manager secrets

use crate::domain::ports::SecretSource;

/// Generates a fresh UUID v4 per call
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidSecret;

impl SecretSource for UuidSecret {
    fn generate(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}
