//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.

use crate::application::GenerateUseCase;
use crate::config::Config;
use crate::infrastructure::{LocalFs, UuidSecret};

/// Type alias for the concrete GenerateUseCase with all dependencies
pub type ConcreteGenerateUseCase = GenerateUseCase<LocalFs, UuidSecret>;

/// Create a generate use case writing to local disk
pub fn create_generate_use_case(config: &Config) -> ConcreteGenerateUseCase {
    GenerateUseCase::new(
        LocalFs::new(),
        UuidSecret,
        config.build_settings(),
        config.renderer(),
    )
}
