//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `GenerateUseCase` - build layout, render, write descriptors and script

pub mod generate;

pub use generate::{GenerateOptions, GenerateResult, GenerateUseCase, GeneratedFile};
