//! Generate Use Case
//!
//! Builds the cluster layout, renders it and writes the files.

mod options;
mod result;
mod use_case;

#[cfg(test)]
mod tests;

pub use options::GenerateOptions;
pub use result::{GenerateResult, GeneratedFile};
pub use use_case::GenerateUseCase;
