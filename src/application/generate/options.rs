//! Generate Options

use std::path::PathBuf;

/// Options for the generate use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Broker addresses, in broker-id order
    pub brokers: Vec<String>,
    /// Zookeeper addresses
    pub zookeepers: Vec<String>,
    /// Manager addresses (may be empty)
    pub managers: Vec<String>,
    /// Directory receiving descriptors and the deploy script
    pub output_dir: PathBuf,
    /// Render everything but write nothing
    pub dry_run: bool,
}

impl GenerateOptions {
    pub fn new(brokers: Vec<String>, zookeepers: Vec<String>) -> Self {
        Self {
            brokers,
            zookeepers,
            managers: Vec::new(),
            output_dir: PathBuf::from("."),
            dry_run: false,
        }
    }

    /// Empty tokens are dropped, so `--manager=` means no managers.
    pub fn with_managers(mut self, managers: Vec<String>) -> Self {
        self.managers = managers.into_iter().filter(|m| !m.is_empty()).collect();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
