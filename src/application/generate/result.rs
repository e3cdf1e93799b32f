//! Generate Result

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::value_objects::{ContentHash, ServiceKind};

/// One file produced by a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    pub path: PathBuf,
    /// Host for descriptors, `None` for the deploy script
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<ServiceKind>,
    pub hash: ContentHash,
    #[serde(skip)]
    pub executable: bool,
}

/// Result of a generate run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateResult {
    pub directory: PathBuf,
    pub dry_run: bool,
    pub files: Vec<GeneratedFile>,
}

impl GenerateResult {
    pub fn descriptors(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files.iter().filter(|f| f.host.is_some())
    }

    pub fn script(&self) -> Option<&GeneratedFile> {
        self.files.iter().find(|f| f.executable)
    }

    pub fn host_count(&self) -> usize {
        self.descriptors().count()
    }
}
