//! OutputFile entity - a rendered file ready to be written
//!
//! OutputFiles are what the renderer produces from a `ClusterLayout`.
//! Paths are relative to the output directory.

use std::path::PathBuf;

use crate::domain::value_objects::{ContentHash, ServiceKind};

/// What a file is for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputKind {
    /// `node-<host>.yml` descriptor
    Descriptor {
        host: String,
        services: Vec<ServiceKind>,
    },
    /// `deploy-cluster.sh`
    Script,
}

/// A rendered file ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct OutputFile {
    path: PathBuf,
    content: String,
    kind: OutputKind,
}

impl OutputFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>, kind: OutputKind) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            kind,
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn kind(&self) -> &OutputKind {
        &self.kind
    }

    /// Whether the owner execute bit should be set after writing
    pub fn is_executable(&self) -> bool {
        matches!(self.kind, OutputKind::Script)
    }

    /// Host this descriptor belongs to, `None` for the script
    pub fn host(&self) -> Option<&str> {
        match &self.kind {
            OutputKind::Descriptor { host, .. } => Some(host),
            OutputKind::Script => None,
        }
    }

    pub fn hash(&self) -> ContentHash {
        ContentHash::from_content(&self.content)
    }
}
