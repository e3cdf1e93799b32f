//! docker-compose rendering
//!
//! Turns a `ClusterLayout` into `OutputFile`s: one descriptor per host and
//! one deploy script that drives them all.

mod descriptor;
mod script;

pub use descriptor::{descriptor_file_name, render_descriptor};
pub use script::{render_script, SCRIPT_FILE_NAME};

use crate::domain::entities::{ClusterLayout, OutputFile, OutputKind};
use crate::domain::value_objects::DEFAULT_DOCKER_PORT;
use crate::error::ComposeResult;

/// Renders descriptors and the deploy script for a layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeRenderer {
    docker_port: u16,
    project: String,
}

impl Default for ComposeRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_DOCKER_PORT, "kafka")
    }
}

impl ComposeRenderer {
    pub fn new(docker_port: u16, project: impl Into<String>) -> Self {
        Self {
            docker_port,
            project: project.into(),
        }
    }

    /// Descriptors in host order, followed by the script
    pub fn render(&self, layout: &ClusterLayout) -> ComposeResult<Vec<OutputFile>> {
        let mut outputs = Vec::new();

        for (host, services) in layout.hosts() {
            outputs.push(OutputFile::new(
                descriptor_file_name(host),
                render_descriptor(services)?,
                OutputKind::Descriptor {
                    host: host.to_string(),
                    services: services.kinds(),
                },
            ));
        }

        outputs.push(OutputFile::new(
            SCRIPT_FILE_NAME,
            render_script(&layout.host_names(), self.docker_port, &self.project),
            OutputKind::Script,
        ));

        Ok(outputs)
    }
}
