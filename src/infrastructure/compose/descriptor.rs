//! Per-host descriptor (`node-<host>.yml`)

use crate::domain::entities::HostServices;
use crate::error::ComposeResult;

/// File name of the descriptor for `host`
pub fn descriptor_file_name(host: &str) -> String {
    format!("node-{}.yml", host)
}

/// Serialize a host's services as block-style YAML.
///
/// Top-level keys are the service keys (`kafka`, `manager`, `zk`); absent
/// services are omitted entirely.
pub fn render_descriptor(services: &HostServices) -> ComposeResult<String> {
    Ok(serde_yaml_ng::to_string(services)?)
}
