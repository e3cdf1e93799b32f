//! ClusterLayout entity - which containers run on which docker host

use std::collections::BTreeMap;

use super::host_services::HostServices;

/// Host name to the services it runs.
///
/// Hosts iterate in sorted order, which fixes the order of descriptor files
/// and deploy-script lines between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterLayout {
    hosts: BTreeMap<String, HostServices>,
}

impl ClusterLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Services for `host`, created empty on first use
    pub fn host_mut(&mut self, host: &str) -> &mut HostServices {
        self.hosts.entry(host.to_string()).or_default()
    }

    pub fn host(&self, host: &str) -> Option<&HostServices> {
        self.hosts.get(host)
    }

    pub fn hosts(&self) -> impl Iterator<Item = (&str, &HostServices)> {
        self.hosts.iter().map(|(name, services)| (name.as_str(), services))
    }

    pub fn host_names(&self) -> Vec<&str> {
        self.hosts.keys().map(String::as_str).collect()
    }
}
