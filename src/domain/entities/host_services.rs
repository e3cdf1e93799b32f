//! HostServices entity - the containers placed on a single docker host

use serde::{Deserialize, Serialize};

use super::services::{KafkaService, ManagerService, ZookeeperService};
use crate::domain::value_objects::ServiceKind;

/// Every container a host runs, keyed the way the descriptor file keys them.
///
/// Each slot holds at most one container. The `set_*` methods insert or
/// overwrite and hand back whatever was there before, so callers decide what
/// an overwrite means.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostServices {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    kafka: Option<KafkaService>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    manager: Option<ManagerService>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "zk")]
    zookeeper: Option<ZookeeperService>,
}

impl HostServices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_zookeeper(&mut self, service: ZookeeperService) -> Option<ZookeeperService> {
        self.zookeeper.replace(service)
    }

    pub fn set_kafka(&mut self, service: KafkaService) -> Option<KafkaService> {
        self.kafka.replace(service)
    }

    pub fn set_manager(&mut self, service: ManagerService) -> Option<ManagerService> {
        self.manager.replace(service)
    }

    pub fn zookeeper(&self) -> Option<&ZookeeperService> {
        self.zookeeper.as_ref()
    }

    pub fn kafka(&self) -> Option<&KafkaService> {
        self.kafka.as_ref()
    }

    pub fn manager(&self) -> Option<&ManagerService> {
        self.manager.as_ref()
    }

    pub fn has(&self, kind: ServiceKind) -> bool {
        match kind {
            ServiceKind::Zookeeper => self.zookeeper.is_some(),
            ServiceKind::Kafka => self.kafka.is_some(),
            ServiceKind::Manager => self.manager.is_some(),
        }
    }

    /// Kinds present on this host, in processing order
    pub fn kinds(&self) -> Vec<ServiceKind> {
        ServiceKind::ALL
            .into_iter()
            .filter(|kind| self.has(*kind))
            .collect()
    }
}
