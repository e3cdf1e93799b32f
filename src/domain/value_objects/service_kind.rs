//! Service kind value object - which container a descriptor entry describes

use serde::{Serialize, Serializer};

use super::address::{DEFAULT_KAFKA_PORT, DEFAULT_MANAGER_PORT, DEFAULT_ZOOKEEPER_PORT};

/// Kind of service that can be placed on a host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ServiceKind {
    /// Coordination node
    Zookeeper,
    /// Message broker
    Kafka,
    /// Web management UI
    Manager,
}

impl ServiceKind {
    /// All kinds, in the order the builder processes them
    pub const ALL: [ServiceKind; 3] = [
        ServiceKind::Zookeeper,
        ServiceKind::Kafka,
        ServiceKind::Manager,
    ];

    /// Key used for this service inside a descriptor file, and its name in
    /// JSON reports
    pub fn descriptor_key(&self) -> &'static str {
        match self {
            ServiceKind::Zookeeper => "zk",
            ServiceKind::Kafka => "kafka",
            ServiceKind::Manager => "manager",
        }
    }

    /// Port used when an address omits one
    pub fn default_port(&self) -> u16 {
        match self {
            ServiceKind::Zookeeper => DEFAULT_ZOOKEEPER_PORT,
            ServiceKind::Kafka => DEFAULT_KAFKA_PORT,
            ServiceKind::Manager => DEFAULT_MANAGER_PORT,
        }
    }
}

impl std::fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceKind::Zookeeper => write!(f, "zookeeper"),
            ServiceKind::Kafka => write!(f, "broker"),
            ServiceKind::Manager => write!(f, "manager"),
        }
    }
}

impl Serialize for ServiceKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.descriptor_key())
    }
}
