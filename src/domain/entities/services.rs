//! Container definitions, shaped after the docker-compose (v1) service schema.
//!
//! Field order follows sorted-key order so the rendered YAML is stable.

use serde::{Deserialize, Serialize};

/// `links` entry that lets a container reach the zookeeper on its own host
pub const ZOOKEEPER_LINK: &str = "zk:zk";

/// Coordination node container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZookeeperService {
    pub image: String,
    pub ports: Vec<String>,
    pub restart: String,
    pub volumes: Vec<String>,
}

/// Broker container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KafkaService {
    pub environment: KafkaEnvironment,
    pub image: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<String>,
    pub ports: Vec<String>,
    pub restart: String,
    pub volumes: Vec<String>,
}

impl KafkaService {
    pub fn broker_id(&self) -> usize {
        self.environment.broker_id
    }
}

/// Environment handed to the `wurstmeister/kafka` image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KafkaEnvironment {
    #[serde(rename = "JMX_PORT")]
    pub jmx_port: u16,
    #[serde(rename = "KAFKA_ADVERTISED_HOST_NAME")]
    pub advertised_host: String,
    #[serde(rename = "KAFKA_ADVERTISED_PORT")]
    pub advertised_port: u16,
    #[serde(rename = "KAFKA_AUTO_LEADER_REBALANCE_ENABLE")]
    pub auto_leader_rebalance_enable: String,
    #[serde(rename = "KAFKA_BROKER_ID")]
    pub broker_id: usize,
    #[serde(rename = "KAFKA_CONTROLLED_SHUTDOWN_ENABLE")]
    pub controlled_shutdown_enable: String,
    #[serde(rename = "KAFKA_DELETE_TOPIC_ENABLE")]
    pub delete_topic_enable: String,
    #[serde(rename = "KAFKA_DUAL_COMMIT_ENABLED")]
    pub dual_commit_enabled: String,
    #[serde(rename = "KAFKA_LOG_DIRS")]
    pub log_dirs: String,
    #[serde(rename = "KAFKA_LOG_RETENTION_BYTES")]
    pub log_retention_bytes: i64,
    #[serde(rename = "KAFKA_LOG_RETENTION_HOURS")]
    pub log_retention_hours: i64,
    #[serde(rename = "KAFKA_OFFSETS_STORAGE")]
    pub offsets_storage: String,
    #[serde(rename = "KAFKA_ZOOKEEPER_CONNECT")]
    pub zookeeper_connect: String,
}

/// Management UI container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerService {
    pub environment: ManagerEnvironment,
    pub image: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<String>,
    pub ports: Vec<String>,
    pub restart: String,
}

/// Environment handed to the `kafka-manager` image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerEnvironment {
    #[serde(rename = "APPLICATION_SECRET")]
    pub secret: String,
    #[serde(rename = "ZK_HOSTS")]
    pub zookeeper_hosts: String,
}
