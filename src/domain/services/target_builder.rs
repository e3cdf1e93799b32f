//! Target builder service
//!
//! Turns the three address lists into a `ClusterLayout`: zookeepers first,
//! then brokers, then managers. Brokers are numbered by their position in the
//! input list, so appending brokers never renumbers existing ones.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::domain::entities::{
    ClusterLayout, KafkaEnvironment, KafkaService, ManagerEnvironment, ManagerService,
    ZookeeperService, ZOOKEEPER_LINK,
};
use crate::domain::ports::SecretSource;
use crate::domain::value_objects::{Address, ServiceKind, JMX_PORT};
use crate::error::{ComposeError, ComposeResult};

const ZOOKEEPER_VOLUME: &str = "/data/zookeeper/data:/opt/zookeeper-3.4.6/data/";
const ZOOKEEPER_CONTAINER_PORT: u16 = 2181;
const KAFKA_CONTAINER_PORT: u16 = 9092;
const MANAGER_CONTAINER_PORT: u16 = 9000;
const LOG_RETENTION_HOURS: i64 = 2_147_483_647;
const LOG_RETENTION_BYTES: i64 = -1;

/// Image names and policies applied to every generated container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSettings {
    pub zookeeper_image: String,
    pub kafka_image: String,
    pub manager_image: String,
    pub restart: String,
    /// Overrides the generated manager secret
    pub manager_secret: Option<String>,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            zookeeper_image: "wurstmeister/zookeeper".to_string(),
            kafka_image: "wurstmeister/kafka:0.8.2.1".to_string(),
            manager_image: "sheepkiller/kafka-manager".to_string(),
            restart: "always".to_string(),
            manager_secret: None,
        }
    }
}

/// Builds the per-host service layout
pub struct TargetBuilder<'a> {
    settings: &'a BuildSettings,
}

impl<'a> TargetBuilder<'a> {
    pub fn new(settings: &'a BuildSettings) -> Self {
        Self { settings }
    }

    /// Build the layout for the given address lists.
    ///
    /// All three lists are checked for repeated raw tokens before anything
    /// is parsed. Two spellings of the same endpoint (`h1` and `h1:9092`)
    /// are not detected.
    pub fn build(
        &self,
        brokers: &[String],
        zookeepers: &[String],
        managers: &[String],
        secrets: &dyn SecretSource,
    ) -> ComposeResult<ClusterLayout> {
        ensure_unique(ServiceKind::Kafka, brokers)?;
        ensure_unique(ServiceKind::Zookeeper, zookeepers)?;
        ensure_unique(ServiceKind::Manager, managers)?;

        let mut layout = ClusterLayout::new();

        let zk_addrs = zookeepers
            .iter()
            .map(|token| Address::parse(token, ServiceKind::Zookeeper.default_port()))
            .collect::<ComposeResult<Vec<_>>>()?;

        for addr in &zk_addrs {
            let previous = layout
                .host_mut(addr.host())
                .set_zookeeper(self.zookeeper_service(addr));
            if previous.is_some() {
                warn!(host = addr.host(), "second zookeeper on host replaces the first");
            }
        }

        for (broker_id, token) in brokers.iter().enumerate() {
            let addr = Address::parse(token, ServiceKind::Kafka.default_port())?;
            let (connect, linked) = zookeeper_connect(&zk_addrs, addr.host());
            debug!(broker_id, host = addr.host(), port = addr.port(), linked, "assigned broker");

            let previous = layout
                .host_mut(addr.host())
                .set_kafka(self.kafka_service(&addr, broker_id, connect, linked));
            if let Some(previous) = previous {
                warn!(
                    host = addr.host(),
                    replaced = previous.broker_id(),
                    broker_id,
                    "second broker on host replaces the first"
                );
            }
        }

        if !managers.is_empty() {
            let secret = match &self.settings.manager_secret {
                Some(secret) => secret.clone(),
                None => secrets.generate(),
            };

            for token in managers {
                let addr = Address::parse(token, ServiceKind::Manager.default_port())?;
                let (connect, linked) = zookeeper_connect(&zk_addrs, addr.host());
                debug!(host = addr.host(), port = addr.port(), linked, "assigned manager");

                let previous = layout.host_mut(addr.host()).set_manager(self.manager_service(
                    &addr,
                    connect,
                    secret.clone(),
                    linked,
                ));
                if previous.is_some() {
                    warn!(host = addr.host(), "second manager on host replaces the first");
                }
            }
        }

        Ok(layout)
    }

    fn zookeeper_service(&self, addr: &Address) -> ZookeeperService {
        ZookeeperService {
            image: self.settings.zookeeper_image.clone(),
            ports: vec![format!("{}:{}", addr.port(), ZOOKEEPER_CONTAINER_PORT)],
            restart: self.settings.restart.clone(),
            volumes: vec![ZOOKEEPER_VOLUME.to_string()],
        }
    }

    fn kafka_service(
        &self,
        addr: &Address,
        broker_id: usize,
        zookeeper_connect: String,
        linked: bool,
    ) -> KafkaService {
        let log_dirs = format!("/kafka/logs.{}", broker_id);

        KafkaService {
            environment: KafkaEnvironment {
                jmx_port: JMX_PORT,
                advertised_host: addr.host().to_string(),
                advertised_port: addr.port(),
                auto_leader_rebalance_enable: "true".to_string(),
                broker_id,
                controlled_shutdown_enable: "true".to_string(),
                delete_topic_enable: "true".to_string(),
                dual_commit_enabled: "false".to_string(),
                log_dirs: log_dirs.clone(),
                log_retention_bytes: LOG_RETENTION_BYTES,
                log_retention_hours: LOG_RETENTION_HOURS,
                offsets_storage: "kafka".to_string(),
                zookeeper_connect,
            },
            image: self.settings.kafka_image.clone(),
            links: link_entries(linked),
            ports: vec![
                format!("{}:{}", JMX_PORT, JMX_PORT),
                format!("{}:{}", addr.port(), KAFKA_CONTAINER_PORT),
            ],
            restart: self.settings.restart.clone(),
            volumes: vec![format!("/data/kafka/logs.{}:{}", broker_id, log_dirs)],
        }
    }

    fn manager_service(
        &self,
        addr: &Address,
        zookeeper_hosts: String,
        secret: String,
        linked: bool,
    ) -> ManagerService {
        ManagerService {
            environment: ManagerEnvironment {
                secret,
                zookeeper_hosts,
            },
            image: self.settings.manager_image.clone(),
            links: link_entries(linked),
            ports: vec![format!("{}:{}", addr.port(), MANAGER_CONTAINER_PORT)],
            restart: self.settings.restart.clone(),
        }
    }
}

/// Connection string for a container on `host`, plus whether it links.
///
/// The first zookeeper whose host equals `host` is addressed through the
/// `zk` link alias instead of its host name. Only that first match is
/// rewritten: a host carrying several zookeepers still lists the others by
/// host name.
pub fn zookeeper_connect(zookeepers: &[Address], host: &str) -> (String, bool) {
    let mut linked = false;
    let entries: Vec<String> = zookeepers
        .iter()
        .map(|zk| {
            if !linked && zk.host() == host {
                linked = true;
                format!("zk:{}", zk.port())
            } else {
                zk.to_string()
            }
        })
        .collect();

    (entries.join(","), linked)
}

fn link_entries(linked: bool) -> Vec<String> {
    if linked {
        vec![ZOOKEEPER_LINK.to_string()]
    } else {
        Vec::new()
    }
}

fn ensure_unique(kind: ServiceKind, tokens: &[String]) -> ComposeResult<()> {
    let mut seen = HashSet::new();
    for token in tokens {
        if !seen.insert(token.as_str()) {
            return Err(ComposeError::DuplicateAddress {
                kind,
                token: token.clone(),
            });
        }
    }
    Ok(())
}
