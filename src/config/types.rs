//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::domain::services::BuildSettings;
use crate::domain::value_objects::DEFAULT_DOCKER_PORT;
use crate::infrastructure::ComposeRenderer;

/// Container images
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagesConfig {
    #[serde(default = "default_zookeeper_image")]
    pub zookeeper: String,

    #[serde(default = "default_kafka_image")]
    pub kafka: String,

    #[serde(default = "default_manager_image")]
    pub manager: String,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            zookeeper: default_zookeeper_image(),
            kafka: default_kafka_image(),
            manager: default_manager_image(),
        }
    }
}

fn default_zookeeper_image() -> String {
    BuildSettings::default().zookeeper_image
}

fn default_kafka_image() -> String {
    BuildSettings::default().kafka_image
}

fn default_manager_image() -> String {
    BuildSettings::default().manager_image
}

/// Deploy script and restart policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployConfig {
    /// docker-compose project name (`-p`)
    #[serde(default = "default_project")]
    pub project: String,

    /// Port of the remote docker daemon on every host
    #[serde(default = "default_docker_port")]
    pub docker_port: u16,

    #[serde(default = "default_restart")]
    pub restart: String,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            project: default_project(),
            docker_port: default_docker_port(),
            restart: default_restart(),
        }
    }
}

fn default_project() -> String {
    "kafka".to_string()
}

fn default_docker_port() -> u16 {
    DEFAULT_DOCKER_PORT
}

fn default_restart() -> String {
    BuildSettings::default().restart
}

/// Manager UI configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerConfig {
    /// Fixed `APPLICATION_SECRET`; a random UUID is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub images: ImagesConfig,

    #[serde(default)]
    pub deploy: DeployConfig,

    #[serde(default)]
    pub manager: ManagerConfig,
}

impl Config {
    /// Settings for the target builder
    pub fn build_settings(&self) -> BuildSettings {
        BuildSettings {
            zookeeper_image: self.images.zookeeper.clone(),
            kafka_image: self.images.kafka.clone(),
            manager_image: self.images.manager.clone(),
            restart: self.deploy.restart.clone(),
            manager_secret: self.manager.secret.clone(),
        }
    }

    /// Renderer for descriptors and the deploy script
    pub fn renderer(&self) -> ComposeRenderer {
        ComposeRenderer::new(self.deploy.docker_port, self.deploy.project.clone())
    }
}
