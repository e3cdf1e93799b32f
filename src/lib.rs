//! kafka-compose - docker-compose generator for Kafka clusters
//!
//! Given broker, zookeeper and (optionally) kafka-manager addresses, works
//! out which containers run on each docker host, wires their connection
//! strings together and writes one `node-<host>.yml` per host plus a
//! `deploy-cluster.sh` that brings them all up.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{GenerateOptions, GenerateResult, GenerateUseCase};
pub use config::Config;
pub use domain::entities::{ClusterLayout, HostServices};
pub use domain::services::{BuildSettings, TargetBuilder};
pub use domain::value_objects::{Address, ServiceKind};
pub use error::{ComposeError, ComposeResult};
