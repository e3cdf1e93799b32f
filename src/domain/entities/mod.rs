//! Domain Entities
//!
//! - `ZookeeperService`, `KafkaService`, `ManagerService` - one container each
//! - `HostServices` - every container placed on one docker host
//! - `ClusterLayout` - host name to `HostServices`
//! - `OutputFile` - a rendered file ready to be written

mod host_services;
mod layout;
mod output_file;
mod services;

pub use host_services::HostServices;
pub use layout::ClusterLayout;
pub use output_file::{OutputFile, OutputKind};
pub use services::{
    KafkaEnvironment, KafkaService, ManagerEnvironment, ManagerService, ZookeeperService,
    ZOOKEEPER_LINK,
};
