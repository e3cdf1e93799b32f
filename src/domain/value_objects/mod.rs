//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod address;
mod hash;
mod service_kind;

pub use address::{
    Address, DEFAULT_DOCKER_PORT, DEFAULT_KAFKA_PORT, DEFAULT_MANAGER_PORT,
    DEFAULT_ZOOKEEPER_PORT, JMX_PORT,
};
pub use hash::ContentHash;
pub use service_kind::ServiceKind;
