//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod target_builder;

pub use target_builder::{zookeeper_connect, BuildSettings, TargetBuilder};
