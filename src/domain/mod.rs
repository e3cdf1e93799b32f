//! Domain Layer
//!
//! Pure cluster-layout logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Containers, per-host services, the cluster layout, output files
//! - `value_objects/` - Immutable value types (Address, ServiceKind, ContentHash)
//! - `services/` - Domain services (TargetBuilder)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
