//! Address value object - a `host[:port]` token resolved against a default port
//!
//! Hosts are opaque: DNS names, IPs or docker host aliases all pass through
//! untouched. Only the port segment is validated.

use std::fmt;

use crate::error::{ComposeError, ComposeResult};

/// Port a broker listens on when none is given
pub const DEFAULT_KAFKA_PORT: u16 = 9092;
/// Port a zookeeper node listens on when none is given
pub const DEFAULT_ZOOKEEPER_PORT: u16 = 2181;
/// Port the manager UI listens on when none is given
pub const DEFAULT_MANAGER_PORT: u16 = 9000;
/// Remote docker daemon port targeted by the deploy script
pub const DEFAULT_DOCKER_PORT: u16 = 2375;
/// JMX port every broker exposes
pub const JMX_PORT: u16 = 9093;

/// A normalized `host:port` pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    host: String,
    port: u16,
}

impl Address {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Parse `host` or `host:port`, falling back to `default_port`.
    ///
    /// More than one `:` or a port that is not a `u16` is rejected. The host
    /// is taken as given, even when empty.
    pub fn parse(token: &str, default_port: u16) -> ComposeResult<Self> {
        let mut segments = token.split(':');
        let host = segments.next().unwrap_or_default();
        let port = segments.next();

        if segments.next().is_some() {
            return Err(ComposeError::malformed(
                token,
                "expected 'host' or 'host:port'",
            ));
        }

        let port = match port {
            None => default_port,
            Some(raw) => raw.parse::<u16>().map_err(|_| {
                ComposeError::malformed(token, format!("port '{}' is not a valid port", raw))
            })?,
        };

        Ok(Self::new(host, port))
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
