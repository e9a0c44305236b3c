//! Database utilities: connection establishment and the liveness probe.

pub mod connection;
