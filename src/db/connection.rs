//! Postgres connection helpers.
//!
//! Provides [`connect_postgres`], which opens a connection from a
//! [`DbConfig`] and verifies it with a `SELECT 1` probe before handing it to
//! the pipeline. There is no pooling and no retry: one run, one connection,
//! closed when the handle drops on any exit path.

use diesel::{Connection, PgConnection, RunQueryDsl, sql_query};
use tracing::info;

use crate::config::DbConfig;
use crate::errors::EtlError;

/// Open a Postgres connection and verify reachability.
///
/// # Errors
/// [`EtlError::Connect`] if the connection cannot be established (network,
/// auth, unknown database), [`EtlError::Liveness`] if it opens but the probe
/// query fails.
pub fn connect_postgres(config: &DbConfig) -> Result<PgConnection, EtlError> {
    let mut conn = PgConnection::establish(&config.database_url())?;

    sql_query("SELECT 1")
        .execute(&mut conn)
        .map_err(EtlError::Liveness)?;

    info!(host = %config.host, db = %config.name, "connected to database");
    Ok(conn)
}
