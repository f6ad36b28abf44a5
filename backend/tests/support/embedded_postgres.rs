//! Embedded PostgreSQL provisioning for adapter suites.
//!
//! Each suite gets a fresh database on the process-wide cluster with the
//! `migrations/` schema applied through Diesel's migration harness.

use diesel::pg::PgConnection;
use diesel::{Connection, RunQueryDsl};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use pg_embedded_setup_unpriv::TemporaryDatabase;
use pg_embedded_setup_unpriv::test_support::shared_cluster_handle;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Create a temporary database with the `usuarios` table in place.
pub fn provision_database() -> Result<TemporaryDatabase, String> {
    let cluster = shared_cluster_handle().map_err(|err| format!("start cluster: {err:?}"))?;
    let database = cluster
        .create_temporary_database()
        .map_err(|err| format!("create database: {err:?}"))?;
    migrate_schema(&database.url().to_string())?;
    Ok(database)
}

/// Apply every pending migration to the database at `url`.
pub fn migrate_schema(url: &str) -> Result<(), String> {
    let mut conn = PgConnection::establish(url).map_err(|err| format!("connect: {err}"))?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|err| format!("migrate: {err}"))?;
    Ok(())
}

/// Drop the `usuarios` table to simulate schema loss.
pub fn drop_usuarios_table(url: &str) -> Result<(), String> {
    let mut conn = PgConnection::establish(url).map_err(|err| format!("connect: {err}"))?;
    diesel::sql_query("DROP TABLE IF EXISTS usuarios")
        .execute(&mut conn)
        .map_err(|err| format!("drop table: {err}"))?;
    Ok(())
}
