use crate::{pkg::server::state::db_pool, prelude::Result};
use sqlx::migrate::Migrator;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub async fn apply() -> Result<()> {
    let pool = db_pool()?;
    tracing::debug!("connected to db");
    MIGRATOR.run(&pool).await?;

    println!("Migrations applied successfully");
    Ok(())
}
