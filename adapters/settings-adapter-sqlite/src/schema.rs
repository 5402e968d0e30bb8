//! Database schema initialization
//!
//! Creates the settings table on first open. Settings rows are created by
//! seeding, never by the settings service itself.

use sqlx::SqlitePool;

pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	sqlx::query(
		"CREATE TABLE IF NOT EXISTS settings (
			key text NOT NULL,
			value text NOT NULL,
			type text NOT NULL,
			updated_at datetime,
			updated_by text,
			PRIMARY KEY(key)
	)",
	)
	.execute(&mut *tx)
	.await?;

	sqlx::query("CREATE INDEX IF NOT EXISTS idx_settings_type ON settings(type)")
		.execute(&mut *tx)
		.await?;

	tx.commit().await?;

	Ok(())
}

// vim: ts=4
