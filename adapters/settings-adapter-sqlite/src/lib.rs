//! SQLite-backed settings store
//!
//! Implements the `SettingsAdapter` trait over a WAL-mode SQLite database.
//! Bulk updates run in a single transaction and only overwrite values of
//! existing keys; key creation happens through the out-of-band [`seed`]
//! helper (settings are created by seed data, never by the service).
//!
//! [`seed`]: SettingsAdapterSqlite::seed

use async_trait::async_trait;
use sqlx::{
	Row,
	sqlite::{self, SqlitePool, SqliteRow},
};
use std::path::Path;

use folio::prelude::*;
use folio::settings_adapter::{
	ListOptions, Setting, SettingType, SettingUpdate, SettingsAdapter, WriteOptions,
};
use folio::types::now;

mod schema;

fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

fn setting_from_row(row: &SqliteRow) -> ClResult<Setting> {
	let typ: String = row.get("type");
	let typ: SettingType = typ.parse().map_err(|err| {
		warn!("DB: corrupt settings row: {}", err);
		Error::DbError
	})?;
	let key: String = row.get("key");
	let value: String = row.get("value");
	let updated_at: Option<i64> = row.get("updated_at");
	let updated_by: Option<String> = row.get("updated_by");

	Ok(Setting {
		key: key.into(),
		value: value.into(),
		typ,
		updated_at: updated_at.map(Timestamp),
		updated_by: updated_by.map(Into::into),
	})
}

#[derive(Debug)]
pub struct SettingsAdapterSqlite {
	db: SqlitePool,
}

impl SettingsAdapterSqlite {
	pub async fn new(path: impl AsRef<Path>) -> ClResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(inspect)
			.or(Err(Error::DbError))?;

		schema::init_db(&db).await.inspect_err(inspect).or(Err(Error::DbError))?;

		Ok(Self { db })
	}

	/// Insert settings that do not exist yet. Existing keys are left
	/// untouched, so seeding is safe to repeat at every startup.
	pub async fn seed(&self, settings: &[Setting]) -> ClResult<usize> {
		let mut tx =
			self.db.begin().await.inspect_err(inspect).or(Err(Error::DbError))?;
		let mut created = 0usize;
		for setting in settings {
			let res = sqlx::query(
				"INSERT OR IGNORE INTO settings (key, value, type, updated_at) VALUES (?, ?, ?, ?)",
			)
			.bind(setting.key.as_ref())
			.bind(setting.value.as_ref())
			.bind(setting.typ.as_str())
			.bind(setting.updated_at.unwrap_or_else(now).0)
			.execute(&mut *tx)
			.await
			.inspect_err(inspect)
			.or(Err(Error::DbError))?;
			created += res.rows_affected() as usize;
		}
		tx.commit().await.inspect_err(inspect).or(Err(Error::DbError))?;

		debug!("Seeded {} settings ({} supplied)", created, settings.len());
		Ok(created)
	}
}

#[async_trait]
impl SettingsAdapter for SettingsAdapterSqlite {
	async fn list_settings(&self, opts: &ListOptions) -> ClResult<Vec<Setting>> {
		let rows = if let Some(typ) = opts.typ {
			sqlx::query(
				"SELECT key, value, type, updated_at, updated_by FROM settings
					WHERE type = ? ORDER BY key",
			)
			.bind(typ.as_str())
			.fetch_all(&self.db)
			.await
		} else {
			sqlx::query(
				"SELECT key, value, type, updated_at, updated_by FROM settings ORDER BY key",
			)
			.fetch_all(&self.db)
			.await
		}
		.inspect_err(inspect)
		.or(Err(Error::DbError))?;

		rows.iter().map(setting_from_row).collect()
	}

	async fn update_settings(
		&self,
		updates: &[SettingUpdate],
		opts: &WriteOptions,
	) -> ClResult<Vec<Setting>> {
		let mut tx =
			self.db.begin().await.inspect_err(inspect).or(Err(Error::DbError))?;
		let updated_at = now().0;
		for update in updates {
			let res = sqlx::query(
				"UPDATE settings SET value = ?, updated_at = ?, updated_by = ? WHERE key = ?",
			)
			.bind(update.value.as_ref())
			.bind(updated_at)
			.bind(opts.user.as_deref())
			.bind(update.key.as_ref())
			.execute(&mut *tx)
			.await
			.inspect_err(inspect)
			.or(Err(Error::DbError))?;
			// The store never creates keys; dropping the transaction rolls
			// back every update already applied in this batch
			if res.rows_affected() == 0 {
				return Err(Error::not_found_setting(&update.key));
			}
		}
		tx.commit().await.inspect_err(inspect).or(Err(Error::DbError))?;

		let mut settings = Vec::with_capacity(updates.len());
		for update in updates {
			let row = sqlx::query(
				"SELECT key, value, type, updated_at, updated_by FROM settings WHERE key = ?",
			)
			.bind(update.key.as_ref())
			.fetch_one(&self.db)
			.await
			.inspect_err(inspect)
			.or(Err(Error::DbError))?;
			settings.push(setting_from_row(&row)?);
		}
		Ok(settings)
	}
}

// vim: ts=4
