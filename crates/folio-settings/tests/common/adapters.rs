//! In-memory collaborator implementations for tests

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use folio_types::error::{ClResult, Error};
use folio_types::permission_gate::PermissionGate;
use folio_types::schema::SchemaValidator;
use folio_types::settings_adapter::{
	ListOptions, Setting, SettingUpdate, SettingsAdapter, WriteOptions,
};
use folio_types::themes::{ThemeCatalog, ThemePackage};
use folio_types::types::{Context, now};

/// In-memory settings store with scriptable write failures.
#[derive(Debug, Default)]
pub struct MemorySettingsAdapter {
	records: RwLock<BTreeMap<Box<str>, Setting>>,
	fail_writes: AtomicBool,
}

impl MemorySettingsAdapter {
	pub fn with_settings(settings: Vec<Setting>) -> Self {
		let adapter = Self::default();
		{
			let mut records = adapter.records.write();
			for setting in settings {
				records.insert(setting.key.clone(), setting);
			}
		}
		adapter
	}

	/// Full store contents, for all-or-nothing assertions
	pub fn snapshot(&self) -> BTreeMap<Box<str>, Setting> {
		self.records.read().clone()
	}

	pub fn set_fail_writes(&self, fail: bool) {
		self.fail_writes.store(fail, Ordering::SeqCst);
	}
}

#[async_trait]
impl SettingsAdapter for MemorySettingsAdapter {
	async fn list_settings(&self, opts: &ListOptions) -> ClResult<Vec<Setting>> {
		let records = self.records.read();
		Ok(records
			.values()
			.filter(|s| opts.typ.is_none_or(|typ| s.typ == typ))
			.cloned()
			.collect())
	}

	async fn update_settings(
		&self,
		updates: &[SettingUpdate],
		opts: &WriteOptions,
	) -> ClResult<Vec<Setting>> {
		if self.fail_writes.load(Ordering::SeqCst) {
			return Err(Error::DbError);
		}
		let mut records = self.records.write();
		// Atomic bulk write: verify every key before touching any record
		for update in updates {
			if !records.contains_key(update.key.as_ref()) {
				return Err(Error::not_found_setting(&update.key));
			}
		}
		let mut updated = Vec::with_capacity(updates.len());
		for update in updates {
			if let Some(record) = records.get_mut(update.key.as_ref()) {
				record.value = update.value.clone();
				record.updated_at = Some(now());
				record.updated_by = opts.user.clone();
				updated.push(record.clone());
			}
		}
		Ok(updated)
	}
}

/// Permission gate that records every consultation and denies listed keys.
/// Denials surface as internal errors to prove the service re-maps them.
#[derive(Debug, Default)]
pub struct ScriptedGate {
	deny: Vec<&'static str>,
	calls: Mutex<Vec<String>>,
}

impl ScriptedGate {
	pub fn denying(deny: Vec<&'static str>) -> Self {
		Self { deny, calls: Mutex::new(Vec::new()) }
	}

	pub fn calls(&self) -> Vec<String> {
		self.calls.lock().clone()
	}

	fn check(&self, action: &str, key: &str) -> ClResult<()> {
		self.calls.lock().push(format!("{}:{}", action, key));
		if self.deny.contains(&key) {
			Err(Error::Internal("gate refused".into()))
		} else {
			Ok(())
		}
	}
}

#[async_trait]
impl PermissionGate for ScriptedGate {
	async fn can_browse_settings(&self, _ctx: &Context) -> ClResult<()> {
		self.check("browse", "*")
	}

	async fn can_read_setting(&self, _ctx: &Context, key: &str) -> ClResult<()> {
		self.check("read", key)
	}

	async fn can_edit_setting(&self, _ctx: &Context, key: &str) -> ClResult<()> {
		self.check("edit", key)
	}
}

/// Pass-through schema validator.
#[derive(Debug)]
pub struct PassSchema;

#[async_trait]
impl SchemaValidator for PassSchema {
	async fn check_object(
		&self,
		payload: &serde_json::Value,
		_resource: &str,
	) -> ClResult<serde_json::Value> {
		Ok(payload.clone())
	}
}

/// Schema validator that rejects everything.
#[derive(Debug)]
pub struct RejectSchema;

#[async_trait]
impl SchemaValidator for RejectSchema {
	async fn check_object(
		&self,
		_payload: &serde_json::Value,
		resource: &str,
	) -> ClResult<serde_json::Value> {
		Err(Error::ValidationError(format!("Invalid {} payload", resource)))
	}
}

/// Fixed theme catalog.
#[derive(Debug)]
pub struct StaticThemes(pub Vec<&'static str>);

impl ThemeCatalog for StaticThemes {
	fn filter_packages(&self, active: Option<&str>) -> Vec<ThemePackage> {
		self.0
			.iter()
			.map(|name| {
				let mut pkg = ThemePackage::new(*name);
				pkg.active = active == Some(name);
				pkg
			})
			.collect()
	}
}
